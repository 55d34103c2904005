//! JSON trace output.
//!
//! Kept events are written one per line, exactly as they appeared in the
//! input, inside a `{"traceEvents": [...]}` frame.

use crate::parser::TraceEvent;
use crate::utils::config::{EVENT_INDENT, TRACE_EVENTS_FIELD};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Render events into an output document
///
/// **Public** - used by the filter to measure and by the command to write
///
/// # Example
/// ```ignore
/// let doc = render_trace(&trace.events);
/// assert!(doc.starts_with("{\n  \"traceEvents\": ["));
/// ```
pub fn render_trace<'a>(events: impl IntoIterator<Item = &'a TraceEvent>) -> String {
    let body = events
        .into_iter()
        .map(|event| format!("{EVENT_INDENT}{}", event.as_json()))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("{{\n  \"{TRACE_EVENTS_FIELD}\": [\n{body}\n  ]\n}}")
}

/// Write a rendered trace to a file
///
/// **Public** - main entry point for trace output
///
/// The document is written to a temporary file next to the target and then
/// moved into place, so the target either holds the full output or is left
/// untouched.
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` - I/O error while writing the temporary file
/// * `OutputError::PersistFailed` - Temporary file could not replace the target
pub fn write_trace(contents: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing trace to: {}", output_path.display());

    super::validate_path(output_path)?;

    let parent = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.exists() {
        debug!("Creating parent directories: {}", parent.display());
        std::fs::create_dir_all(parent).map_err(|e| {
            OutputError::InvalidPath(format!(
                "Cannot create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;

    file.persist(output_path)
        .map_err(|e| OutputError::PersistFailed {
            path: output_path.to_path_buf(),
            source: e.error,
        })?;

    debug!("Trace written ({} bytes)", contents.len());

    Ok(())
}

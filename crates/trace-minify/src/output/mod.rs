//! Output rendering and writing for minified traces.
//!
//! - Renders kept events into a `traceEvents` document
//! - Writes it to disk atomically

pub mod json;

// Re-export main functions
pub use json::{render_trace, write_trace};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

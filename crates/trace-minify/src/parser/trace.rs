//! Trace document parsing.
//!
//! Accepts the standard capture shape `{"traceEvents": [...], ...}`.
//! Other top-level fields (metadata, stack frames) are ignored.

use crate::parser::schema::{Trace, TraceEvent};
use crate::utils::error::ParseError;
use log::{debug, info};
use serde::Deserialize;
use serde_json::value::RawValue;
use std::path::Path;

#[derive(Deserialize)]
struct TraceDocument {
    #[serde(rename = "traceEvents", default)]
    trace_events: Option<Vec<Box<RawValue>>>,
}

/// Parse a trace document held in memory
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `raw` - Complete JSON document
///
/// # Returns
/// Trace with every event decoded, in document order
///
/// # Errors
/// * `ParseError::Json` - Input is not valid JSON
/// * `ParseError::MissingTraceEvents` - Document is not an object with a `traceEvents` field
///
/// # Example
/// ```ignore
/// let trace = parse_trace(r#"{"traceEvents": []}"#)?;
/// assert!(trace.is_empty());
/// ```
pub fn parse_trace(raw: &str) -> Result<Trace, ParseError> {
    if !raw.trim_start().starts_with('{') {
        // Still surface a JSON error for garbage input
        serde_json::from_str::<serde::de::IgnoredAny>(raw)?;
        return Err(ParseError::MissingTraceEvents);
    }

    let document: TraceDocument = serde_json::from_str(raw)?;
    let raw_events = document
        .trace_events
        .ok_or(ParseError::MissingTraceEvents)?;

    let events: Vec<TraceEvent> = raw_events.into_iter().map(TraceEvent::from_raw).collect();

    debug!("Parsed {} trace events ({} bytes)", events.len(), raw.len());

    Ok(Trace::new(events, raw.len()))
}

/// Read and parse a trace file
///
/// # Errors
/// * `ParseError::Io` - File cannot be read
/// * Any error from [`parse_trace`]
pub fn read_trace(input_path: impl AsRef<Path>) -> Result<Trace, ParseError> {
    let input_path = input_path.as_ref();

    info!("Reading trace from: {}", input_path.display());

    let raw = std::fs::read_to_string(input_path)?;
    parse_trace(&raw)
}

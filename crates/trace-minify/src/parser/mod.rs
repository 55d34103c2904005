//! Trace parsing and event model.
//!
//! This module handles:
//! - Parsing the raw JSON trace document
//! - Extracting the `traceEvents` array
//! - Decoding the fields the filter classifies on, while keeping each
//!   event's original JSON text

pub mod schema;
pub mod trace;

// Re-export main types
pub use schema::{ProcessId, Trace, TraceEvent};
pub use trace::{parse_trace, read_trace};

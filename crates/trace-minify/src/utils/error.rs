//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and parsing an input trace
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Trace document has no `traceEvents` array")]
    MissingTraceEvents,
}

/// Errors raised by the trace filter
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    #[error("Could not find {anchor}")]
    AnchorNotFound { anchor: String },
}

/// Errors that can occur while loading classification tables
#[derive(Error, Debug)]
pub enum TablesError {
    #[error("Failed to read tables file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tables TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid classification tables: {0}")]
    Invalid(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Failed to move output into place at {path}: {source}")]
    PersistFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

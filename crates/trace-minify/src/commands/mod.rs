//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod minify;
pub mod models;

// Re-export main command functions
pub use minify::{execute_minify, report_lines, validate_args};
pub use models::MinifyArgs;

//! Trace Minify library
//!
//! Reduces a browser performance trace to the events needed to replay a
//! page-load timeline: the main page's process-scoped milestones and
//! long top-level tasks, plus a fixed set of trace-wide markers.
//!
//! This exposes the internal modules for the `minify-trace` CLI and for
//! testing.

pub mod commands;
pub mod filter;
pub mod output;
pub mod parser;
pub mod utils;

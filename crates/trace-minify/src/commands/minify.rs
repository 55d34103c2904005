//! Minify command implementation.
//!
//! The minify command:
//! 1. Loads classification tables
//! 2. Reads and parses the input trace
//! 3. Filters it
//! 4. Writes the output trace
//! 5. Reports the reduction

use crate::commands::models::MinifyArgs;
use crate::filter::{load_tables, minify_trace, ClassificationTables, FilterSummary};
use crate::output::write_trace;
use crate::parser::read_trace;
use anyhow::{Context, Result};
use colored::*;
use log::{debug, info};
use std::time::Instant;

/// Execute the minify command
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is written unless every step before the write succeeds.
///
/// # Errors
/// * Unreadable input or tables file
/// * Malformed trace document
/// * No anchor event in the trace
/// * Output write errors
pub fn execute_minify(args: MinifyArgs) -> Result<FilterSummary> {
    let start_time = Instant::now();

    let tables = match &args.tables {
        Some(path) => load_tables(path)
            .with_context(|| format!("Failed to load tables from {}", path.display()))?,
        None => ClassificationTables::default(),
    };

    let trace = read_trace(&args.input)
        .with_context(|| format!("Failed to read trace {}", args.input.display()))?;
    debug!("Loaded {} events", trace.len());

    let filtered = minify_trace(&trace, &tables).context("Failed to filter trace")?;

    write_trace(&filtered.rendered, &args.output)
        .with_context(|| format!("Failed to write trace {}", args.output.display()))?;

    for line in report_lines(&filtered.summary) {
        println!("{}", line.green());
    }

    info!(
        "Minify completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(filtered.summary)
}

/// Human-readable reduction report
///
/// **Public** - informational output, not part of the data contract
pub fn report_lines(summary: &FilterSummary) -> [String; 2] {
    [
        format!(
            "Reduced trace from {}kb to {}kb",
            summary.original_kb(),
            summary.filtered_kb()
        ),
        format!("Filtered out {} trace events", summary.events_removed()),
    ]
}

/// Validate minify arguments
///
/// **Public** - can be called before execute_minify for early validation
pub fn validate_args(args: &MinifyArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if let Some(tables) = &args.tables {
        if tables.as_os_str().is_empty() {
            anyhow::bail!("Tables path cannot be empty");
        }
    }

    Ok(())
}

//! Trace Minify CLI
//!
//! Reduces a browser performance trace to the events needed to replay a
//! page-load timeline, for use as a test fixture.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use trace_minify::commands::{execute_minify, validate_args, MinifyArgs};

/// Minify a browser performance trace
#[derive(Parser, Debug)]
#[command(name = "minify-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Trace JSON to read (must contain a `traceEvents` array)
    input: PathBuf,

    /// Where to write the minified trace
    output: PathBuf,

    /// TOML file overriding the classification tables
    #[arg(long, env = "MINIFY_TRACE_TABLES")]
    tables: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments; a wrong argument count exits here with a usage error
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = MinifyArgs {
        input: cli.input,
        output: cli.output,
        tables: cli.tables,
    };

    validate_args(&args)?;

    let summary = execute_minify(args)?;
    log::debug!(
        "{} of {} events kept",
        summary.filtered_event_count,
        summary.original_event_count
    );

    Ok(())
}

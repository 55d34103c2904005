//! Trace filtering.
//!
//! Two passes over the event sequence:
//! 1. Resolve the main process from the anchor event
//! 2. Classify each event independently, keeping input order
//!
//! # Example
//! ```ignore
//! use trace_minify::filter::{minify_trace, ClassificationTables};
//! use trace_minify::parser::read_trace;
//!
//! let trace = read_trace("trace.json")?;
//! let filtered = minify_trace(&trace, &ClassificationTables::default())?;
//! println!("{}", filtered.summary.events_removed());
//! ```

mod classify;
mod tables;

pub use classify::{classify, resolve_anchor_pid, Classification, DropReason, KeepReason};
pub use tables::{load_tables, tables_from_toml, ClassificationTables};

use crate::output::render_trace;
use crate::parser::{Trace, TraceEvent};
use crate::utils::config::BYTES_PER_KB;
use crate::utils::error::FilterError;
use log::debug;

/// Size and count reduction of one filtering pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSummary {
    pub original_event_count: usize,
    pub filtered_event_count: usize,
    pub original_byte_size: usize,
    pub filtered_byte_size: usize,
}

impl FilterSummary {
    pub fn events_removed(&self) -> usize {
        self.original_event_count
            .saturating_sub(self.filtered_event_count)
    }

    pub fn bytes_removed(&self) -> usize {
        self.original_byte_size
            .saturating_sub(self.filtered_byte_size)
    }

    /// Input size in whole kilobytes, rounded
    pub fn original_kb(&self) -> u64 {
        to_kb(self.original_byte_size)
    }

    /// Output size in whole kilobytes, rounded
    pub fn filtered_kb(&self) -> u64 {
        to_kb(self.filtered_byte_size)
    }
}

fn to_kb(bytes: usize) -> u64 {
    (bytes as f64 / BYTES_PER_KB).round() as u64
}

/// Per-reason tallies from the classification pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationStats {
    pub kept_main_process: usize,
    pub kept_always: usize,
    pub dropped_short_tasks: usize,
    pub dropped_foreign_process: usize,
    pub dropped_other: usize,
}

impl ClassificationStats {
    pub fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Keep(KeepReason::MainProcess) => self.kept_main_process += 1,
            Classification::Keep(KeepReason::AlwaysKeep) => self.kept_always += 1,
            Classification::Drop(DropReason::ShortTopLevelTask) => self.dropped_short_tasks += 1,
            Classification::Drop(DropReason::ForeignProcess) => {
                self.dropped_foreign_process += 1
            }
            Classification::Drop(DropReason::NotRetained) => self.dropped_other += 1,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "kept {} main-process + {} always-kept, dropped {} short tasks + {} foreign-process + {} other",
            self.kept_main_process,
            self.kept_always,
            self.dropped_short_tasks,
            self.dropped_foreign_process,
            self.dropped_other
        )
    }
}

/// Result of minifying a whole trace
#[derive(Debug, Clone)]
pub struct FilteredTrace {
    /// Kept events in input order
    pub events: Vec<TraceEvent>,

    /// Output document for `events`
    pub rendered: String,

    pub summary: FilterSummary,

    pub stats: ClassificationStats,
}

/// Select the events to keep, without copying them
///
/// **Public** - filtering without rendering
///
/// # Errors
/// * `FilterError::AnchorNotFound` - No anchor event in `events`
pub fn filter_events<'a>(
    events: &'a [TraceEvent],
    tables: &ClassificationTables,
) -> Result<Vec<&'a TraceEvent>, FilterError> {
    select_events(events, tables).map(|(kept, _)| kept)
}

/// Minify a trace: filter, render and measure
///
/// **Public** - main entry point for the filter
///
/// # Arguments
/// * `trace` - Parsed input trace
/// * `tables` - Classification tables
///
/// # Errors
/// * `FilterError::AnchorNotFound` - No anchor event; nothing is produced
pub fn minify_trace(
    trace: &Trace,
    tables: &ClassificationTables,
) -> Result<FilteredTrace, FilterError> {
    let (kept, stats) = select_events(&trace.events, tables)?;
    debug!("Classification: {}", stats.summary());

    let rendered = render_trace(kept.iter().copied());

    let summary = FilterSummary {
        original_event_count: trace.len(),
        filtered_event_count: kept.len(),
        original_byte_size: trace.byte_size,
        filtered_byte_size: rendered.len(),
    };

    Ok(FilteredTrace {
        events: kept.into_iter().cloned().collect(),
        rendered,
        summary,
        stats,
    })
}

// Both passes: resolve the main process, then one left-to-right scan
fn select_events<'a>(
    events: &'a [TraceEvent],
    tables: &ClassificationTables,
) -> Result<(Vec<&'a TraceEvent>, ClassificationStats), FilterError> {
    let main_pid = resolve_anchor_pid(events, tables)?;
    debug!("Main process resolved from {}: {:?}", tables.anchor(), main_pid);

    let mut stats = ClassificationStats::default();
    let kept = events
        .iter()
        .filter(|event| {
            let classification = classify(event, main_pid, tables);
            stats.record(classification);
            classification.is_keep()
        })
        .collect();

    Ok((kept, stats))
}

#[cfg(test)]
mod tests;

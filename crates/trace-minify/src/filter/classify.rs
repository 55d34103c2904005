//! Anchor resolution and per-event classification.
//!
//! Both functions are pure: they read events and tables and return a
//! decision, nothing else.

use super::tables::ClassificationTables;
use crate::parser::{ProcessId, TraceEvent};
use crate::utils::error::FilterError;

/// Why an event was kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeepReason {
    /// Process-scoped name emitted by the main process
    MainProcess,
    /// Name retained regardless of process
    AlwaysKeep,
}

/// Why an event was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// Top-level task below the duration threshold, or with no duration
    ShortTopLevelTask,
    /// Process-scoped name emitted by some other process
    ForeignProcess,
    /// Name not in any table
    NotRetained,
}

/// Keep/drop decision for a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Keep(KeepReason),
    Drop(DropReason),
}

impl Classification {
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep(_))
    }
}

/// Find the main process
///
/// **Public** - first pass of the filter
///
/// Returns the `pid` of the first event named after the anchor. The pid
/// itself may be absent; only a missing anchor is an error.
///
/// # Errors
/// * `FilterError::AnchorNotFound` - No event carries the anchor name
pub fn resolve_anchor_pid<'a>(
    events: &'a [TraceEvent],
    tables: &ClassificationTables,
) -> Result<Option<&'a ProcessId>, FilterError> {
    events
        .iter()
        .find(|event| event.name() == Some(tables.anchor()))
        .map(|event| event.pid.as_ref())
        .ok_or_else(|| FilterError::AnchorNotFound {
            anchor: tables.anchor().to_string(),
        })
}

/// Decide whether an event is kept
///
/// **Public** - second pass of the filter, applied to each event
///
/// Rules, first match wins:
/// 1. Top-level task shorter than the threshold (or without `dur`): drop
/// 2. Process-scoped name from the main process: keep
/// 3. Always-keep name: keep
/// 4. Anything else: drop
pub fn classify(
    event: &TraceEvent,
    main_pid: Option<&ProcessId>,
    tables: &ClassificationTables,
) -> Classification {
    let Some(name) = event.name() else {
        return Classification::Drop(DropReason::NotRetained);
    };

    if tables.is_top_level_task(name) && !meets_task_threshold(event.dur, tables) {
        return Classification::Drop(DropReason::ShortTopLevelTask);
    }

    let process_scoped = tables.is_process_scoped(name);

    if process_scoped && event.pid.as_ref() == main_pid {
        return Classification::Keep(KeepReason::MainProcess);
    }

    if tables.is_always_kept(name) {
        return Classification::Keep(KeepReason::AlwaysKeep);
    }

    if process_scoped {
        Classification::Drop(DropReason::ForeignProcess)
    } else {
        Classification::Drop(DropReason::NotRetained)
    }
}

// Missing duration fails the threshold
fn meets_task_threshold(dur: Option<f64>, tables: &ClassificationTables) -> bool {
    dur.is_some_and(|dur| dur >= tables.min_task_duration_us())
}

//! Whole-pass tests for the trace filter.
//!
//! Covers ordering, idempotence and the table-membership rules over mixed
//! multi-process traces.

use super::*;
use crate::parser::{parse_trace, ProcessId};
use pretty_assertions::assert_eq;

const PROCESS_TASK: &str = "TaskQueueManager::ProcessTaskFromWorkQueue";

/// Build a trace from event JSON snippets
fn trace_of(events: &[&str]) -> Trace {
    parse_trace(&format!(r#"{{"traceEvents": [{}]}}"#, events.join(","))).unwrap()
}

fn names(events: &[TraceEvent]) -> Vec<&str> {
    events.iter().map(|e| e.name().unwrap_or("")).collect()
}

/// Renderer-heavy capture: page in pid 10, an ad iframe in pid 20, browser in pid 1
fn multi_process_trace() -> Trace {
    trace_of(&[
        r#"{"name":"TracingStartedInBrowser","pid":1,"ts":0}"#,
        r#"{"name":"EvaluateScript","pid":20,"dur":3000,"ts":1}"#,
        r#"{"name":"TracingStartedInPage","pid":10,"ts":2,"args":{"data":{"page":"0x1"}}}"#,
        r#"{"name":"navigationStart","pid":10,"ts":3}"#,
        r#"{"name":"TaskQueueManager::ProcessTaskFromWorkQueue","pid":10,"dur":40,"ts":4}"#,
        r#"{"name":"TaskQueueManager::ProcessTaskFromWorkQueue","pid":10,"dur":2500,"ts":5}"#,
        r#"{"name":"ParseHTML","pid":10,"dur":800,"ts":6}"#,
        r#"{"name":"Layout","pid":10,"dur":900,"ts":7}"#,
        r#"{"name":"TimerInstall","pid":20,"ts":8}"#,
        r#"{"name":"TimerInstall","pid":10,"ts":9}"#,
        r#"{"name":"ResourceSendRequest","pid":1,"ts":10}"#,
        r#"{"name":"firstContentfulPaint","pid":10,"ts":11}"#,
        r#"{"name":"ThreadControllerImpl::DoWork","pid":20,"dur":5000,"ts":12}"#,
        r#"{"name":"Screenshot","pid":1,"ts":13,"args":{"snapshot":"/9j/4AAQ"}}"#,
        r#"{"ph":"M","pid":10,"ts":14}"#,
    ])
}

#[test]
fn test_reference_example() {
    let trace = trace_of(&[
        r#"{"name":"TracingStartedInPage","pid":1}"#,
        r#"{"name":"EvaluateScript","pid":1,"dur":500}"#,
        r#"{"name":"EvaluateScript","pid":2,"dur":500}"#,
        r#"{"name":"TaskQueueManager::ProcessTaskFromWorkQueue","pid":1,"dur":200}"#,
        r#"{"name":"Screenshot","pid":9}"#,
    ]);

    let filtered = minify_trace(&trace, &ClassificationTables::default()).unwrap();

    let kept: Vec<&str> = filtered.events.iter().map(|e| e.as_json()).collect();
    assert_eq!(
        kept,
        vec![
            r#"{"name":"TracingStartedInPage","pid":1}"#,
            r#"{"name":"EvaluateScript","pid":1,"dur":500}"#,
            r#"{"name":"Screenshot","pid":9}"#,
        ]
    );
    assert_eq!(filtered.summary.original_event_count, 5);
    assert_eq!(filtered.summary.filtered_event_count, 3);
    assert_eq!(filtered.summary.events_removed(), 2);
}

#[test]
fn test_multi_process_selection() {
    let filtered = minify_trace(&multi_process_trace(), &ClassificationTables::default()).unwrap();

    assert_eq!(
        names(&filtered.events),
        vec![
            "TracingStartedInBrowser",
            "TracingStartedInPage",
            "navigationStart",
            PROCESS_TASK,
            "ParseHTML",
            "TimerInstall",
            "ResourceSendRequest",
            "firstContentfulPaint",
            "Screenshot",
        ]
    );
    // the surviving TimerInstall is the main-process one
    assert_eq!(filtered.events[5].pid, Some(ProcessId::from(10)));
    assert_eq!(filtered.events[3].dur, Some(2500.0));
}

#[test]
fn test_stats_account_for_every_event() {
    let filtered = minify_trace(&multi_process_trace(), &ClassificationTables::default()).unwrap();
    let stats = &filtered.stats;

    assert_eq!(stats.kept_main_process, 3);
    assert_eq!(stats.kept_always, 6);
    assert_eq!(stats.dropped_short_tasks, 1);
    // EvaluateScript, TimerInstall and DoWork from pid 20
    assert_eq!(stats.dropped_foreign_process, 3);
    assert_eq!(stats.dropped_other, 2);
}

#[test]
fn test_output_is_ordered_subsequence() {
    let trace = multi_process_trace();
    let input: Vec<String> = trace.events.iter().map(|e| e.as_json().to_string()).collect();

    let filtered = minify_trace(&trace, &ClassificationTables::default()).unwrap();

    let mut cursor = input.iter();
    for kept in &filtered.events {
        assert!(
            cursor.any(|original| original == kept.as_json()),
            "event out of order or not from input: {}",
            kept.as_json()
        );
    }
}

#[test]
fn test_filter_is_idempotent() {
    let tables = ClassificationTables::default();
    let first = minify_trace(&multi_process_trace(), &tables).unwrap();

    let reparsed = parse_trace(&first.rendered).unwrap();
    let second = minify_trace(&reparsed, &tables).unwrap();

    assert_eq!(second.rendered, first.rendered);
    assert_eq!(second.summary.events_removed(), 0);
}

#[test]
fn test_mistyped_events_do_not_abort_the_run() {
    let odd_events = [
        r#"{"name":"EvaluateScript","pid":"gpu","dur":500}"#,
        r#"{"name":"EvaluateScript","pid":1.0,"dur":500,"args":{}}"#,
        r#"{"name":"Layout","name":"TimerFire","pid":3}"#,
        r#"{"name":"ThreadControllerImpl::DoWork","pid":1,"dur":"12"}"#,
    ];

    for odd in odd_events {
        let trace = trace_of(&[
            r#"{"name":"TracingStartedInPage","pid":1}"#,
            odd,
            r#"{"name":"Screenshot","pid":2}"#,
        ]);

        let filtered = minify_trace(&trace, &ClassificationTables::default()).unwrap();

        let expected_kept = if odd.contains("1.0") { 3 } else { 2 };
        assert_eq!(filtered.events.len(), expected_kept, "{odd}");
        assert_eq!(filtered.events[0].name(), Some("TracingStartedInPage"));
        assert_eq!(filtered.events.last().unwrap().name(), Some("Screenshot"));
    }
}

#[test]
fn test_missing_anchor_produces_nothing() {
    let trace = trace_of(&[
        r#"{"name":"TracingStartedInBrowser","pid":1}"#,
        r#"{"name":"Screenshot","pid":1}"#,
    ]);

    let err = minify_trace(&trace, &ClassificationTables::default()).unwrap_err();
    assert!(matches!(err, FilterError::AnchorNotFound { .. }));
}

#[test]
fn test_filter_events_borrows_in_order() {
    let trace = multi_process_trace();
    let kept = filter_events(&trace.events, &ClassificationTables::default()).unwrap();

    assert_eq!(kept.len(), 9);
    assert_eq!(kept[0].name(), Some("TracingStartedInBrowser"));
    assert_eq!(kept[8].name(), Some("Screenshot"));
}

#[test]
fn test_substituted_tables() {
    let tables = ClassificationTables::new("Begin", 10.0, ["Marker"], ["Work"], ["Loop"]);
    let trace = trace_of(&[
        r#"{"name":"TracingStartedInPage","pid":1}"#,
        r#"{"name":"Begin","pid":5}"#,
        r#"{"name":"Work","pid":5}"#,
        r#"{"name":"Work","pid":1}"#,
        r#"{"name":"Loop","pid":5,"dur":9}"#,
        r#"{"name":"Loop","pid":5,"dur":10}"#,
        r#"{"name":"Marker","pid":3}"#,
        r#"{"name":"Screenshot","pid":5}"#,
    ]);

    let filtered = minify_trace(&trace, &tables).unwrap();

    let kept: Vec<(&str, Option<ProcessId>)> = filtered
        .events
        .iter()
        .map(|e| (e.name().unwrap_or(""), e.pid.clone()))
        .collect();
    assert_eq!(
        kept,
        vec![
            ("Work", Some(ProcessId::from(5))),
            ("Loop", Some(ProcessId::from(5))),
            ("Marker", Some(ProcessId::from(3))),
        ]
    );
}

#[test]
fn test_summary_byte_sizes() {
    let raw = r#"{"traceEvents": [{"name":"TracingStartedInPage","pid":1},{"name":"Layout","pid":1}]}"#;
    let trace = parse_trace(raw).unwrap();

    let filtered = minify_trace(&trace, &ClassificationTables::default()).unwrap();

    assert_eq!(filtered.summary.original_byte_size, raw.len());
    assert_eq!(filtered.summary.filtered_byte_size, filtered.rendered.len());
}

#[test]
fn test_summary_kilobyte_rounding() {
    let summary = FilterSummary {
        original_event_count: 10,
        filtered_event_count: 4,
        original_byte_size: 1536,
        filtered_byte_size: 511,
    };

    assert_eq!(summary.original_kb(), 2);
    assert_eq!(summary.filtered_kb(), 0);
    assert_eq!(summary.bytes_removed(), 1025);
    assert_eq!(summary.events_removed(), 6);
}

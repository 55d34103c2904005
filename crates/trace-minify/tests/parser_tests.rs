use std::fs;
use trace_minify::parser::{read_trace, TraceEvent};
use trace_minify::utils::error::ParseError;

#[test]
fn test_read_trace_from_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("trace.json");
    let raw = r#"{"traceEvents":[{"name":"TracingStartedInPage","pid":4,"ts":1},{"name":"ParseHTML","pid":4,"dur":12.5}]}"#;
    fs::write(&path, raw).unwrap();

    let trace = read_trace(&path).unwrap();

    assert_eq!(trace.len(), 2);
    assert_eq!(trace.byte_size, raw.len());
    assert_eq!(trace.events[1].dur, Some(12.5));
}

#[test]
fn test_read_trace_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    let err = read_trace(temp_dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}

#[test]
fn test_read_trace_without_trace_events() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("trace.json");
    fs::write(&path, r#"{"nodes": [], "samples": []}"#).unwrap();

    let err = read_trace(&path).unwrap_err();
    assert!(matches!(err, ParseError::MissingTraceEvents));
}

#[test]
fn test_event_payload_kept_verbatim() {
    let json = r#"{"args":{"data":{"url":"https://example.com/","priority":"VeryHigh"}},"cat":"devtools.timeline","name":"ResourceSendRequest","ph":"I","pid":1,"s":"t","tid":259,"ts":1.0e3}"#;

    let event = TraceEvent::from_json(json).unwrap();

    assert_eq!(event.name(), Some("ResourceSendRequest"));
    assert_eq!(event.as_json(), json);
}

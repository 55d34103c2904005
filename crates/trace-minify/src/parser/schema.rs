//! Trace event model.
//!
//! A `TraceEvent` exposes the three fields classification needs and keeps
//! the rest of the record as the exact JSON text it was parsed from.
//!
//! Decoding never rejects an event: a field with an unexpected type simply
//! fails to match anything, so one odd record cannot abort a run.

use serde_json::value::RawValue;
use serde_json::Value;

/// Emitting process, compared like a JSON primitive
///
/// Numbers compare by value (`1` equals `1.0`), strings and booleans by
/// content. Objects and arrays never equal anything.
#[derive(Debug, Clone)]
pub enum ProcessId {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
    Opaque,
}

impl PartialEq for ProcessId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

impl From<i64> for ProcessId {
    fn from(pid: i64) -> Self {
        Self::Number(pid as f64)
    }
}

impl From<&Value> for ProcessId {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map_or(Self::Opaque, Self::Number),
            Value::String(s) => Self::Text(s.clone()),
            Value::Bool(b) => Self::Bool(*b),
            Value::Null => Self::Null,
            Value::Array(_) | Value::Object(_) => Self::Opaque,
        }
    }
}

/// One instrumentation record from a capture
#[derive(Debug, Clone)]
pub struct TraceEvent {
    /// Instrumentation point, e.g. "EvaluateScript"; `None` unless a string
    pub name: Option<String>,

    /// Emitting process
    pub pid: Option<ProcessId>,

    /// Duration in microseconds; `None` when absent or not a number
    pub dur: Option<f64>,

    raw: Box<RawValue>,
}

impl TraceEvent {
    /// Decode an event from its raw JSON text
    ///
    /// Non-object events carry no fields. Repeated keys resolve to the last
    /// occurrence.
    pub fn from_raw(raw: Box<RawValue>) -> Self {
        let fields = match serde_json::from_str::<Value>(raw.get()) {
            Ok(Value::Object(fields)) => fields,
            _ => serde_json::Map::new(),
        };

        Self {
            name: fields
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_owned),
            pid: fields.get("pid").map(ProcessId::from),
            dur: fields.get("dur").and_then(Value::as_f64),
            raw,
        }
    }

    /// Decode an event from a JSON string
    ///
    /// **Public** - mostly useful for building fixtures in tests
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_raw(RawValue::from_string(json.trim().to_owned())?))
    }

    /// Event name, if present
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The event exactly as it appeared in the input
    pub fn as_json(&self) -> &str {
        self.raw.get()
    }
}

impl PartialEq for TraceEvent {
    fn eq(&self, other: &Self) -> bool {
        self.as_json() == other.as_json()
    }
}

/// One capture session: the ordered event sequence
#[derive(Debug, Clone, Default)]
pub struct Trace {
    /// Events in capture order
    pub events: Vec<TraceEvent>,

    /// Size of the serialized input document in bytes
    pub byte_size: usize,
}

impl Trace {
    pub fn new(events: Vec<TraceEvent>, byte_size: usize) -> Self {
        Self { events, byte_size }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

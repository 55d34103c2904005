//! Configuration and constants for the minifier.

/// Name of the event marking the start of page-level tracing.
/// The process that emits it is the "main" process for the whole pass.
pub const ANCHOR_EVENT_NAME: &str = "TracingStartedInPage";

/// Top-level tasks shorter than this (in microseconds) are dropped
pub const MIN_TASK_DURATION_US: f64 = 1000.0;

/// Field holding the event array in both input and output documents
pub const TRACE_EVENTS_FIELD: &str = "traceEvents";

/// Indentation of each event line in the rendered output
pub const EVENT_INDENT: &str = "    ";

/// Bytes per reported kilobyte
pub const BYTES_PER_KB: f64 = 1024.0;

// Default classification tables
pub const TOP_LEVEL_TASK_NAMES: &[&str] = &[
    "TaskQueueManager::ProcessTaskFromWorkQueue",
    "ThreadControllerImpl::DoWork",
];

pub const ALWAYS_KEEP_NAMES: &[&str] = &[
    "Screenshot",
    "TracingStartedInBrowser",
    "TracingStartedInPage",
    "navigationStart",
    "ParseAuthorStyleSheet",
    "ParseHTML",
    "PlatformResourceSendRequest",
    "ResourceSendRequest",
    "ResourceReceiveResponse",
    "ResourceFinish",
    "ResourceReceivedData",
    "EventDispatch",
];

// Top-level task names are folded in when the tables are built
pub const PROCESS_SCOPED_KEEP_NAMES: &[&str] = &[
    "firstPaint",
    "firstContentfulPaint",
    "firstMeaningfulPaint",
    "firstMeaningfulPaintCandidate",
    "loadEventEnd",
    "domContentLoadedEventEnd",
    "TimerInstall",
    "TimerFire",
    "InvalidateLayout",
    "ScheduleStyleRecalculation",
    "EvaluateScript",
    "XHRReadyStateChange",
    "FunctionCall",
    "v8.compile",
];

//! Shared fixtures for the Verdict behaviour tests.
//!
//! Builds contexts that capture their output and canned snapshots for
//! the log round-trip tests.

#![warn(missing_docs)]

use serde_json::json;
use verdict_config::{Settings, Verbosity};
use verdict_report::{CaptureSink, ReportContext, SinkRegistry};
use verdict_store::{ErrorRecord, Snapshot};

/// A context whose initial sink is a capture buffer.
pub struct Harness {
    /// The context under test.
    pub ctx: ReportContext,
    /// Everything the initial sink received.
    pub capture: CaptureSink,
}

/// Builds a capturing context at `verbosity`.
pub fn harness(verbosity: Verbosity) -> Harness {
    let settings = Settings::default().with_verbosity(verbosity);
    let capture = CaptureSink::new();
    let ctx = ReportContext::with_sinks(&settings, SinkRegistry::with_initial(capture.sink()));
    Harness { ctx, capture }
}

/// A snapshot with notes but no errors.
pub fn pass_snapshot() -> Snapshot {
    Snapshot {
        notes: vec!["Trying example: xs=[1, 2]".to_string()],
        errors: None,
        test_name: Some("test_sort_is_idempotent".to_string()),
        statistics: Some(json!({"examples": 100, "invalid": 0})),
    }
}

/// A snapshot with one error.
pub fn fail_snapshot() -> Snapshot {
    Snapshot {
        notes: vec!["Falsifying example: xs=[0]".to_string()],
        errors: Some(vec![ErrorRecord::new(json!({
            "type": "AssertionError",
            "message": "assert 0 > 0",
        }))]),
        test_name: Some("test_all_positive".to_string()),
        statistics: None,
    }
}

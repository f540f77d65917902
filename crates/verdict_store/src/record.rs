//! Plain-data records: snapshots, error records, and pass/fail outcomes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// An immutable copy of a [`DiagnosticStore`](crate::DiagnosticStore)'s fields.
///
/// Serializes to the flat object stored in each `pass`/`fail` entry of the
/// log: `notes` is always present, the other fields only when set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Notes appended during the run, in order.
    #[serde(default)]
    pub notes: Vec<String>,
    /// Errors recorded during the run. `Some` marks the run as failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorRecord>>,
    /// Label of the test that produced this record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_name: Option<String>,
    /// Arbitrary statistics attached by the runner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Value>,
}

impl Snapshot {
    /// Classifies this snapshot for the log.
    ///
    /// A snapshot fails iff its `errors` field is present, whether or not
    /// the list is empty.
    pub fn outcome(&self) -> Outcome {
        if self.errors.is_some() {
            Outcome::Fail
        } else {
            Outcome::Pass
        }
    }
}

/// Whether a run is logged under `pass` or `fail`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// No errors were recorded.
    Pass,
    /// At least one error was recorded.
    Fail,
}

impl Outcome {
    /// The key this outcome is filed under in the log document.
    pub fn key(self) -> &'static str {
        match self {
            Outcome::Pass => "pass",
            Outcome::Fail => "fail",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An opaque error record carried in a snapshot's `errors` list.
///
/// Serialized transparently, so whatever JSON value the runner supplies is
/// written to the log unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorRecord(Value);

impl ErrorRecord {
    /// Wraps an arbitrary JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the record, returning the underlying JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for ErrorRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<String> for ErrorRecord {
    fn from(message: String) -> Self {
        Self(Value::String(message))
    }
}

impl From<&str> for ErrorRecord {
    fn from(message: &str) -> Self {
        Self(Value::String(message.to_string()))
    }
}

/// A single field write accepted by [`DiagnosticStore::update`](crate::DiagnosticStore::update).
///
/// Notes merge (append); every other field is last-write-wins.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldUpdate {
    /// Append one note.
    Note(String),
    /// Set the test label.
    TestName(String),
    /// Set the statistics value.
    Statistics(Value),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn outcome_follows_errors_presence() {
        let mut snapshot = Snapshot {
            notes: vec!["kept".to_string()],
            ..Snapshot::default()
        };
        assert_eq!(snapshot.outcome(), Outcome::Pass);

        snapshot.errors = Some(vec![ErrorRecord::from("boom")]);
        assert_eq!(snapshot.outcome(), Outcome::Fail);
    }

    #[test]
    fn present_but_empty_errors_still_fail() {
        let snapshot = Snapshot {
            errors: Some(Vec::new()),
            ..Snapshot::default()
        };
        assert_eq!(snapshot.outcome(), Outcome::Fail);
    }

    #[test]
    fn unset_fields_are_omitted() {
        let snapshot = Snapshot {
            notes: vec!["a".to_string()],
            ..Snapshot::default()
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value, json!({ "notes": ["a"] }));
    }

    #[test]
    fn all_fields_serialize_flat() {
        let snapshot = Snapshot {
            notes: vec![],
            errors: Some(vec![ErrorRecord::new(json!({"kind": "AssertionError"}))]),
            test_name: Some("test_sorting".to_string()),
            statistics: Some(json!({"examples": 100})),
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            value,
            json!({
                "notes": [],
                "errors": [{"kind": "AssertionError"}],
                "test_name": "test_sorting",
                "statistics": {"examples": 100},
            })
        );
    }

    #[test]
    fn outcome_keys() {
        assert_eq!(Outcome::Pass.key(), "pass");
        assert_eq!(format!("{}", Outcome::Fail), "fail");
    }
}

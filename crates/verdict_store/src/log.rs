//! The append-only pass/fail JSON log.
//!
//! The log is a single JSON object with exactly two arrays, `pass` and
//! `fail`. Each [`persist`] call appends one snapshot to one of them and
//! rewrites the whole document. Existing entries are kept as raw JSON so
//! that records written by other tools survive a rewrite untouched.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::error::LogError;
use crate::record::{Outcome, Snapshot};

/// In-memory form of the on-disk log.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogDocument {
    /// Records of runs that finished without errors.
    pub pass: Vec<Value>,
    /// Records of runs that recorded at least one error.
    pub fail: Vec<Value>,
}

impl LogDocument {
    /// Creates a document with empty `pass` and `fail` arrays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a document, rejecting anything without both arrays.
    pub fn from_json(path: &Path, content: &str) -> Result<Self, LogError> {
        serde_json::from_str(content).map_err(|e| LogError::LogCorrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Appends `snapshot` under the key its outcome selects.
    pub fn append(&mut self, snapshot: &Snapshot) -> Result<Outcome, LogError> {
        let outcome = snapshot.outcome();
        let value = serde_json::to_value(snapshot).map_err(|e| LogError::Serialization {
            reason: e.to_string(),
        })?;
        self.entries_mut(outcome).push(value);
        Ok(outcome)
    }

    /// Returns the raw entries filed under `outcome`.
    pub fn entries(&self, outcome: Outcome) -> &[Value] {
        match outcome {
            Outcome::Pass => &self.pass,
            Outcome::Fail => &self.fail,
        }
    }

    fn entries_mut(&mut self, outcome: Outcome) -> &mut Vec<Value> {
        match outcome {
            Outcome::Pass => &mut self.pass,
            Outcome::Fail => &mut self.fail,
        }
    }

    /// Decodes the entries filed under `outcome` as snapshots.
    pub fn snapshots(&self, outcome: Outcome) -> Result<Vec<Snapshot>, LogError> {
        self.entries(outcome)
            .iter()
            .map(|v| {
                Snapshot::deserialize(v).map_err(|e| LogError::Serialization {
                    reason: e.to_string(),
                })
            })
            .collect()
    }

    /// Total number of records in both arrays.
    pub fn len(&self) -> usize {
        self.pass.len() + self.fail.len()
    }

    /// Returns `true` if neither array holds a record.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes the document to `path` atomically.
    ///
    /// The JSON goes to a temp file beside the log which is then renamed over
    /// it, so readers never observe a truncated document. An existing log is
    /// resolved through symlinks first and keeps its permissions.
    pub fn save(&self, path: &Path) -> Result<(), LogError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| LogError::Serialization {
            reason: e.to_string(),
        })?;
        let (target, permissions) = if path.exists() {
            let target = std::fs::canonicalize(path).map_err(|e| LogError::io(path, e))?;
            let permissions = std::fs::metadata(&target)
                .map_err(|e| LogError::io(&target, e))?
                .permissions();
            (target, Some(permissions))
        } else {
            (path.to_path_buf(), None)
        };
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| LogError::io(dir, e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| LogError::io(tmp.path(), e))?;
        if let Some(permissions) = permissions {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|e| LogError::io(tmp.path(), e))?;
        }
        tmp.persist(&target)
            .map_err(|e| LogError::io(&target, e.error))?;
        Ok(())
    }
}

/// Reads the log at `path`, or an empty document if there is none.
pub fn read_log(path: &Path) -> Result<LogDocument, LogError> {
    if !path.exists() {
        return Ok(LogDocument::new());
    }
    let content = std::fs::read_to_string(path).map_err(|e| LogError::io(path, e))?;
    LogDocument::from_json(path, &content)
}

/// Appends `snapshot` to the log at `path`, creating the log if needed.
///
/// A corrupt existing log is reported as [`LogError::LogCorrupt`] and left
/// untouched.
pub fn persist(path: &Path, snapshot: &Snapshot) -> Result<Outcome, LogError> {
    let mut document = read_log(path)?;
    let outcome = document.append(snapshot)?;
    document.save(path)?;
    tracing::debug!(
        path = %path.display(),
        outcome = %outcome,
        records = document.len(),
        "persisted diagnostic snapshot"
    );
    Ok(outcome)
}

/// Deletes the log at `path`. A missing file is not an error.
pub fn remove_log(path: &Path) -> Result<(), LogError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed diagnostic log");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(LogError::io(path, e)),
    }
}

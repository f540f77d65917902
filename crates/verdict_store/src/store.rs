//! The mutable per-run diagnostic record.

use serde_json::Value;

use crate::record::{ErrorRecord, FieldUpdate, Outcome, Snapshot};

/// Accumulates notes, errors, and metadata while a single test executes.
///
/// A store is created empty, mutated by the runner during one test, and
/// cleared (not dropped) between tests. The `errors` list only ever comes
/// into existence with one element and is only ever removed wholesale, so
/// its presence is what marks a run as failed.
#[derive(Debug, Default)]
pub struct DiagnosticStore {
    notes: Vec<String>,
    errors: Option<Vec<ErrorRecord>>,
    test_name: Option<String>,
    statistics: Option<Value>,
}

impl DiagnosticStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a note.
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Records an error, creating the `errors` list on first use.
    pub fn add_error(&mut self, error: impl Into<ErrorRecord>) {
        self.errors.get_or_insert_with(Vec::new).push(error.into());
    }

    /// Sets the test label, replacing any earlier one.
    pub fn set_test_name(&mut self, name: impl Into<String>) {
        self.test_name = Some(name.into());
    }

    /// Sets the statistics value, replacing any earlier one.
    pub fn set_statistics(&mut self, statistics: Value) {
        self.statistics = Some(statistics);
    }

    /// Applies one field write: notes append, everything else overwrites.
    pub fn update(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Note(note) => self.add_note(note),
            FieldUpdate::TestName(name) => self.set_test_name(name),
            FieldUpdate::Statistics(statistics) => self.set_statistics(statistics),
        }
    }

    /// Returns the notes recorded so far.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Returns the recorded errors, or `None` if none were recorded.
    pub fn errors(&self) -> Option<&[ErrorRecord]> {
        self.errors.as_deref()
    }

    /// Returns the test label, if set.
    pub fn test_name(&self) -> Option<&str> {
        self.test_name.as_deref()
    }

    /// Returns the statistics value, if set.
    pub fn statistics(&self) -> Option<&Value> {
        self.statistics.as_ref()
    }

    /// How the current contents would be classified if persisted now.
    pub fn outcome(&self) -> Outcome {
        self.snapshot().outcome()
    }

    /// Copies the current fields out as plain data.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            notes: self.notes.clone(),
            errors: self.errors.clone(),
            test_name: self.test_name.clone(),
            statistics: self.statistics.clone(),
        }
    }

    /// Resets the store for the next test.
    ///
    /// Empties `notes` and removes `errors`, `test_name`, and `statistics`.
    /// Clearing an already-clear store does nothing.
    pub fn clear(&mut self) {
        self.notes = Vec::new();
        self.errors = None;
        self.test_name = None;
        self.statistics = None;
    }

    /// Returns `true` if nothing has been recorded since the last clear.
    pub fn is_clear(&self) -> bool {
        self.notes.is_empty()
            && self.errors.is_none()
            && self.test_name.is_none()
            && self.statistics.is_none()
    }
}

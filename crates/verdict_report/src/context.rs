//! Per-execution-context reporter state.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use serde_json::Value;
use verdict_config::{Settings, Verbosity};
use verdict_store::{DiagnosticStore, ErrorRecord, FieldUpdate, LogError, Outcome, Snapshot};

use crate::level::Level;
use crate::message::Message;
use crate::sink::{SinkGuard, SinkRef, SinkRegistry};

/// Everything one execution context needs to report: the active sink, the
/// verbosity it reports at, and the diagnostic store for the current test.
///
/// A context is `!Sync`: tests that run in parallel each use their own,
/// either explicitly or through the thread-local one behind
/// [`with_context`](crate::with_context).
pub struct ReportContext {
    sinks: SinkRegistry,
    verbosity: Cell<Verbosity>,
    store: RefCell<DiagnosticStore>,
    log_path: Option<PathBuf>,
}

impl ReportContext {
    /// Creates a context that reports to stdout at the configured verbosity.
    pub fn new(settings: &Settings) -> Self {
        Self::with_sinks(settings, SinkRegistry::new())
    }

    /// Creates a context around an existing sink registry.
    pub fn with_sinks(settings: &Settings, sinks: SinkRegistry) -> Self {
        Self {
            sinks,
            verbosity: Cell::new(settings.verbosity()),
            store: RefCell::new(DiagnosticStore::new()),
            log_path: settings.report.log_path.clone(),
        }
    }

    /// The sink registry backing this context.
    pub fn sinks(&self) -> &SinkRegistry {
        &self.sinks
    }

    /// The log [`finish_test`](Self::finish_test) writes to by default.
    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    /// Returns the active sink.
    pub fn current_sink(&self) -> SinkRef {
        self.sinks.current()
    }

    /// Makes `sink` active until the returned guard is dropped.
    pub fn with_sink(&self, sink: SinkRef) -> SinkGuard<'_> {
        self.sinks.install(sink)
    }

    /// The verbosity reports are currently checked against.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity.get()
    }

    /// Changes the verbosity. Reporting never calls this; the runner does.
    pub fn set_verbosity(&self, verbosity: Verbosity) {
        self.verbosity.set(verbosity);
    }

    /// Delivers `message` to the active sink if `level` passes the verbosity.
    ///
    /// The message is not converted (and a lazy message not evaluated) unless
    /// it will be delivered. Returns whether it was delivered.
    pub fn emit<'m>(&self, level: Level, message: impl Into<Message<'m>>) -> bool {
        if !level.allows(self.verbosity()) {
            return false;
        }
        let text = message.into().into_text();
        self.current_sink().emit(&text);
        true
    }

    /// Reports at [`Level::Normal`].
    pub fn report<'m>(&self, message: impl Into<Message<'m>>) -> bool {
        self.emit(Level::Normal, message)
    }

    /// Reports at [`Level::Verbose`].
    pub fn verbose_report<'m>(&self, message: impl Into<Message<'m>>) -> bool {
        self.emit(Level::Verbose, message)
    }

    /// Reports at [`Level::Debug`].
    pub fn debug_report<'m>(&self, message: impl Into<Message<'m>>) -> bool {
        self.emit(Level::Debug, message)
    }

    /// Runs `f` with mutable access to the diagnostic store.
    pub fn with_store<R>(&self, f: impl FnOnce(&mut DiagnosticStore) -> R) -> R {
        f(&mut self.store.borrow_mut())
    }

    /// Appends a note to the store.
    pub fn add_note(&self, note: impl Into<String>) {
        self.with_store(|store| store.add_note(note));
    }

    /// Records an error in the store.
    pub fn add_error(&self, error: impl Into<ErrorRecord>) {
        self.with_store(|store| store.add_error(error));
    }

    /// Sets the test label in the store.
    pub fn set_test_name(&self, name: impl Into<String>) {
        self.with_store(|store| store.set_test_name(name));
    }

    /// Sets the statistics value in the store.
    pub fn set_statistics(&self, statistics: Value) {
        self.with_store(|store| store.set_statistics(statistics));
    }

    /// Applies one field write to the store.
    pub fn update_store(&self, update: FieldUpdate) {
        self.with_store(|store| store.update(update));
    }

    /// Copies the store's current fields.
    pub fn snapshot(&self) -> Snapshot {
        self.store.borrow().snapshot()
    }

    /// Resets the store for the next test.
    pub fn clear_store(&self) {
        self.with_store(DiagnosticStore::clear);
    }

    /// Appends the current snapshot to the log at `path`.
    pub fn write_store(&self, path: &Path) -> Result<Outcome, LogError> {
        verdict_store::persist(path, &self.snapshot())
    }

    /// Ends the current test.
    ///
    /// `log_path` falls back to the configured `report.log_path`. With a log
    /// path the snapshot is persisted first; the store is cleared only once
    /// that has succeeded, so a failed write leaves it available for
    /// inspection.
    pub fn finish_test(&self, log_path: Option<&Path>) -> Result<Outcome, LogError> {
        let outcome = match log_path.or(self.log_path()) {
            Some(path) => self.write_store(path)?,
            None => self.store.borrow().outcome(),
        };
        self.clear_store();
        Ok(outcome)
    }
}

impl Default for ReportContext {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

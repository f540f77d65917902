//! Thread-local reporting façade.
//!
//! Each thread owns one [`ReportContext`], created on first use from the
//! default settings plus the `VERDICT_VERBOSITY` override. The free functions
//! here delegate to it so that call sites never have to thread a context
//! through. Parallel test threads never share state.

use std::path::Path;

use serde_json::Value;
use verdict_config::{settings_from_env, Verbosity};
use verdict_store::{ErrorRecord, FieldUpdate, LogError, Outcome, Snapshot};

use crate::context::ReportContext;
use crate::message::Message;
use crate::sink::SinkRef;

thread_local! {
    static CONTEXT: ReportContext = ReportContext::new(&settings_from_env());
}

/// Runs `f` against this thread's context.
pub fn with_context<R>(f: impl FnOnce(&ReportContext) -> R) -> R {
    CONTEXT.with(f)
}

/// Returns this thread's active sink.
pub fn current_sink() -> SinkRef {
    with_context(ReportContext::current_sink)
}

/// Makes `sink` this thread's active sink until the guard is dropped.
pub fn set_default_sink(sink: SinkRef) -> DefaultSinkGuard {
    let previous = with_context(|ctx| ctx.sinks().replace(sink));
    DefaultSinkGuard {
        previous: Some(previous),
    }
}

/// Runs `f` with `sink` active on this thread.
///
/// The previous sink is restored when `f` returns or panics.
pub fn with_sink<R>(sink: SinkRef, f: impl FnOnce() -> R) -> R {
    let _guard = set_default_sink(sink);
    f()
}

/// Restores the thread's previous sink when dropped.
///
/// Returned by [`set_default_sink`]. It is `!Send`, so it is always dropped
/// on the thread whose sink it replaced.
#[must_use = "the override ends as soon as the guard is dropped"]
pub struct DefaultSinkGuard {
    previous: Option<SinkRef>,
}

impl Drop for DefaultSinkGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            // The thread-local may already be gone during thread teardown.
            let _ = CONTEXT.try_with(|ctx| ctx.sinks().replace(previous));
        }
    }
}

/// This thread's verbosity.
pub fn current_verbosity() -> Verbosity {
    with_context(ReportContext::verbosity)
}

/// Changes this thread's verbosity.
pub fn set_verbosity(verbosity: Verbosity) {
    with_context(|ctx| ctx.set_verbosity(verbosity));
}

/// Reports at normal level on this thread.
pub fn report<'m>(message: impl Into<Message<'m>>) -> bool {
    with_context(|ctx| ctx.report(message))
}

/// Reports at verbose level on this thread.
pub fn verbose_report<'m>(message: impl Into<Message<'m>>) -> bool {
    with_context(|ctx| ctx.verbose_report(message))
}

/// Reports at debug level on this thread.
pub fn debug_report<'m>(message: impl Into<Message<'m>>) -> bool {
    with_context(|ctx| ctx.debug_report(message))
}

/// Appends a note to this thread's store.
pub fn add_note(note: impl Into<String>) {
    with_context(|ctx| ctx.add_note(note));
}

/// Records an error in this thread's store.
pub fn add_error(error: impl Into<ErrorRecord>) {
    with_context(|ctx| ctx.add_error(error));
}

/// Applies one field write to this thread's store.
pub fn update_store(update: FieldUpdate) {
    with_context(|ctx| ctx.update_store(update));
}

/// Sets the statistics value in this thread's store.
pub fn set_statistics(statistics: Value) {
    with_context(|ctx| ctx.set_statistics(statistics));
}

/// Resets this thread's store.
pub fn clean_store() {
    with_context(ReportContext::clear_store);
}

/// Copies this thread's store.
pub fn store_snapshot() -> Snapshot {
    with_context(ReportContext::snapshot)
}

/// Appends this thread's store snapshot to the log at `path`.
pub fn write_store_to_file(path: &Path) -> Result<Outcome, LogError> {
    with_context(|ctx| ctx.write_store(path))
}

/// Deletes the log at `path` if it exists.
pub fn delete_log(path: &Path) -> Result<(), LogError> {
    verdict_store::remove_log(path)
}

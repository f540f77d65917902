//! Output sinks and the scoped active-sink slot.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::message::escape_non_ascii;

/// A destination for finalized report text.
///
/// Any `Fn(&str)` closure is a sink.
pub trait Sink {
    /// Delivers one message.
    fn emit(&self, text: &str);
}

impl<F> Sink for F
where
    F: Fn(&str),
{
    fn emit(&self, text: &str) {
        self(text)
    }
}

/// Shared handle to a sink. Identity is pointer identity.
pub type SinkRef = Rc<dyn Sink>;

/// Writes each message as a line on stdout. This is the initial sink.
///
/// If the write fails, it is retried once with non-ASCII characters
/// escaped; a second failure is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn emit(&self, text: &str) {
        let mut out = io::stdout().lock();
        if writeln!(out, "{text}").is_err() {
            let _ = writeln!(out, "{}", escape_non_ascii(text));
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl Sink for SilentSink {
    fn emit(&self, _text: &str) {}
}

/// Records every message in a shared buffer.
///
/// Clones share the same buffer, so one clone can be installed while
/// another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl CaptureSink {
    /// Creates an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the messages captured so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Returns all captured messages joined by newlines.
    pub fn contents(&self) -> String {
        self.lines.borrow().join("\n")
    }

    /// Drains the buffer.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }

    /// Number of messages captured.
    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    /// Returns `true` if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Returns a sink handle that writes into this buffer.
    pub fn sink(&self) -> SinkRef {
        Rc::new(self.clone())
    }
}

impl Sink for CaptureSink {
    fn emit(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}

/// Holds the active sink and supports nested, scoped replacement.
///
/// Each [`install`](Self::install) returns a guard that puts back exactly the
/// sink it displaced when dropped, including during unwinding. Guards that
/// are dropped in reverse order of creation therefore restore the original
/// sink at any nesting depth.
pub struct SinkRegistry {
    active: RefCell<SinkRef>,
}

impl SinkRegistry {
    /// Creates a registry whose initial sink is [`StdoutSink`].
    pub fn new() -> Self {
        Self::with_initial(Rc::new(StdoutSink))
    }

    /// Creates a registry with the given initial sink.
    pub fn with_initial(sink: SinkRef) -> Self {
        Self {
            active: RefCell::new(sink),
        }
    }

    /// Returns the active sink.
    pub fn current(&self) -> SinkRef {
        Rc::clone(&self.active.borrow())
    }

    /// Makes `sink` active until the returned guard is dropped.
    pub fn install(&self, sink: SinkRef) -> SinkGuard<'_> {
        let previous = self.replace(sink);
        tracing::trace!("sink override installed");
        SinkGuard {
            registry: self,
            previous: Some(previous),
        }
    }

    /// Runs `f` with `sink` active, restoring the previous sink afterwards.
    pub fn scoped<R>(&self, sink: SinkRef, f: impl FnOnce() -> R) -> R {
        let _guard = self.install(sink);
        f()
    }

    /// Swaps the active sink, returning the one it replaced.
    pub(crate) fn replace(&self, sink: SinkRef) -> SinkRef {
        std::mem::replace(&mut *self.active.borrow_mut(), sink)
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Restores the displaced sink when dropped.
#[must_use = "the override ends as soon as the guard is dropped"]
pub struct SinkGuard<'a> {
    registry: &'a SinkRegistry,
    previous: Option<SinkRef>,
}

impl Drop for SinkGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.registry.replace(previous);
            tracing::trace!("sink override released");
        }
    }
}

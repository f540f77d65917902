//! Verbosity-gated progress and failure reporting for test runs.
//!
//! Text is delivered to the active [`Sink`], which callers can swap for the
//! duration of a scope with [`with_sink`] or [`SinkRegistry::install`]. Each
//! report entry point checks the active [`Verbosity`] against the message's
//! [`Level`] first, so lazy [`Message`]s are never built when suppressed.
//! A [`ReportContext`] bundles the sink slot, the verbosity, and the
//! per-run [`DiagnosticStore`]; one lives in each thread and backs the free
//! functions in this crate.

#![warn(missing_docs)]

pub mod context;
pub mod global;
pub mod level;
pub mod message;
pub mod sink;

pub use context::ReportContext;
pub use global::{
    add_error, add_note, clean_store, current_sink, current_verbosity, debug_report, delete_log,
    report, set_default_sink, set_statistics, set_verbosity, store_snapshot, update_store,
    verbose_report, with_context, with_sink, write_store_to_file, DefaultSinkGuard,
};
pub use level::Level;
pub use message::{escape_non_ascii, to_text, Message};
pub use sink::{CaptureSink, SilentSink, Sink, SinkGuard, SinkRef, SinkRegistry, StdoutSink};

pub use verdict_config::{Settings, Verbosity};
pub use verdict_store::{DiagnosticStore, ErrorRecord, FieldUpdate, LogError, Outcome, Snapshot};

//! Per-run diagnostic record and its append-only JSON log.
//!
//! A [`DiagnosticStore`] accumulates notes, errors, the test name, and
//! statistics while one test executes. At the end of the test its
//! [`Snapshot`] is either discarded with [`DiagnosticStore::clear`] or
//! appended to a pass/fail [`LogDocument`] on disk with [`persist`].

#![warn(missing_docs)]

pub mod error;
pub mod log;
pub mod record;
pub mod store;

pub use error::LogError;
pub use log::{persist, read_log, remove_log, LogDocument};
pub use record::{ErrorRecord, FieldUpdate, Outcome, Snapshot};
pub use store::DiagnosticStore;

//! Message levels and the verbosity each one requires.

use std::fmt;
use verdict_config::Verbosity;

/// The level a report is made at.
///
/// Each level maps to the minimum [`Verbosity`] at which it is delivered.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Level {
    /// Ordinary progress and failure text.
    Normal,
    /// Per-example detail.
    Verbose,
    /// Internal tracing of the run.
    Debug,
}

impl Level {
    /// The lowest verbosity at which this level is delivered.
    pub fn threshold(self) -> Verbosity {
        match self {
            Level::Normal => Verbosity::Normal,
            Level::Verbose => Verbosity::Verbose,
            Level::Debug => Verbosity::Debug,
        }
    }

    /// Returns `true` if a message at this level passes `verbosity`.
    pub fn allows(self, verbosity: Verbosity) -> bool {
        verbosity >= self.threshold()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Normal => write!(f, "normal"),
            Level::Verbose => write!(f, "verbose"),
            Level::Debug => write!(f, "debug"),
        }
    }
}

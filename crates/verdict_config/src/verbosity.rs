//! Reporter verbosity levels ordered from quietest to most talkative.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much the reporter is allowed to say.
///
/// Ordered from least output (`Quiet`) to most output (`Debug`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order. A
/// message is delivered when the active verbosity is at or above the level
/// the message requires.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Suppress all reporter output.
    Quiet,
    /// Progress and failure text only (default).
    #[default]
    Normal,
    /// Additional detail about each example run.
    Verbose,
    /// Everything, including internal tracing of the run.
    Debug,
}

impl Verbosity {
    /// All levels in ascending order.
    pub const ALL: [Verbosity; 4] = [
        Verbosity::Quiet,
        Verbosity::Normal,
        Verbosity::Verbose,
        Verbosity::Debug,
    ];

    /// Returns the lowercase name used in `verdict.toml` and the environment.
    pub fn as_str(self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::Debug => "debug",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Verbosity::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::InvalidVerbosity(trimmed.to_string()))
    }
}

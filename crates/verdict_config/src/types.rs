//! Settings types deserialized from `verdict.toml`.

use crate::verbosity::Verbosity;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level reporter settings parsed from `verdict.toml`.
///
/// Every section is optional; an empty file yields [`Settings::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Reporter output and log persistence settings.
    #[serde(default)]
    pub report: ReportSettings,
}

/// The `[report]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportSettings {
    /// Minimum verbosity required for messages to reach the active sink.
    #[serde(default)]
    pub verbosity: Verbosity,
    /// Where pass/fail records are appended at the end of each test, if
    /// anywhere. Used when the runner does not name a log itself.
    #[serde(default)]
    pub log_path: Option<PathBuf>,
}

impl Settings {
    /// Shorthand for `self.report.verbosity`.
    pub fn verbosity(&self) -> Verbosity {
        self.report.verbosity
    }

    /// Returns a copy of these settings with the verbosity replaced.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.report.verbosity = verbosity;
        self
    }
}

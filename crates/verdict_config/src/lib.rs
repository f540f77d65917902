//! Verbosity levels and reporter settings for the Verdict test reporter.
//!
//! This crate defines the ordered [`Verbosity`] value consulted by the report
//! gate and reads [`Settings`] from a `verdict.toml` file, with an optional
//! `VERDICT_VERBOSITY` environment override.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;
pub mod verbosity;

pub use error::ConfigError;
pub use loader::{
    apply_env_override, load_settings, load_settings_from_str, settings_from_env,
    CONFIG_FILE, VERBOSITY_ENV,
};
pub use types::{ReportSettings, Settings};
pub use verbosity::Verbosity;

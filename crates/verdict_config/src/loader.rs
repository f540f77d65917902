//! Settings file loading, validation, and environment override.

use crate::error::ConfigError;
use crate::types::Settings;
use crate::verbosity::Verbosity;
use std::path::Path;

/// Name of the settings file looked up in a project directory.
pub const CONFIG_FILE: &str = "verdict.toml";

/// Environment variable that overrides `report.verbosity`.
pub const VERBOSITY_ENV: &str = "VERDICT_VERBOSITY";

/// Loads and validates `verdict.toml` from a project directory.
///
/// A missing file is not an error: defaults are returned instead.
pub fn load_settings(project_dir: &Path) -> Result<Settings, ConfigError> {
    let path = project_dir.join(CONFIG_FILE);
    if !path.exists() {
        tracing::trace!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(&path)?;
    load_settings_from_str(&content)
}

/// Parses and validates settings from a TOML string.
pub fn load_settings_from_str(content: &str) -> Result<Settings, ConfigError> {
    let settings: Settings =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Applies a `VERDICT_VERBOSITY` value on top of `settings`.
///
/// `None` and blank values leave the settings unchanged.
pub fn apply_env_override(
    settings: Settings,
    value: Option<&str>,
) -> Result<Settings, ConfigError> {
    match value {
        Some(raw) if !raw.trim().is_empty() => {
            let verbosity: Verbosity = raw.parse()?;
            Ok(settings.with_verbosity(verbosity))
        }
        _ => Ok(settings),
    }
}

/// Default settings with the `VERDICT_VERBOSITY` override applied.
///
/// An unparseable override is logged and ignored.
pub fn settings_from_env() -> Settings {
    let value = std::env::var(VERBOSITY_ENV).ok();
    match apply_env_override(Settings::default(), value.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(env = VERBOSITY_ENV, error = %err, "ignoring verbosity override");
            Settings::default()
        }
    }
}

fn validate_settings(settings: &Settings) -> Result<(), ConfigError> {
    if let Some(path) = &settings.report.log_path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "report.log_path is empty".to_string(),
            ));
        }
    }
    Ok(())
}

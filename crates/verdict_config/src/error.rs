//! Error types for settings loading and validation.

/// Errors that can occur when loading or validating a `verdict.toml` file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the settings file.
    #[error("failed to read settings: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse settings: {0}")]
    ParseError(String),

    /// A verbosity name did not match any known level.
    #[error("unknown verbosity '{0}' (expected quiet, normal, verbose, or debug)")]
    InvalidVerbosity(String),

    /// A settings value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_verbosity() {
        let err = ConfigError::InvalidVerbosity("loud".to_string());
        assert_eq!(
            format!("{err}"),
            "unknown verbosity 'loud' (expected quiet, normal, verbose, or debug)"
        );
    }

    #[test]
    fn display_parse_error() {
        let err = ConfigError::ParseError("expected '=' at line 3".to_string());
        assert_eq!(
            format!("{err}"),
            "failed to parse settings: expected '=' at line 3"
        );
    }

    #[test]
    fn display_validation_error() {
        let err = ConfigError::ValidationError("report.log_path is empty".to_string());
        assert_eq!(format!("{err}"), "validation error: report.log_path is empty");
    }

    #[test]
    fn display_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::IoError(io_err);
        assert!(format!("{err}").starts_with("failed to read settings:"));
    }
}

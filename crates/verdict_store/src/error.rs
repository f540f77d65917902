//! Error types for log persistence.

use std::path::PathBuf;

/// Errors that can occur while reading or writing the JSON log.
///
/// None of these are retried internally; each is terminal for the call
/// that produced it.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The existing log is not valid JSON or lacks the `pass`/`fail` keys.
    ///
    /// The file is left exactly as it was found.
    #[error("log at {path} is corrupt: {reason}")]
    LogCorrupt {
        /// The log file path.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// An I/O error occurred while opening, writing, or removing the log.
    #[error("log I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A snapshot or document could not be converted to JSON.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the serialization failure.
        reason: String,
    },
}

impl LogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LogError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = LogError::io(
            "/tmp/runs/log.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("log I/O error"));
        assert!(msg.contains("log.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn corrupt_display() {
        let err = LogError::LogCorrupt {
            path: PathBuf::from("log.json"),
            reason: "missing field `fail`".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("is corrupt"));
        assert!(msg.contains("missing field `fail`"));
    }

    #[test]
    fn serialization_display() {
        let err = LogError::Serialization {
            reason: "key must be a string".to_string(),
        };
        assert!(err.to_string().contains("key must be a string"));
    }
}

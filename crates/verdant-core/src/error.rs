//! Error types for verdant operations
//!
//! Malformed JSON input never produces a [`VerdantError`]: it is reported as
//! diagnostics inside the syntax tree (see [`crate::syntax::diagnostic`]).
//! These errors only cover the surrounding API, such as loading options.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for verdant operations
#[derive(Debug, Error)]
pub enum VerdantError {
    /// Options could not be deserialized or failed validation
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Io,
}

impl VerdantError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            VerdantError::ConfigError { .. } => ErrorKind::Config,
            VerdantError::IoError { .. } => ErrorKind::Io,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Options documents that fail to deserialize
impl From<serde_json::Error> for VerdantError {
    fn from(err: serde_json::Error) -> Self {
        Self::config_error(format!("Invalid parse options: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(VerdantError::config_error("bad").kind(), ErrorKind::Config);

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = VerdantError::io_error("verdant.json", io);
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("verdant.json"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: VerdantError = err.into();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().starts_with("Configuration error: Invalid parse options"));
    }
}

//! Result type alias for verdant operations

use crate::error::VerdantError;

/// Standard Result type for verdant operations
pub type Result<T> = std::result::Result<T, VerdantError>;

/// Extension trait for Result to provide additional convenience methods
pub trait ResultExt<T> {
    /// Log the error and continue with None
    fn log_and_continue(self) -> Option<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn log_and_continue(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("Continuing after error: {}", err);
                None
            }
        }
    }
}

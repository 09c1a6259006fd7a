//! Error types and handling for the `EcoScan` service

use thiserror::Error;

/// Main error type for the `EcoScan` service
#[derive(Error, Debug)]
pub enum EcoScanError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// A blocking assessment job panicked or was cancelled
    #[error("Assessment task failed: {source}")]
    Task {
        #[from]
        source: tokio::task::JoinError,
    },
}

impl EcoScanError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller's input
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, EcoScanError::Validation { .. })
    }
}

//! Error types for the CLI

use keycalc::core::CalcError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Calculator library error
    #[error("Calculator error: {0}")]
    Calc(#[from] CalcError),

    /// JSON output error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Terminal unavailable or unusable
    #[error("Terminal error: {message}")]
    Terminal {
        /// Error message
        message: String,
    },

    /// Log subscriber could not be installed
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a terminal error
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

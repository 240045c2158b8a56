//! Application error types
//!
//! Errors raised while wiring and running the process: configuration,
//! store connectivity, and serving. Request-level failures are handled by
//! the service and API layers.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Server errors
    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Create a configuration error
    #[must_use]
    pub fn config(msg: impl std::fmt::Display) -> Self {
        Self::Config(msg.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

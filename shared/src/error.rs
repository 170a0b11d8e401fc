//! Error types for the plan mailer Lambda functions.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling a send-plan request.
#[derive(Error, Debug)]
pub enum Error {
    /// AWS SDK error
    #[error("AWS error: {0}")]
    Aws(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request method not allowed
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Email provider rejected or failed the send call
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// Document rendering error
    #[error("Render error: {0}")]
    Render(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::MethodNotAllowed(_) => 405,
            Error::Delivery(_) => 502,
            _ => 500,
        }
    }
}

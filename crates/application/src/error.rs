//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// External service error (translation, synthesis, recognition)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Audio device or playback error
    #[error("Audio error: {0}")]
    Audio(String),

    /// File or console I/O failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

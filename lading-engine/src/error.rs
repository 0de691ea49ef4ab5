//! Engine error types

use thiserror::Error;

/// Engine error type
#[derive(Debug, Error)]
pub enum EngineError {
    /// A call against the shipping API failed
    #[error("API error: {0}")]
    Client(#[from] lading_client::ClientError),

    /// A required field is missing or invalid; nothing was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation is not legal in the current phase
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A referenced entity is not in the working set
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

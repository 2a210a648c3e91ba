//! Error types for DBScope

use thiserror::Error;

/// Core error type for DBScope operations
#[derive(Error, Debug)]
pub enum DbscopeError {
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Object error: {0}")]
    Object(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for DBScope operations
pub type Result<T> = std::result::Result<T, DbscopeError>;

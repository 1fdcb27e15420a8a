//! Error types for the core domain.

use thiserror::Error;

/// Core domain error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid logical key: {0}")]
    InvalidKey(String),

    #[error("invalid content reference: {0}")]
    InvalidContentRef(String),

    #[error("invalid namespace: {0}")]
    InvalidNamespace(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

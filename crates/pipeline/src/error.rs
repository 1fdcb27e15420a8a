//! Pipeline error types.

use thiserror::Error;

/// Errors raised inside the pipeline. None of them escape the public
/// [`ImageLibrary`](crate::ImageLibrary) API; they are logged where handled.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("transport failure fetching {url}: {message}")]
    Transport { url: String, message: String },

    #[error("unexpected status {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("image decode failed: {0}")]
    Decode(String),

    #[error("invalid remote document: {0}")]
    InvalidDocument(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

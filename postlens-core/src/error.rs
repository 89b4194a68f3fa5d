//! Core error types for `PostLens`.

use thiserror::Error;

/// Core error type for `PostLens` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Post text was empty or whitespace-only.
    #[error("Post text must not be empty")]
    EmptyPost,

    /// Invalid data encountered while building a result.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

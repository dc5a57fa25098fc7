//! Demo error types.

use sequence_handler::SequenceError;
use thiserror::Error;

/// Errors that can occur while running the demonstration.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A sequence query failed.
    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),

    /// Failed to render the report as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for demo operations.
pub type Result<T> = std::result::Result<T, DemoError>;

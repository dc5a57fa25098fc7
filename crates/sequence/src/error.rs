//! Sequence error types.

use thiserror::Error;

/// Errors that can occur when querying a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The operation needs at least one element (a seed or a divisor).
    #[error("Sequence is empty: {operation} requires at least one element")]
    EmptySequence { operation: &'static str },

    /// A positional access fell outside `[0, len)`.
    #[error("Index out of range: index {index} is not within a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// An element did not satisfy the numeric contract of the operation.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl SequenceError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        Self::EmptySequence { operation }
    }
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;

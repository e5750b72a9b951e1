//! Matching error types.

use thiserror::Error;

/// Errors that can occur during similarity computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchingError {
    /// Compared vectors have different lengths (mismatched embedding models
    /// or a corrupted stored vector).
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub type MatchingResult<T> = Result<T, MatchingError>;

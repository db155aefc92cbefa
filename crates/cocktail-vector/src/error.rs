//! Error types for cocktail-vector.

use thiserror::Error;

/// Result type for cocktail-vector operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cocktail-vector operations.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// Dimension mismatch between vector and index.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions.
        expected: usize,
        /// Actual dimensions provided.
        actual: usize,
    },

    /// Invalid vector (e.g., contains NaN or Inf).
    #[error("Invalid vector: {0}")]
    InvalidVector(String),

    /// An index cannot be created with zero dimensions.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(usize),
}

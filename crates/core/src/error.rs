//! Error types for grid access and card assembly.

use thiserror::Error;

/// Errors raised by [`crate::Grid`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Side length below 1, or too large for its cell count to fit in `usize`.
    #[error("invalid card size {0}")]
    InvalidSize(usize),

    /// Coordinates outside `[0, size)`.
    #[error("cell ({x}, {y}) is outside a {size}x{size} card")]
    IndexOutOfRange { x: usize, y: usize, size: usize },

    /// Label matrix with ragged or mismatched rows.
    #[error("label matrix is not square")]
    NotSquare,
}

/// Errors raised by [`crate::assemble`].
///
/// `InsufficientPool` is an expected outcome: callers should offer another
/// set or a smaller size instead of giving up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("invalid card size {0}")]
    InvalidSize(usize),

    #[error("set has {available} distinct entries, {required} are needed")]
    InsufficientPool { required: usize, available: usize },
}

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

//! Error types for column packing.

use arrow::error::ArrowError;
use thiserror::Error;

/// Errors that can occur while packing a string column.
#[derive(Error, Debug)]
pub enum PackError {
    /// A buffer could not be reserved.
    #[error("Could not allocate {what} buffer ({bytes} bytes)")]
    AllocationFailed { what: &'static str, bytes: usize },

    /// Lengths, values and counts disagree.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// An offset does not fit in an i32.
    #[error("Offset overflow at row {row}")]
    OffsetOverflow { row: usize },

    /// The array constructor rejected the buffers.
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
}

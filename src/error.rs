//! Typed errors for grid construction and cell access.

use thiserror::Error;

/// Errors raised by [`crate::life::Grid`] and engine construction.
///
/// Everything here is structural: bad input is rejected synchronously at
/// the call site, and nothing is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Width or height was zero at construction.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension {
        /// Requested width (columns).
        width: usize,
        /// Requested height (rows).
        height: usize,
    },

    /// A cell coordinate fell outside the grid extents.
    #[error("cell ({row}, {col}) is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        /// Offending row.
        row: usize,
        /// Offending column.
        col: usize,
        /// Grid width (columns).
        width: usize,
        /// Grid height (rows).
        height: usize,
    },

    /// A nested-row grid literal had rows of unequal length.
    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Its actual length.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },
}

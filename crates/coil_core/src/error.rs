//! Matrix error types

use thiserror::Error;

/// Errors raised by matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Inner dimensions of a product do not agree
    #[error(
        "cannot multiply a {left_rows}x{left_cols} matrix by a {right_rows}x{right_cols} matrix"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Cell access outside the grid
    #[error("index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Flat buffer cannot be split into rows of the requested width
    #[error("buffer of length {len} cannot be laid out in rows of {cols} columns")]
    BufferLength { len: usize, cols: usize },
}

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;

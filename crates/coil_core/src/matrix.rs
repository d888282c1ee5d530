//! Dense row-major matrices
//!
//! [`Matrix`] is a fixed-shape grid of `f32` cells stored row by row. It is the
//! substrate every [`Transformation`](crate::transform::Transformation) is built on.
//!
//! Shape violations are programming errors. The checked entry points
//! ([`Matrix::multiply`], [`Matrix::try_get`], [`Matrix::from_buffer`]) report them
//! as [`MatrixError`]; the operator forms (`*`, indexing, [`Matrix::get`],
//! [`Matrix::set`]) panic with the same message.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use crate::error::{MatrixError, Result};

/// Row-major grid of floats, zero-initialized
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Create a `rows x cols` matrix filled with zero
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create an `n x n` matrix with ones on the main diagonal
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.data[i * n + i] = 1.0;
        }
        matrix
    }

    /// Rebuild a matrix from a flat row-major buffer
    pub fn from_buffer(cols: usize, buffer: &[f32]) -> Result<Self> {
        if cols == 0 || buffer.len() % cols != 0 {
            return Err(MatrixError::BufferLength {
                len: buffer.len(),
                cols,
            });
        }
        Ok(Self {
            rows: buffer.len() / cols,
            cols,
            data: buffer.to_vec(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    fn offset_or_panic(&self, row: usize, col: usize) -> usize {
        match self.offset(row, col) {
            Ok(offset) => offset,
            Err(err) => panic!("{err}"),
        }
    }

    /// Read a cell, returning an error when it is outside the grid
    pub fn try_get(&self, row: usize, col: usize) -> Result<f32> {
        self.offset(row, col).map(|i| self.data[i])
    }

    /// Read a cell
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[self.offset_or_panic(row, col)]
    }

    /// Write a cell
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        let i = self.offset_or_panic(row, col);
        self.data[i] = value;
    }

    /// Matrix product `self * other`
    ///
    /// `product[i][j] = Σ_k self[i][k] * other[k][j]`. Fails when
    /// `self.cols() != other.rows()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }

        let mut product = Matrix::new(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0f32;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                product.data[i * other.cols + j] = sum;
            }
        }
        Ok(product)
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Matrix {
        let mut transposed = Matrix::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                transposed.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        transposed
    }

    /// Flatten the grid in row-major order
    pub fn serialize(&self) -> Vec<f32> {
        self.data.clone()
    }

    /// Borrow the row-major cells without copying
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Iterate over rows as slices
    pub fn row_iter(&self) -> impl Iterator<Item = &[f32]> {
        // chunks(0) panics, and an empty grid has no rows to yield anyway
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.data[self.offset_or_panic(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        let i = self.offset_or_panic(row, col);
        &mut self.data[i]
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics when the inner dimensions disagree. Use [`Matrix::multiply`] for
    /// the checked form.
    fn mul(self, rhs: &Matrix) -> Matrix {
        match self.multiply(rhs) {
            Ok(product) => product,
            Err(err) => panic!("{err}"),
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_iter() {
            write!(f, "|")?;
            for value in row {
                write!(f, " {value:>10.4}")?;
            }
            writeln!(f, " |")?;
        }
        Ok(())
    }
}

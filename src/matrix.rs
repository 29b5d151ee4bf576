//! Dense 2-D matrix storage for summation
//!
//! Provides a row-major `f64` matrix shared read-only across workers during
//! a summation call.
//!
//! # Storage Layout
//!
//! For a 2x3 matrix:
//! ```text
//! [[a, b, c],
//!  [d, e, f]]
//! ```
//! Data is stored as: [a, b, c, d, e, f]
//!
//! # Example
//!
//! ```
//! use sumador::Matrix;
//!
//! let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(m.get(1, 0), Some(&3.0));
//! ```

use crate::error::{Result, SumadorError};
use crate::position::MatrixDims;

/// A dense 2-D matrix of `f64` with row-major storage
///
/// Consecutive elements in memory belong to the same row, so a row-major
/// traversal is also a linear walk of the backing buffer. The matrix is
/// never mutated during a summation call; workers read it concurrently
/// without synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from a vector of data in row-major order
    ///
    /// # Errors
    ///
    /// Returns [`SumadorError::InvalidInput`] if `data.len() != rows * cols`.
    ///
    /// # Example
    ///
    /// ```
    /// use sumador::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(SumadorError::InvalidInput(format!(
                "Data length {} does not match matrix dimensions {}x{} (expected {})",
                data.len(),
                rows,
                cols,
                rows * cols
            )));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Creates a matrix from a slice of rows
    ///
    /// This is the natural entry shape for callers holding a
    /// sequence-of-sequences; all rows must have the same length. Zero rows
    /// are valid and describe an empty matrix.
    ///
    /// # Errors
    ///
    /// Returns [`SumadorError::InvalidInput`] if the rows are ragged.
    ///
    /// # Example
    ///
    /// ```
    /// use sumador::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(SumadorError::InvalidInput(format!(
                    "Ragged matrix: row {index} has {} columns, expected {cols}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Creates a matrix filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Returns the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the dimensions as a [`MatrixDims`] value
    pub fn dims(&self) -> MatrixDims {
        MatrixDims::new(self.rows, self.cols)
    }

    /// Returns the total cell count
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the matrix holds no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets a reference to an element at (row, col)
    ///
    /// Returns `None` if indices are out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&f64> {
        if row >= self.rows || col >= self.cols {
            None
        } else {
            self.data.get(row * self.cols + col)
        }
    }

    /// Returns a reference to the underlying row-major data
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

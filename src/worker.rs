//! Per-range summation workers
//!
//! A [`Worker`] owns exactly one [`Range`] and sums the cells it addresses,
//! in traversal order. The accumulation order is part of the contract:
//! floating-point addition is not associative, so re-running the same range
//! over the same matrix must reproduce the same partial sum bit-for-bit.

use crate::error::{Result, SumadorError};
use crate::matrix::Matrix;
use crate::range::Range;

/// Sums the cells of one assigned range
///
/// # Example
///
/// ```
/// use sumador::{Matrix, Partitioner, Worker};
///
/// let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
/// let ranges = Partitioner::new(2).unwrap().partition(m.dims()).unwrap();
///
/// let first = Worker::new(ranges[0]);
/// assert_eq!(first.run(&m).unwrap(), 6.0); // 1 + 2 + 3
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Worker {
    range: Range,
}

impl Worker {
    /// Creates a worker for the given range
    pub fn new(range: Range) -> Self {
        Worker { range }
    }

    /// Returns the range this worker is assigned to
    pub fn range(&self) -> &Range {
        &self.range
    }

    /// Sums the addressed cells in row-major traversal order
    ///
    /// # Errors
    ///
    /// Returns [`SumadorError::OutOfBounds`] if a cell read falls outside the
    /// matrix. This is a partitioning defect, not a runtime condition: the
    /// caller aborts the whole summation rather than recovering.
    pub fn run(&self, matrix: &Matrix) -> Result<f64> {
        #[cfg(feature = "tracing")]
        tracing::debug!(start = %self.range.start(), end = %self.range.end(), "summing range");

        let mut acc = 0.0;
        for pos in self.range.cells() {
            let value =
                matrix
                    .get(pos.row(), pos.col())
                    .ok_or_else(|| SumadorError::OutOfBounds {
                        row: pos.row(),
                        col: pos.col(),
                        rows: matrix.rows(),
                        cols: matrix.cols(),
                    })?;
            acc += value;
        }
        Ok(acc)
    }
}

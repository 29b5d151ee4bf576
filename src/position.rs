//! Matrix coordinates and row-major traversal order
//!
//! A [`Position`] is a value-type coordinate inside a matrix, totally ordered
//! by row-major comparison. All boundary arithmetic goes through the linear
//! index (`row * cols + col`): advancing a position by an offset is a
//! linear-index round trip, which keeps row wraparound exact without manual
//! carry handling.
//!
//! Dimensions are an explicit [`MatrixDims`] value passed to every operation,
//! so positions from concurrent summations over different matrices can never
//! interfere.

use std::fmt;

use crate::error::{Result, SumadorError};

/// Dimensions of a dense 2-D matrix
///
/// A cheap `Copy` value shared by every [`Position`] and
/// [`Range`](crate::Range) operation of one summation call.
///
/// # Example
///
/// ```
/// use sumador::MatrixDims;
///
/// let dims = MatrixDims::new(2, 3);
/// assert_eq!(dims.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixDims {
    rows: usize,
    cols: usize,
}

impl MatrixDims {
    /// Creates dimensions for a `rows x cols` matrix
    ///
    /// Zero rows or columns are valid and describe an empty matrix; no
    /// position can be created inside empty dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        MatrixDims { rows, cols }
    }

    /// Returns the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total cell count
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if the matrix holds no cells
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for MatrixDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A coordinate within a matrix's row-major linear order
///
/// Positions are immutable values: [`advance`](Position::advance) returns a
/// new position and never mutates the receiver, so no two consumers ever
/// share a mutable cursor. The derived ordering compares `row` first, then
/// `col`, which is exactly the row-major total order.
///
/// # Example
///
/// ```
/// use sumador::{MatrixDims, Position};
///
/// let dims = MatrixDims::new(2, 3);
/// let pos = Position::new(0, 2, dims).unwrap();
///
/// // Advancing past the end of row 0 wraps into row 1.
/// let next = pos.advance(1, dims).unwrap();
/// assert_eq!((next.row(), next.col()), (1, 0));
/// assert!(pos < next);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position, validating it against the matrix dimensions
    ///
    /// # Errors
    ///
    /// Returns [`SumadorError::OutOfBounds`] if `row` or `col` falls outside
    /// `dims`.
    pub fn new(row: usize, col: usize, dims: MatrixDims) -> Result<Self> {
        if row >= dims.rows || col >= dims.cols {
            return Err(SumadorError::OutOfBounds {
                row,
                col,
                rows: dims.rows,
                cols: dims.cols,
            });
        }
        Ok(Position { row, col })
    }

    /// Converts a linear row-major index into a position
    ///
    /// # Errors
    ///
    /// Returns [`SumadorError::OutOfBounds`] if `idx` does not address a cell
    /// of `dims`.
    pub fn from_linear(idx: usize, dims: MatrixDims) -> Result<Self> {
        if idx >= dims.len() {
            let cols = dims.cols.max(1);
            return Err(SumadorError::OutOfBounds {
                row: idx / cols,
                col: idx % cols,
                rows: dims.rows,
                cols: dims.cols,
            });
        }
        Ok(Position {
            row: idx / dims.cols,
            col: idx % dims.cols,
        })
    }

    /// Converts a linear index known to be in bounds
    ///
    /// Callers must hold `idx < dims.len()`.
    pub(crate) fn from_linear_unchecked(idx: usize, dims: MatrixDims) -> Self {
        debug_assert!(idx < dims.len());
        Position {
            row: idx / dims.cols,
            col: idx % dims.cols,
        }
    }

    /// Returns the row index
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column index
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the linear row-major index of this position
    pub fn linear(&self, dims: MatrixDims) -> usize {
        self.row * dims.cols + self.col
    }

    /// Returns the position `offset` cells forward in row-major order
    ///
    /// Implemented as a linear-index round trip rather than row/column carry
    /// arithmetic, so row wraparound cannot drift.
    ///
    /// # Errors
    ///
    /// - [`SumadorError::InvalidOffset`] if `offset` is zero.
    /// - [`SumadorError::OutOfBounds`] if the destination overruns `dims`.
    pub fn advance(&self, offset: usize, dims: MatrixDims) -> Result<Self> {
        if offset == 0 {
            return Err(SumadorError::InvalidOffset);
        }
        Position::from_linear(self.linear(dims) + offset, dims)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_dims_len() {
        assert_eq!(MatrixDims::new(4, 5).len(), 20);
        assert_eq!(MatrixDims::new(0, 5).len(), 0);
        assert!(MatrixDims::new(3, 0).is_empty());
    }

    #[test]
    fn test_new_in_bounds() {
        let dims = MatrixDims::new(2, 3);
        let pos = Position::new(1, 2, dims).unwrap();
        assert_eq!(pos.row(), 1);
        assert_eq!(pos.col(), 2);
    }

    #[test]
    fn test_new_out_of_bounds() {
        let dims = MatrixDims::new(2, 3);
        assert_eq!(
            Position::new(2, 0, dims),
            Err(SumadorError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
        assert!(Position::new(0, 3, dims).is_err());
    }

    #[test]
    fn test_row_major_ordering() {
        let dims = MatrixDims::new(3, 3);
        let a = Position::new(0, 2, dims).unwrap();
        let b = Position::new(1, 0, dims).unwrap();
        let c = Position::new(1, 1, dims).unwrap();

        // End of a row comes before the start of the next.
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&c), Ordering::Less);
        assert_eq!(c.cmp(&a), Ordering::Greater);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn test_linear_round_trip() {
        let dims = MatrixDims::new(4, 7);
        for idx in 0..dims.len() {
            let pos = Position::from_linear(idx, dims).unwrap();
            assert_eq!(pos.linear(dims), idx);
        }
    }

    #[test]
    fn test_from_linear_out_of_bounds() {
        let dims = MatrixDims::new(2, 3);
        assert!(Position::from_linear(6, dims).is_err());
        assert!(Position::from_linear(0, MatrixDims::new(0, 3)).is_err());
    }

    #[test]
    fn test_advance_within_row() {
        let dims = MatrixDims::new(2, 3);
        let pos = Position::new(0, 0, dims).unwrap();
        let next = pos.advance(2, dims).unwrap();
        assert_eq!((next.row(), next.col()), (0, 2));
        // The original is untouched.
        assert_eq!((pos.row(), pos.col()), (0, 0));
    }

    #[test]
    fn test_advance_wraps_rows() {
        let dims = MatrixDims::new(3, 4);
        let pos = Position::new(0, 3, dims).unwrap();
        let next = pos.advance(1, dims).unwrap();
        assert_eq!((next.row(), next.col()), (1, 0));

        let far = pos.advance(5, dims).unwrap();
        assert_eq!((far.row(), far.col()), (2, 0));
    }

    #[test]
    fn test_advance_to_last_cell() {
        let dims = MatrixDims::new(2, 3);
        let pos = Position::new(0, 0, dims).unwrap();
        let last = pos.advance(5, dims).unwrap();
        assert_eq!((last.row(), last.col()), (1, 2));
    }

    #[test]
    fn test_advance_overrun_fails() {
        let dims = MatrixDims::new(2, 3);
        let last = Position::new(1, 2, dims).unwrap();
        assert_eq!(
            last.advance(1, dims),
            Err(SumadorError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
    }

    #[test]
    fn test_advance_zero_offset_fails() {
        let dims = MatrixDims::new(2, 3);
        let pos = Position::new(0, 0, dims).unwrap();
        assert_eq!(pos.advance(0, dims), Err(SumadorError::InvalidOffset));
    }

    #[test]
    fn test_display() {
        let dims = MatrixDims::new(2, 3);
        let pos = Position::new(1, 2, dims).unwrap();
        assert_eq!(pos.to_string(), "(1, 2)");
        assert_eq!(dims.to_string(), "2x3");
    }
}

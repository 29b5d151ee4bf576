//! Splitting a matrix's index space into per-worker ranges
//!
//! The partitioner divides the `rows * cols` linear index space into
//! contiguous, non-overlapping [`Range`]s, one per worker. Sizes differ by at
//! most one cell: the division remainder goes to the front ranges, so the
//! split is fully determined by the inputs and reproducible across runs.

use crate::error::{Result, SumadorError};
use crate::position::{MatrixDims, Position};
use crate::range::Range;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Computes the per-worker ranges for a summation call
///
/// The worker count is validated once at construction and fixed thereafter.
///
/// # Example
///
/// ```
/// use sumador::{MatrixDims, Partitioner};
///
/// let ranges = Partitioner::new(4)
///     .unwrap()
///     .partition(MatrixDims::new(2, 3))
///     .unwrap();
///
/// // total = 6, base = 1, remainder = 2: two ranges of 2 cells, two of 1.
/// let sizes: Vec<_> = ranges.iter().map(|r| r.len()).collect();
/// assert_eq!(sizes, vec![2, 2, 1, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioner {
    nthread: usize,
}

impl Partitioner {
    /// Creates a partitioner for `nthread` workers
    ///
    /// # Errors
    ///
    /// Returns [`SumadorError::InvalidWorkerCount`] if `nthread` is zero.
    pub fn new(nthread: usize) -> Result<Self> {
        if nthread == 0 {
            return Err(SumadorError::InvalidWorkerCount { nthread });
        }
        Ok(Partitioner { nthread })
    }

    /// Creates a partitioner for a single worker
    ///
    /// Equivalent to `Partitioner::new(1)` without the fallible signature.
    pub fn single() -> Self {
        Partitioner { nthread: 1 }
    }

    /// Returns the configured worker count
    pub fn nthread(&self) -> usize {
        self.nthread
    }

    /// Splits `dims` into contiguous ranges, one per effective worker
    ///
    /// The ranges are returned in row-major order; concatenated, they cover
    /// every cell of the matrix exactly once. An empty matrix yields no
    /// ranges. When more workers are configured than cells exist, the
    /// effective worker count is capped at the cell count, since an
    /// inclusive range cannot represent zero cells.
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(dims = %dims, nthread = self.nthread)))]
    pub fn partition(&self, dims: MatrixDims) -> Result<Vec<Range>> {
        let total = dims.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let workers = self.nthread.min(total);
        let base = total / workers;
        let remainder = total % workers;

        let mut ranges = Vec::with_capacity(workers);
        let mut next = 0;
        for i in 0..workers {
            let size = base + usize::from(i < remainder);
            let start = Position::from_linear(next, dims)?;
            let end = Position::from_linear(next + size - 1, dims)?;
            ranges.push(Range::new(start, end, dims)?);
            next += size;
        }
        Ok(ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints(range: &Range) -> ((usize, usize), (usize, usize)) {
        (
            (range.start().row(), range.start().col()),
            (range.end().row(), range.end().col()),
        )
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert_eq!(
            Partitioner::new(0),
            Err(SumadorError::InvalidWorkerCount { nthread: 0 })
        );
    }

    #[test]
    fn test_worked_example_2x3_by_4() {
        let ranges = Partitioner::new(4)
            .unwrap()
            .partition(MatrixDims::new(2, 3))
            .unwrap();

        assert_eq!(ranges.len(), 4);
        assert_eq!(endpoints(&ranges[0]), ((0, 0), (0, 1)));
        assert_eq!(endpoints(&ranges[1]), ((0, 2), (1, 0)));
        assert_eq!(endpoints(&ranges[2]), ((1, 1), (1, 1)));
        assert_eq!(endpoints(&ranges[3]), ((1, 2), (1, 2)));
    }

    #[test]
    fn test_single_worker_spans_matrix() {
        let dims = MatrixDims::new(5, 7);
        let ranges = Partitioner::new(1).unwrap().partition(dims).unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(endpoints(&ranges[0]), ((0, 0), (4, 6)));
        assert_eq!(ranges[0].len(), 35);
    }

    #[test]
    fn test_even_split_no_remainder() {
        let ranges = Partitioner::new(3)
            .unwrap()
            .partition(MatrixDims::new(3, 4))
            .unwrap();
        assert!(ranges.iter().all(|r| r.len() == 4));
    }

    #[test]
    fn test_remainder_to_the_front() {
        // total = 11, workers = 3: sizes 4, 4, 3.
        let ranges = Partitioner::new(3)
            .unwrap()
            .partition(MatrixDims::new(1, 11))
            .unwrap();
        let sizes: Vec<_> = ranges.iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![4, 4, 3]);
    }

    #[test]
    fn test_more_workers_than_cells_capped() {
        let ranges = Partitioner::new(100)
            .unwrap()
            .partition(MatrixDims::new(2, 3))
            .unwrap();
        assert_eq!(ranges.len(), 6);
        assert!(ranges.iter().all(|r| r.len() == 1));
    }

    #[test]
    fn test_empty_matrix_yields_no_ranges() {
        let partitioner = Partitioner::new(4).unwrap();
        assert!(partitioner.partition(MatrixDims::new(0, 5)).unwrap().is_empty());
        assert!(partitioner.partition(MatrixDims::new(5, 0)).unwrap().is_empty());
    }

    #[test]
    fn test_coverage_contiguous_no_gaps() {
        let dims = MatrixDims::new(7, 5);
        for nthread in 1..=dims.len() {
            let ranges = Partitioner::new(nthread).unwrap().partition(dims).unwrap();

            let visited: Vec<usize> = ranges
                .iter()
                .flat_map(|r| r.cells().map(|p| p.linear(dims)))
                .collect();
            let expected: Vec<usize> = (0..dims.len()).collect();
            assert_eq!(visited, expected, "nthread = {nthread}");
        }
    }

    #[test]
    fn test_ranges_disjoint_and_adjacent() {
        let dims = MatrixDims::new(4, 9);
        let ranges = Partitioner::new(5).unwrap().partition(dims).unwrap();
        for pair in ranges.windows(2) {
            let prev_end = pair[0].end().linear(dims);
            let next_start = pair[1].start().linear(dims);
            assert_eq!(next_start, prev_end + 1);
        }
    }
}

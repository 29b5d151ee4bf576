//! Matrix summation entry points
//!
//! [`SumMatrix`] is the seam between callers and summation strategies:
//! [`SequentialSumMatrix`] walks the matrix in row-major order on the calling
//! thread, [`ParallelSumMatrix`] partitions the index space and dispatches
//! one worker per range.
//!
//! # Determinism
//!
//! The parallel coordinator waits for every worker to finish, then adds the
//! partial sums in range-index order. Execution order varies with the
//! scheduler; accumulation order never does, so summing the same matrix with
//! the same worker count yields an identical floating-point result every
//! time.

use crate::error::{Result, SumadorError};
use crate::matrix::Matrix;
use crate::partition::Partitioner;
use crate::worker::Worker;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Strategy interface for summing every element of a matrix
pub trait SumMatrix {
    /// Returns the sum of every element of `matrix`
    fn sum(&self, matrix: &Matrix) -> Result<f64>;
}

/// Single-threaded row-major summation
///
/// The reference traversal against which the parallel result is defined; it
/// also serves as the oracle in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSumMatrix;

impl SequentialSumMatrix {
    /// Creates a sequential summer
    pub fn new() -> Self {
        SequentialSumMatrix
    }
}

impl SumMatrix for SequentialSumMatrix {
    fn sum(&self, matrix: &Matrix) -> Result<f64> {
        // Row-major storage makes the row-major traversal a linear walk.
        Ok(matrix.as_slice().iter().sum())
    }
}

/// Multi-worker summation with a deterministic reduction
///
/// Partitions the matrix into contiguous ranges, runs one worker per range
/// concurrently (rayon pool under the `parallel` feature, in-place loop
/// otherwise), joins all workers, and reduces the partial sums in range
/// order.
///
/// # Example
///
/// ```
/// use sumador::{Matrix, ParallelSumMatrix, SumMatrix};
///
/// let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
/// let summer = ParallelSumMatrix::new(4).unwrap();
/// assert_eq!(summer.sum(&m).unwrap(), 21.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParallelSumMatrix {
    partitioner: Partitioner,
}

impl ParallelSumMatrix {
    /// Creates a parallel summer using `nthread` workers
    ///
    /// The worker count is fixed for the life of the summer.
    ///
    /// # Errors
    ///
    /// Returns [`SumadorError::InvalidWorkerCount`] if `nthread` is zero.
    pub fn new(nthread: usize) -> Result<Self> {
        Ok(ParallelSumMatrix {
            partitioner: Partitioner::new(nthread)?,
        })
    }

    /// Creates a parallel summer sized to the available hardware concurrency
    pub fn with_available_parallelism() -> Self {
        ParallelSumMatrix {
            partitioner: Partitioner::new(crate::available_workers())
                .unwrap_or(Partitioner::single()),
        }
    }

    /// Returns the configured worker count
    pub fn nthread(&self) -> usize {
        self.partitioner.nthread()
    }

    #[cfg(feature = "parallel")]
    fn dispatch(workers: &[Worker], matrix: &Matrix) -> Vec<Result<f64>> {
        use rayon::prelude::*;

        // Indexed collect preserves range order regardless of which worker
        // finishes first, and returns only after every worker has completed.
        workers.par_iter().map(|w| w.run(matrix)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn dispatch(workers: &[Worker], matrix: &Matrix) -> Vec<Result<f64>> {
        workers.iter().map(|w| w.run(matrix)).collect()
    }
}

impl SumMatrix for ParallelSumMatrix {
    #[cfg_attr(
        feature = "tracing",
        instrument(skip(self, matrix), fields(dims = %matrix.dims(), nthread = self.nthread()))
    )]
    fn sum(&self, matrix: &Matrix) -> Result<f64> {
        if matrix.is_empty() {
            return Ok(0.0);
        }

        let ranges = self.partitioner.partition(matrix.dims())?;
        let workers: Vec<Worker> = ranges.into_iter().map(Worker::new).collect();
        let partials = Self::dispatch(&workers, matrix);

        let mut total = 0.0;
        for (worker, partial) in partials.into_iter().enumerate() {
            match partial {
                Ok(value) => total += value,
                Err(source) => {
                    return Err(SumadorError::WorkerFailed {
                        worker,
                        source: Box::new(source),
                    })
                }
            }
        }
        Ok(total)
    }
}

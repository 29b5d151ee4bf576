//! Sumador: Deterministic Parallel Matrix Summation
//!
//! **Sumador** (Spanish: "adder") sums every element of a dense 2-D `f64`
//! matrix by splitting its row-major index space into contiguous ranges,
//! running one worker per range concurrently, and reducing the partial sums
//! in a fixed order.
//!
//! # Design Principles
//!
//! - **Deterministic by construction**: The split, each worker's traversal
//!   order, and the reduction order are all fixed by the inputs. The same
//!   matrix and worker count produce a bit-identical total on every run,
//!   regardless of scheduler timing.
//! - **No shared mutable state**: Dimensions travel as explicit
//!   [`MatrixDims`] values, positions are `Copy`, each worker owns its range
//!   and its accumulator. The matrix is shared read-only with no locking.
//! - **Fail fast, fail whole**: Argument errors are rejected at
//!   construction; a worker failure aborts the entire call rather than
//!   returning a partial total.
//!
//! # Quick Start
//!
//! ```rust
//! use sumador::{Matrix, ParallelSumMatrix, SumMatrix};
//!
//! let matrix = Matrix::from_rows(&[
//!     vec![1.0, 2.0, 3.0],
//!     vec![4.0, 5.0, 6.0],
//! ]).unwrap();
//!
//! let summer = ParallelSumMatrix::new(4).unwrap();
//! assert_eq!(summer.sum(&matrix).unwrap(), 21.0);
//! ```

pub mod error;
pub mod matrix;
pub mod partition;
pub mod position;
pub mod range;
pub mod sum;
pub mod worker;

pub use error::{Result, SumadorError};
pub use matrix::Matrix;
pub use partition::Partitioner;
pub use position::{MatrixDims, Position};
pub use range::{Cells, Range};
pub use sum::{ParallelSumMatrix, SequentialSumMatrix, SumMatrix};
pub use worker::Worker;

/// Returns the number of workers matching the available hardware concurrency
///
/// Falls back to `1` when the available parallelism cannot be queried, so
/// the result is always a valid worker count.
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(usize::from)
        .unwrap_or(1)
}

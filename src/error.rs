//! Error types for Sumador operations

use thiserror::Error;

use crate::position::Position;

/// Result type for Sumador operations
pub type Result<T> = std::result::Result<T, SumadorError>;

/// Errors that can occur during Sumador operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SumadorError {
    /// Worker count of zero requested at construction
    #[error("Invalid worker count: {nthread} (must be at least 1)")]
    InvalidWorkerCount {
        /// The rejected worker count
        nthread: usize,
    },

    /// Position advanced by a zero offset
    #[error("Invalid offset: advancement must be at least 1 cell")]
    InvalidOffset,

    /// Range constructed with a start position after its end position
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// Start of the rejected range
        start: Position,
        /// End of the rejected range
        end: Position,
    },

    /// Position or matrix access outside matrix dimensions
    #[error("Out of bounds: ({row}, {col}) in {rows}x{cols} matrix")]
    OutOfBounds {
        /// Row index of the offending access
        row: usize,
        /// Column index of the offending access
        col: usize,
        /// Matrix row count
        rows: usize,
        /// Matrix column count
        cols: usize,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A worker task failed; the whole summation is aborted
    #[error("Worker {worker} failed: {source}")]
    WorkerFailed {
        /// Index of the lowest-numbered failing worker
        worker: usize,
        /// The worker's underlying error
        #[source]
        source: Box<SumadorError>,
    },
}

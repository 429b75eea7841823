//! Error types for collect-routing.

use thiserror::Error;

/// Errors raised while loading a cost matrix or running an optimization.
///
/// An exhausted search budget is deliberately not an error: the
/// constrained-search optimizer reports it as
/// [`OptimizationResult::empty`](crate::models::OptimizationResult::empty).
#[derive(Debug, Error)]
pub enum Error {
    /// The `distances` array of the matrix document has zero rows.
    #[error("distance matrix is empty")]
    EmptyMatrix,

    /// Row and column counts of the distance matrix disagree.
    #[error("distance matrix is not square ({rows}x{cols})")]
    NonSquareMatrix { rows: usize, cols: usize },

    /// Unparseable document, missing field, negative cell, or a
    /// `durations` grid whose shape differs from `distances`.
    #[error("malformed matrix document: {0}")]
    MalformedMatrix(String),

    /// Failed to read the matrix document from disk.
    #[error("failed to read matrix document")]
    Io(#[from] std::io::Error),

    /// Unexpected fault mid-run; the run aborts and no partial result
    /// is returned.
    ///
    /// `generation` is the zero-based optimizer iteration at the time
    /// of the fault. Optimizers without a generational loop, and faults
    /// raised before the loop starts, report `0`.
    #[error("optimization failed at generation {generation}: {reason}")]
    Internal { generation: usize, reason: String },
}

/// Result type alias for collect-routing operations.
pub type Result<T> = std::result::Result<T, Error>;

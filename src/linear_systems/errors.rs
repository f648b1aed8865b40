use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinearSystemError {
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("ragged rows: row {row} has {got} columns, expected {expected}")]
    RaggedRows { row: usize, expected: usize, got: usize },

    #[error("empty matrix")]
    Empty,

    #[error("zero diagonal entry in row {row}")]
    ZeroPivot { row: usize },

    #[error("singular matrix: zero pivot U[{pivot}][{pivot}]")]
    SingularMatrix { pivot: usize },

    #[error("no convergence after {iterations} sweeps (last change {delta})")]
    NonConvergence { iterations: usize, delta: f64 },

    #[error("invalid tolerance {got} must be finite and > 0")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter {got} must be >= 1")]
    InvalidMaxIter { got: usize },
}

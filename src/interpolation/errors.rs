//! Interpolation errors. Sample-set problems are caught before fitting,
//! so a fitted polynomial can only fail on a bad query point.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    #[error("no sample points")]
    EmptyInput,

    #[error("dimension mismatch: {x_len} x-values but {y_len} y-values")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("sample value at index {idx} is NaN or infinite")]
    NonFiniteVec { idx: usize },

    #[error("degenerate sample: x-values {x1} and {x2} are not distinct")]
    DegenerateSample { x1: f64, x2: f64 },

    #[error("x_tol must be finite and > 0, got {got}")]
    InvalidXTol { got: f64 },

    #[error("query point {got} is NaN or infinite")]
    NonFiniteQuery { got: f64 },
}

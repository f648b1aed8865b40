//! Root-finding error types.
//!
//! ┌ configuration : invalid tolerance or iteration cap
//! ├ preconditions : invalid bounds/guesses, no sign change on the bracket
//! ├ degenerate    : zero derivative, zero secant denominator, non-finite step
//! ├ evaluation    : [`ExpressionError`] raised by the function
//! └ budget        : [`RootFindingError::NonConvergence`]

use crate::expression::ExpressionError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindingError {
    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid initial guess: x={x} must be finite")]
    InvalidGuess { x: f64 },

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("derivative is zero at x={x}")]
    ZeroDerivative { x: f64 },

    #[error("zero secant denominator: f({x_prev}) == f({x_curr})")]
    ZeroDenominator { x_prev: f64, x_curr: f64 },

    #[error("step non-finite at x={x}, step={step}")]
    StepNotFinite { x: f64, step: f64 },

    #[error("no convergence within {iterations} iterations; last estimate x={last}")]
    NonConvergence { iterations: usize, last: f64 },
}

use crate::expression::ExpressionError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculusError {
    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error("invalid step h = {h}, must be finite and non-zero")]
    InvalidStep { h: f64 },

    #[error("invalid point x = {x}, must be finite")]
    InvalidPoint { x: f64 },

    #[error("invalid subinterval count {n}, must be >= 1")]
    InvalidSubintervals { n: usize },

    #[error("invalid bounds [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("unknown difference scheme {name:?}, expected forward, backward or central")]
    UnknownScheme { name: String },
}

//! Expression error types.
//!
//! ┌ compile-time : malformed input, identifiers outside the allow-list
//! └ run-time     : division by zero, non-finite results

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
    #[error("empty expression")]
    Empty,

    #[error("invalid number literal `{literal}`")]
    InvalidNumber { literal: String },

    #[error("unexpected character `{ch}` at position {pos}")]
    UnexpectedCharacter { ch: char, pos: usize },

    #[error("unknown identifier `{name}`: only `x`, `pi` and `e` are allowed")]
    UnknownIdentifier { name: String },

    #[error("unknown function `{name}`")]
    UnknownFunction { name: String },

    #[error("function `{name}` takes {expected} argument(s), got {got}")]
    WrongArity { name: String, expected: usize, got: usize },

    #[error("mismatched parenthesis")]
    MismatchedParen,

    #[error("malformed expression: {reason}")]
    Malformed { reason: &'static str },

    #[error("division by zero at x={x}")]
    DivisionByZero { x: f64 },

    #[error("function non-finite at x={x}, f(x)={value}")]
    NonFinite { x: f64, value: f64 },
}

//! Sandboxed `f(x)` expressions.
//!
//! Strings are tokenized, reordered to RPN with the shunting-yard algorithm
//! and resolved against a fixed allow-list:
//!
//! ┌ variable  : `x`
//! ├ constants : `pi`, `e`
//! ├ operators : `+ - * / % ^` (`**` is an alias of `^`), unary `-`/`+`
//! └ functions : `sin cos tan asin acos atan sinh cosh tanh exp log ln
//!               log10 log2 sqrt abs` and the binary `pow`, `atan2`
//!
//! There is no other way to name a value or call code from an expression.

pub mod builtins;
pub mod errors;
mod parser;
mod tokenizer;

pub use errors::ExpressionError;

use parser::Op;
use tracing::trace;

/// A compiled expression in the single variable `x`.
#[derive(Debug, Clone)]
pub struct Expression {
    source: String,
    program: Vec<Op>,
}

impl Expression {
    /// Compiles `source`.
    ///
    /// # Errors
    /// ┌ [`ExpressionError::Empty`]              - nothing to evaluate
    /// ├ [`ExpressionError::UnknownIdentifier`]  - name other than `x`, `pi`, `e`
    /// ├ [`ExpressionError::UnknownFunction`]    - call outside the allow-list
    /// ├ [`ExpressionError::WrongArity`]         - allow-listed call, wrong argument count
    /// └ [`ExpressionError::MismatchedParen`] / [`ExpressionError::Malformed`] / ...
    pub fn parse(source: &str) -> Result<Self, ExpressionError> {
        let tokens  = tokenizer::tokenize(source)?;
        let program = parser::compile(tokens)?;
        trace!(expression = source, ops = program.len(), "compiled expression");

        Ok(Self { source: source.to_string(), program })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluates the expression with `x` bound to `x`.
    ///
    /// Division (or `%`) by zero and any non-finite result are errors.
    pub fn eval(&self, x: f64) -> Result<f64, ExpressionError> {
        let mut stack: Vec<f64> = Vec::with_capacity(self.program.len());
        let malformed = ExpressionError::Malformed { reason: "stack underflow" };

        for op in &self.program {
            let value = match *op {
                Op::Const(v) => v,
                Op::Var      => x,
                Op::Neg      => -stack.pop().ok_or_else(|| malformed.clone())?,
                Op::Call(builtins::Builtin::Unary(f)) => {
                    f(stack.pop().ok_or_else(|| malformed.clone())?)
                }
                Op::Call(builtins::Builtin::Binary(f)) => {
                    let r = stack.pop().ok_or_else(|| malformed.clone())?;
                    let l = stack.pop().ok_or_else(|| malformed.clone())?;
                    f(l, r)
                }
                Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Rem | Op::Pow => {
                    let r = stack.pop().ok_or_else(|| malformed.clone())?;
                    let l = stack.pop().ok_or_else(|| malformed.clone())?;
                    match *op {
                        Op::Add => l + r,
                        Op::Sub => l - r,
                        Op::Mul => l * r,
                        Op::Pow => l.powf(r),
                        Op::Div | Op::Rem if r == 0.0 => {
                            return Err(ExpressionError::DivisionByZero { x });
                        }
                        Op::Div => l / r,
                        _       => l % r,
                    }
                }
            };
            stack.push(value);
        }

        let value = stack.pop().ok_or(malformed)?;
        if !value.is_finite() {
            return Err(ExpressionError::NonFinite { x, value });
        }

        Ok(value)
    }
}

impl std::str::FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// Compiles `expression` and evaluates it once at `x`.
pub fn evaluate(expression: &str, x: f64) -> Result<f64, ExpressionError> {
    Expression::parse(expression)?.eval(x)
}

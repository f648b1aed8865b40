//! Classical numerical methods over `f64`.
//!
//! ┌ [`expression`]     : sandboxed parser/evaluator for `f(x)` strings
//! ├ [`root_finding`]   : bisection, Newton-Raphson, secant
//! ├ [`interpolation`]  : Newton divided differences, Lagrange
//! ├ [`linear_systems`] : Gauss-Seidel, Doolittle LU
//! └ [`calculus`]       : finite-difference derivatives, trapezoidal rule
//!
//! Every routine is a pure, single-threaded function of its inputs. Iterative
//! methods return a report holding the result, an optional error and the
//! per-iteration [`trace::Trace`].

pub mod expression;
pub mod function;
pub mod trace;

pub mod calculus;
pub mod interpolation;
pub mod linear_systems;
pub mod root_finding;

pub use expression::{evaluate, Expression, ExpressionError};
pub use function::ScalarFn;
pub use trace::Trace;

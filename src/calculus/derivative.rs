//! Finite-difference derivatives.
//!
//! ┌ forward  : (f(x + h) - f(x)) / h
//! ├ backward : (f(x) - f(x - h)) / h
//! └ central  : (f(x + h) - f(x - h)) / 2h
//!
//! Forward and backward are first-order accurate in `h`, central is
//! second-order.

use super::errors::CalculusError;
use crate::expression::Expression;
use crate::function::ScalarFn;
use std::str::FromStr;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DifferenceScheme {
    Forward,
    Backward,
    Central,
}

impl DifferenceScheme {
    pub fn name(self) -> &'static str {
        match self {
            DifferenceScheme::Forward  => "forward",
            DifferenceScheme::Backward => "backward",
            DifferenceScheme::Central  => "central",
        }
    }
}

impl FromStr for DifferenceScheme {
    type Err = CalculusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward"  => Ok(DifferenceScheme::Forward),
            "backward" => Ok(DifferenceScheme::Backward),
            "central"  => Ok(DifferenceScheme::Central),
            _          => Err(CalculusError::UnknownScheme { name: s.to_string() }),
        }
    }
}

impl std::fmt::Display for DifferenceScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}


/// One row of [`derivative_table`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivativeSample {
    pub x: f64,
    pub fx: f64,
    pub dfx: f64,
}


fn check_step(h: f64) -> Result<(), CalculusError> {
    if !h.is_finite() || h == 0.0 {
        return Err(CalculusError::InvalidStep { h });
    }
    Ok(())
}

fn difference<F: ScalarFn>(
    f: &mut F,
    x: f64,
    h: f64,
    scheme: DifferenceScheme,
) -> Result<f64, CalculusError> {
    let d = match scheme {
        DifferenceScheme::Forward  => (f.call(x + h)? - f.call(x)?) / h,
        DifferenceScheme::Backward => (f.call(x)? - f.call(x - h)?) / h,
        DifferenceScheme::Central  => (f.call(x + h)? - f.call(x - h)?) / (2.0 * h),
    };
    Ok(d)
}


/// Approximates `f'(x)` with step `h`.
///
/// # Errors
/// - [`CalculusError::InvalidStep`] if `h` is zero or not finite
/// - [`CalculusError::InvalidPoint`] if `x` is not finite
/// - [`CalculusError::Expression`] if `f` fails at a sample point
pub fn derivative<F: ScalarFn>(
    mut f: F,
    x: f64,
    h: f64,
    scheme: DifferenceScheme,
) -> Result<f64, CalculusError> {
    check_step(h)?;
    if !x.is_finite() {
        return Err(CalculusError::InvalidPoint { x });
    }

    let d = difference(&mut f, x, h, scheme)?;
    debug!(x, h, %scheme, derivative = d, "finite difference");
    Ok(d)
}

/// [`derivative`] of an expression string in `x`.
pub fn derivative_expr(
    expression: &str,
    x: f64,
    h: f64,
    scheme: DifferenceScheme,
) -> Result<f64, CalculusError> {
    derivative(Expression::parse(expression)?, x, h, scheme)
}


/// Samples `f` and its derivative at `n + 1` equally spaced points of
/// `[a, b]`, using the grid spacing `h = (b - a) / n` as the step.
///
/// # Errors
/// - [`CalculusError::InvalidBounds`] unless `a < b`, both finite
/// - [`CalculusError::InvalidSubintervals`] if `n == 0`
/// - [`CalculusError::Expression`] if `f` fails anywhere on or beside the grid
pub fn derivative_table<F: ScalarFn>(
    mut f: F,
    a: f64,
    b: f64,
    n: usize,
    scheme: DifferenceScheme,
) -> Result<Vec<DerivativeSample>, CalculusError> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(CalculusError::InvalidBounds { a, b });
    }
    if n == 0 {
        return Err(CalculusError::InvalidSubintervals { n });
    }

    let h = (b - a) / n as f64;
    check_step(h)?;

    let mut table = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let x = if i == n { b } else { a + i as f64 * h };
        let fx  = f.call(x)?;
        let dfx = difference(&mut f, x, h, scheme)?;
        table.push(DerivativeSample { x, fx, dfx });
    }

    debug!(a, b, n, %scheme, "derivative table");
    Ok(table)
}

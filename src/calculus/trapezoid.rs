//! Composite trapezoidal rule
//!
//! ```text
//! ∫_a^b f ≈ h/2 · ( f(a) + 2 Σ_{i=1}^{n-1} f(a + ih) + f(b) ),   h = (b - a)/n
//! ```

use super::errors::CalculusError;
use crate::expression::Expression;
use crate::function::ScalarFn;
use tracing::debug;


/// Integrates `f` over `[a, b]` with `n` subintervals. `a > b` yields the
/// negated integral over `[b, a]`.
///
/// # Errors
/// - [`CalculusError::InvalidBounds`] if either bound is not finite
/// - [`CalculusError::InvalidSubintervals`] if `n == 0`
/// - [`CalculusError::Expression`] if `f` fails at a node
///
/// # Example
/// ```
/// use tributary::calculus::trapezoidal;
///
/// let area = trapezoidal(|x: f64| 2.0 * x, 0.0, 1.0, 4).unwrap();
/// assert!((area - 1.0).abs() < 1e-12);
/// ```
pub fn trapezoidal<F: ScalarFn>(mut f: F, a: f64, b: f64, n: usize) -> Result<f64, CalculusError> {
    if !a.is_finite() || !b.is_finite() {
        return Err(CalculusError::InvalidBounds { a, b });
    }
    if n == 0 {
        return Err(CalculusError::InvalidSubintervals { n });
    }

    let h = (b - a) / n as f64;

    let mut interior = 0.0;
    for i in 1..n {
        interior += f.call(a + i as f64 * h)?;
    }
    let area = h / 2.0 * (f.call(a)? + 2.0 * interior + f.call(b)?);

    debug!(a, b, n, area, "trapezoidal rule");
    Ok(area)
}

/// [`trapezoidal`] over an expression string in `x`.
pub fn trapezoidal_expr(expression: &str, a: f64, b: f64, n: usize) -> Result<f64, CalculusError> {
    trapezoidal(Expression::parse(expression)?, a, b, n)
}

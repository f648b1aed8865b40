//! The scalar-function seam shared by root finding and calculus.
//!
//! [`ScalarFn`] is implemented by
//! ├ any native closure `FnMut(f64) -> f64` (non-finite output is an error)
//! └ a compiled [`Expression`]

use crate::expression::{Expression, ExpressionError};

/// A real-valued function of one real variable that may fail to evaluate.
pub trait ScalarFn {
    fn call(&mut self, x: f64) -> Result<f64, ExpressionError>;
}

impl<F> ScalarFn for F
where
    F: FnMut(f64) -> f64,
{
    #[inline]
    fn call(&mut self, x: f64) -> Result<f64, ExpressionError> {
        let fx = self(x);
        if !fx.is_finite() {
            return Err(ExpressionError::NonFinite { x, value: fx });
        }
        Ok(fx)
    }
}

impl ScalarFn for Expression {
    #[inline]
    fn call(&mut self, x: f64) -> Result<f64, ExpressionError> {
        self.eval(x)
    }
}

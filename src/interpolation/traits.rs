use crate::interpolation::errors::InterpolationError;

/// A fitted interpolating polynomial.
pub trait Interpolator {
    /// Value at `x`. Query points outside the node range are extrapolated.
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// [`Interpolator::eval`] over a slice, stopping at the first error.
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// Degree bound, `nodes - 1`.
    fn degree(&self) -> usize;

    /// See [`crate::interpolation::render`] for the format.
    fn to_polynomial_string(&self) -> String;
}

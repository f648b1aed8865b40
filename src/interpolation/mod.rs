pub mod algorithms;
pub mod config;
pub mod errors;
pub mod render;
pub mod report;
pub mod traits;
pub use traits::Interpolator;

pub mod lagrange;
pub mod newton;

pub use algorithms::Algorithm;
pub use errors::InterpolationError;
pub use lagrange::LagrangePolynomial;
pub use newton::NewtonPolynomial;


/// Fits `method` through the sample set, evaluates it at `xq` and renders
/// the polynomial.
///
/// # Example
/// ```
/// use tributary::interpolation::{fit_and_evaluate, Algorithm};
///
/// let (y, poly) = fit_and_evaluate(Algorithm::Newton, &[1.0, 2.0, 3.0], &[1.0, 4.0, 9.0], 2.5).unwrap();
/// assert!((y - 6.25).abs() < 1e-12);
/// assert_eq!(poly, "1.0000 + 3.0000*(x - 1) + 1.0000*(x - 1)*(x - 2)");
/// ```
pub fn fit_and_evaluate(
    method: Algorithm,
    x: &[f64],
    y: &[f64],
    xq: f64,
) -> Result<(f64, String), InterpolationError> {
    let poly: Box<dyn Interpolator> = match method {
        Algorithm::Lagrange => Box::new(LagrangePolynomial::fit(x, y)?),
        Algorithm::Newton   => Box::new(NewtonPolynomial::fit(x, y)?),
    };

    Ok((poly.eval(xq)?, poly.to_polynomial_string()))
}

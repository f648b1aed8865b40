//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are computed once by divided differences (O(n²)) and
//! evaluated at query points using Horner's scheme (O(n)).


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, validate_samples, CommonCfg, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::render::push_term;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;
use tracing::debug;


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - Minimum relative separation between any two `x` nodes;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
#[derive(Debug, Clone, Copy)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Computes Newton divided-difference coefficients in place.
///
/// For `j = 1..n`: `c[j..n] = (c[j..n] - c[j-1]) / (x[j..n] - x[j-1])`.
///
/// Returns a coefficient vector `c` s.t.
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
#[inline]
fn divided_differences(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut c = y.to_vec();

    for j in 1..n {
        let (c_pivot, x_pivot) = (c[j - 1], x[j - 1]);
        for i in j..n {
            c[i] = (c[i] - c_pivot) / (x[i] - x_pivot);
        }
    }

    c
}


/// Newton-form interpolating polynomial through a sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonPolynomial {
    nodes: Vec<f64>,
    coefficients: Vec<f64>,
}

impl NewtonPolynomial {
    /// Fits the polynomial through `(x[i], y[i])`. Nodes are used in the
    /// order given.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`], [`InterpolationError::UnequalLength`],
    ///   [`InterpolationError::NonFiniteVec`]
    /// - [`InterpolationError::DegenerateSample`] if two x-values coincide
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        validate_samples(x, y, DEFAULT_X_TOL)?;
        Ok(Self::fit_unchecked(x, y))
    }

    fn fit_unchecked(x: &[f64], y: &[f64]) -> Self {
        Self {
            nodes: x.to_vec(),
            coefficients: divided_differences(x, y),
        }
    }

    pub fn nodes(&self) -> &[f64] { &self.nodes }
    pub fn coefficients(&self) -> &[f64] { &self.coefficients }
}

impl Interpolator for NewtonPolynomial {
    /// Horner's nested form:
    ///
    /// ```text
    /// P(xq) = c[0] + (xq - x[0]) * [ c[1] + (xq - x[1]) * [ ... c[n-1] ... ] ]
    /// ```
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        if !xq.is_finite() {
            return Err(InterpolationError::NonFiniteQuery { got: xq });
        }

        let c = &self.coefficients;
        let n = c.len();
        let mut p = c[n - 1];
        for j in (0..n - 1).rev() {
            p = p * (xq - self.nodes[j]) + c[j];
        }

        Ok(p)
    }

    fn degree(&self) -> usize {
        self.nodes.len() - 1
    }

    /// `c0 + c1*(x - x0) + c2*(x - x0)*(x - x1) + ...`
    fn to_polynomial_string(&self) -> String {
        let mut out = String::new();
        for (i, &c) in self.coefficients.iter().enumerate() {
            push_term(&mut out, c, self.nodes[..i].iter().copied());
        }
        out
    }
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Constructs the divided-difference table to obtain coefficients `c[i]`.
/// - Evaluates the polynomial at every point of `cfg.common.x_eval()`.
///   Points outside the node range are extrapolated.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
/// - `polynomial`     : rendered Newton form
///
/// # Errors
/// - any sample-set error from [`CommonCfg::validate`]
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::Newton,
        x.len(),
        evals.len(),
    );

    let poly = NewtonPolynomial::fit_unchecked(x, y);
    debug!(nodes = x.len(), coefficients = ?poly.coefficients, "newton fit");

    report.evaluated  = poly.eval_many(evals)?;
    report.polynomial = poly.to_polynomial_string();

    Ok(report)
}

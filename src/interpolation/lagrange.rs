//! Lagrange Interpolation
//!
//! Evaluates the interpolating polynomial directly in
//! [Lagrange form](https://en.wikipedia.org/wiki/Lagrange_polynomial):
//!
//! ```text
//! P(x) = Σ_i y_i Π_{j≠i} (x - x_j) / (x_i - x_j)
//! ```
//!
//! Nothing is precomputed; every evaluation costs O(n²).


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, validate_samples, CommonCfg, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::render::push_term;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;
use tracing::debug;


/// Lagrange interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LagrangeCfg::new`] then optional setters.
#[derive(Debug, Clone, Copy)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// Lagrange-form interpolating polynomial through a sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangePolynomial {
    nodes: Vec<f64>,
    values: Vec<f64>,
}

impl LagrangePolynomial {
    /// Stores the sample set after checking it. x-values need not be sorted.
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
        Self { nodes: x.to_vec(), values: y.to_vec() }
    }

    pub fn nodes(&self) -> &[f64] { &self.nodes }
    pub fn values(&self) -> &[f64] { &self.values }

    /// `w_i = y_i / Π_{j≠i} (x_i - x_j)`, the coefficient of term `i` in
    /// the rendered form.
    pub fn weights(&self) -> Vec<f64> {
        let x = &self.nodes;
        (0..x.len())
            .map(|i| {
                let denom: f64 = (0..x.len())
                    .filter(|&j| j != i)
                    .map(|j| x[i] - x[j])
                    .product();
                self.values[i] / denom
            })
            .collect()
    }
}

impl Interpolator for LagrangePolynomial {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        if !xq.is_finite() {
            return Err(InterpolationError::NonFiniteQuery { got: xq });
        }

        let x = &self.nodes;
        let mut total = 0.0;
        for i in 0..x.len() {
            let mut term = self.values[i];
            for j in 0..x.len() {
                if i != j {
                    term *= (xq - x[j]) / (x[i] - x[j]);
                }
            }
            total += term;
        }

        Ok(total)
    }

    fn degree(&self) -> usize {
        self.nodes.len() - 1
    }

    /// `w0*(x - x1)*(x - x2)... + w1*(x - x0)*(x - x2)... + ...`
    fn to_polynomial_string(&self) -> String {
        let mut out = String::new();
        for (i, w) in self.weights().into_iter().enumerate() {
            let others = self
                .nodes
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &xj)| xj);
            push_term(&mut out, w, others);
        }
        out
    }
}


/// Performs Lagrange interpolation over the data in [`CommonCfg`].
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"lagrange"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated y-values
/// - `polynomial`     : rendered Lagrange form
///
/// # Errors
/// - any sample-set error from [`CommonCfg::validate`]
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::Lagrange,
        x.len(),
        evals.len(),
    );

    let poly = LagrangePolynomial::fit_unchecked(x, y);
    debug!(nodes = x.len(), "lagrange fit");

    report.evaluated  = poly.eval_many(evals)?;
    report.polynomial = poly.to_polynomial_string();

    Ok(report)
}

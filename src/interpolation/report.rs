use crate::interpolation::algorithms::Algorithm;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Output of [`crate::interpolation::newton::interpolate`] and
/// [`crate::interpolation::lagrange::interpolate`].
///
/// ┌ `algorithm_name` : `"newton"` or `"lagrange"`
/// ├ `n_provided`     : sample points fitted
/// ├ `n_evaluated`    : query points
/// ├ `evaluated`      : `P(x_eval[i])`, in query order
/// └ `polynomial`     : rendered form of `P`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
    pub polynomial: String,
}

impl InterpolationReport {
    pub(crate) fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            evaluated: Vec::with_capacity(n_evaluated),
            polynomial: String::new(),
        }
    }
}

//! Configuration for the Gauss-Seidel solver.
//!
//! [`GaussSeidelCfg`]
//! ├ `tolerance`     : infinity-norm change between sweeps that counts as converged
//! ├ `max_iter`      : sweep cap
//! └ `initial_guess` : starting vector, zeros when unset

use super::errors::LinearSystemError;

pub const DEFAULT_TOLERANCE: f64   = 1e-6;
pub const DEFAULT_MAX_ITER:  usize = 100;


#[derive(Debug, Clone, PartialEq)]
pub struct GaussSeidelCfg {
    tolerance: f64,
    max_iter: usize,
    initial_guess: Option<Vec<f64>>,
}

impl GaussSeidelCfg {
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iter: DEFAULT_MAX_ITER,
            initial_guess: None,
        }
    }

    pub fn tolerance(&self) -> f64 { self.tolerance }
    pub fn max_iter(&self) -> usize { self.max_iter }
    pub fn initial_guess(&self) -> Option<&[f64]> { self.initial_guess.as_deref() }

    pub fn set_tolerance(mut self, tolerance: f64) -> Result<Self, LinearSystemError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(LinearSystemError::InvalidTolerance { got: tolerance });
        }
        self.tolerance = tolerance;
        Ok(self)
    }

    pub fn set_max_iter(mut self, max_iter: usize) -> Result<Self, LinearSystemError> {
        if max_iter == 0 {
            return Err(LinearSystemError::InvalidMaxIter { got: max_iter });
        }
        self.max_iter = max_iter;
        Ok(self)
    }

    /// Length is checked against the system when the solver starts.
    pub fn set_initial_guess(mut self, x0: Vec<f64>) -> Self {
        self.initial_guess = Some(x0);
        self
    }
}

impl Default for GaussSeidelCfg {
    fn default() -> Self { Self::new() }
}

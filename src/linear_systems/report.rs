//! Reports returned by the linear-system solvers.

use super::errors::LinearSystemError;
use super::matrix::Matrix;
use crate::trace::Trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// State after one Gauss-Seidel sweep.
/// - `iteration` : 1-based sweep number
/// - `x`         : full solution vector after the sweep
/// - `delta`     : `‖x - x_prev‖∞`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepRecord {
    pub iteration: usize,
    pub x: Vec<f64>,
    pub delta: f64,
}


/// Outcome of [`crate::linear_systems::gauss_seidel`].
///
/// [`SolveReport`]
/// - `solution`   : last iterate; present on convergence and on an exhausted budget
/// - `error`      : set on failure, including [`LinearSystemError::NonConvergence`]
/// - `iterations` : completed sweeps
/// - `trace`      : one [`SweepRecord`] per sweep
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub solution   : Option<Vec<f64>>,
    pub error      : Option<LinearSystemError>,
    pub iterations : usize,
    pub trace      : Trace<SweepRecord>,
}

impl SolveReport {
    pub fn is_converged(&self) -> bool {
        self.solution.is_some() && self.error.is_none()
    }
}


/// Result of [`crate::linear_systems::lu_solve`]: the solution and the factors it came from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LuSolution {
    pub solution: Vec<f64>,
    pub l: Matrix,
    pub u: Matrix,
}

//! Gauss-Seidel Iteration
//!
//! Solves `A·x = b` by sweeping over the unknowns in order:
//!
//! ```text
//! x_i ← ( b_i - Σ_{j<i} A_ij x_j(new) - Σ_{j>i} A_ij x_j(old) ) / A_ii
//! ```
//!
//! Convergence is guaranteed for strictly diagonally dominant `A` but is not
//! required; a run that exhausts its budget still returns its last iterate.


use super::config::GaussSeidelCfg;
use super::errors::LinearSystemError;
use super::matrix::{inf_norm_diff, Matrix};
use super::report::{SolveReport, SweepRecord};
use crate::trace::Trace;
use tracing::{debug, trace, warn};


/// Shape and diagonal checks, run before the first sweep. Returns the
/// starting vector.
fn prepare(a: &Matrix, b: &[f64], cfg: &GaussSeidelCfg) -> Result<Vec<f64>, LinearSystemError> {
    let n = a.rows();
    if n == 0 {
        return Err(LinearSystemError::Empty);
    }
    if !a.is_square() {
        return Err(LinearSystemError::DimensionMismatch { expected: n, got: a.cols() });
    }
    if b.len() != n {
        return Err(LinearSystemError::DimensionMismatch { expected: n, got: b.len() });
    }
    if let Some(row) = a.diagonal().iter().position(|&d| d == 0.0) {
        return Err(LinearSystemError::ZeroPivot { row });
    }

    match cfg.initial_guess() {
        Some(x0) if x0.len() != n => {
            Err(LinearSystemError::DimensionMismatch { expected: n, got: x0.len() })
        }
        Some(x0) => Ok(x0.to_vec()),
        None     => Ok(vec![0.0; n]),
    }
}


/// Runs Gauss-Seidel sweeps on `A·x = b`.
///
/// # Arguments
/// - `a`   : square coefficient matrix with a non-zero diagonal
/// - `b`   : right-hand side, `len(b) == a.rows()`
/// - `cfg` : [`GaussSeidelCfg`]
///
/// # Returns
/// [`SolveReport`]
/// ├ converged     : `solution` set, `error` none
/// ├ budget spent  : `solution` holds the last sweep, `error` is
/// │                 [`LinearSystemError::NonConvergence`]
/// └ bad input     : no `solution`, zero iterations, empty trace
///
/// # Errors (inside the report)
/// - [`LinearSystemError::Empty`], [`LinearSystemError::DimensionMismatch`]
/// - [`LinearSystemError::ZeroPivot`] for a zero diagonal entry
/// - [`LinearSystemError::NonConvergence`]
pub fn gauss_seidel(a: &Matrix, b: &[f64], cfg: GaussSeidelCfg) -> SolveReport {
    let mut x = match prepare(a, b, &cfg) {
        Ok(x0) => x0,
        Err(error) => {
            warn!(%error, "gauss-seidel rejected input");
            return SolveReport { solution: None, error: Some(error), iterations: 0, trace: Trace::new() };
        }
    };

    let n = x.len();
    let tol = cfg.tolerance();
    debug!(n, tol, max_iter = cfg.max_iter(), "gauss-seidel start");

    let mut records = Trace::with_capacity(cfg.max_iter().min(64));
    let mut delta = f64::INFINITY;

    for iter in 1..=cfg.max_iter() {
        let x_old = x.clone();

        for i in 0..n {
            let row = a.row(i);
            let sigma: f64 = (0..n)
                .filter(|&j| j != i)
                .map(|j| row[j] * x[j])
                .sum();
            x[i] = (b[i] - sigma) / row[i];
        }

        delta = inf_norm_diff(&x, &x_old);
        trace!(iteration = iter, delta, "gauss-seidel sweep");
        records.push(SweepRecord { iteration: iter, x: x.clone(), delta });

        if delta < tol {
            debug!(iterations = iter, delta, "gauss-seidel converged");
            return SolveReport { solution: Some(x), error: None, iterations: iter, trace: records };
        }
    }

    let iterations = records.len();
    let error = LinearSystemError::NonConvergence { iterations, delta };
    warn!(%error, "gauss-seidel did not converge");
    SolveReport { solution: Some(x), error: Some(error), iterations, trace: records }
}

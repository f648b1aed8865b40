//! Defines the [`RootReport`] struct returned by all
//! root-finding algorithms.

use super::algorithms::Algorithm;
use super::errors::RootFindingError;
use crate::trace::Trace;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// step (or half-width) dropped below tolerance
    ToleranceReached,
    /// bisection midpoint evaluated to exactly zero
    ExactRoot,
    /// iteration budget exhausted
    IterationLimit,
    /// precondition or degenerate-step failure
    Failed,
}


/// One row of a root-finding trace.
/// - [`IterationRecord::Bracket`] : bracketing methods
///     - bracket `[a, b]` at the start of the iteration, midpoint `c`
///       and the three function values
/// - [`IterationRecord::Point`]   : open methods
///     - iterate `x` and `f(x)`; the starting guesses are recorded too
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IterationRecord {
    Bracket { iteration: usize, a: f64, b: f64, c: f64, fa: f64, fb: f64, fc: f64 },
    Point   { iteration: usize, x: f64, fx: f64 },
}
impl IterationRecord {
    pub fn iteration(&self) -> usize {
        match *self {
            IterationRecord::Bracket { iteration, .. } => iteration,
            IterationRecord::Point   { iteration, .. } => iteration,
        }
    }

    /// The estimate produced by this row (`c` for brackets, `x` for points).
    pub fn estimate(&self) -> f64 {
        match *self {
            IterationRecord::Bracket { c, .. } => c,
            IterationRecord::Point   { x, .. } => x,
        }
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootReport`]
/// - `root`           : root estimate, `None` when the run failed
/// - `error`          : why the run failed, `None` on success
/// - `iterations`     : completed iterations
/// - `termination`    : why the solver stopped ([`Termination`])
/// - `trace`          : every [`IterationRecord`] produced, in order
/// - `algorithm_name` : algorithm name (e.g. `"bisection"`)
///
/// Bisection never fails on an exhausted budget; it returns its last
/// midpoint with [`Termination::IterationLimit`]. Open methods report
/// [`RootFindingError::NonConvergence`] instead.
#[derive(Debug, Clone)]
pub struct RootReport {
    pub root           : Option<f64>,
    pub error          : Option<RootFindingError>,
    pub iterations     : usize,
    pub termination    : Termination,
    pub trace          : Trace<IterationRecord>,
    pub algorithm_name : &'static str,
}

impl RootReport {
    /// Builds the report from a solver loop's outcome. Iterations are
    /// counted from the trace, minus the algorithm's seed records.
    pub(crate) fn from_outcome(
        algorithm: Algorithm,
        outcome: Result<(f64, Termination), RootFindingError>,
        trace: Trace<IterationRecord>,
    ) -> Self {
        let iterations     = trace.len().saturating_sub(algorithm.seed_records());
        let algorithm_name = algorithm.algorithm_name();

        match outcome {
            Ok((root, termination)) => {
                debug!(algorithm = algorithm_name, root, iterations, ?termination, "root found");
                Self { root: Some(root), error: None, iterations, termination, trace, algorithm_name }
            }
            Err(error) => {
                let termination = match error {
                    RootFindingError::NonConvergence { .. } => Termination::IterationLimit,
                    _                                       => Termination::Failed,
                };
                warn!(algorithm = algorithm_name, iterations, %error, "root finding failed");
                Self { root: None, error: Some(error), iterations, termination, trace, algorithm_name }
            }
        }
    }

    /// A report for a run that never started (e.g. the expression did not compile).
    pub(crate) fn rejected(algorithm: Algorithm, error: RootFindingError) -> Self {
        Self::from_outcome(algorithm, Err(error), Trace::new())
    }

    /// `true` only for a tolerance stop or an exact root; a bisection run
    /// that spent its budget still carries a root but has not converged.
    pub fn is_converged(&self) -> bool {
        self.root.is_some()
            && self.error.is_none()
            && matches!(self.termination, Termination::ToleranceReached | Termination::ExactRoot)
    }

    /// The root, or the error that prevented finding one. A report holding
    /// neither is read as non-convergence.
    pub fn outcome(&self) -> Result<f64, RootFindingError> {
        match (&self.error, self.root) {
            (Some(e), _)       => Err(e.clone()),
            (None, Some(root)) => Ok(root),
            (None, None)       => Err(RootFindingError::NonConvergence {
                iterations : self.iterations,
                last       : self.trace.last().map_or(f64::NAN, IterationRecord::estimate),
            }),
        }
    }
}

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::report::{IterationRecord, RootReport, Termination};
use crate::function::ScalarFn;
use crate::trace::Trace;
use tracing::{debug, trace};

const ALGORITHM: Algorithm = Algorithm::SECANT;


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance and `max_iter`.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(SecantCfg);


/// Calculates the secant x-intercept for the line
/// connecting `(x_prev, f_prev)` and `(x_curr, f_curr)`
///
/// # Returns
/// - `Ok(x_next)` : `x_curr - f_curr * (x_curr - x_prev) / (f_curr - f_prev)`
/// - `Err(ZeroDenominator)` if `f_curr == f_prev`
#[inline]
pub(crate) fn calculate_secant_x_intercept(
    (x_prev, f_prev): (f64, f64),
    (x_curr, f_curr): (f64, f64),
) -> Result<f64, RootFindingError> {
    let denom = f_curr - f_prev;
    if denom == 0.0 {
        return Err(RootFindingError::ZeroDenominator { x_prev, x_curr });
    }

    Ok(x_curr - f_curr * (x_curr - x_prev) / denom)
}


fn secant_loop<F>(
    func: &mut F,
    x0: f64,
    x1: f64,
    cfg: &SecantCfg,
    history: &mut Trace<IterationRecord>,
) -> Result<(f64, Termination), RootFindingError>
where F: ScalarFn {

    for x in [x0, x1] {
        if !x.is_finite() {
            return Err(RootFindingError::InvalidGuess { x });
        }
    }

    let tol = cfg.tolerance();

    let mut x_prev = x0;
    let mut f_prev = func.call(x0)?;
    history.push(IterationRecord::Point { iteration: 0, x: x_prev, fx: f_prev });

    let mut x_curr = x1;
    let mut f_curr = func.call(x1)?;
    history.push(IterationRecord::Point { iteration: 1, x: x_curr, fx: f_curr });

    for iter in 1..=cfg.max_iter() {
        let x_next = calculate_secant_x_intercept((x_prev, f_prev), (x_curr, f_curr))?;
        if !x_next.is_finite() {
            return Err(RootFindingError::StepNotFinite { x: x_curr, step: x_next - x_curr });
        }

        let f_next = func.call(x_next)?;
        history.push(IterationRecord::Point { iteration: iter + 1, x: x_next, fx: f_next });
        trace!(iter, x = x_next, fx = f_next, "secant step");

        if (x_next - x_curr).abs() < tol {
            return Ok((x_next, Termination::ToleranceReached));
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f_next;
    }

    Err(RootFindingError::NonConvergence { iterations: cfg.max_iter(), last: x_curr })
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : the function whose root is to be found
/// - `x0`   : first initial guess, finite
/// - `x1`   : second initial guess, finite
/// - `cfg`  : [`SecantCfg`] (tolerance, `max_iter`)
///
/// # Returns
/// [`RootReport`] with `algorithm_name = "secant"`. The trace starts with
/// both guesses (`iteration` 0 and 1); step `n` is recorded as `n + 1`.
///
/// # Errors (in [`RootReport::error`])
/// - [`RootFindingError::InvalidGuess`]    : `x0` or `x1` is NaN/inf
/// - [`RootFindingError::ZeroDenominator`] : `f(x_n) == f(x_{n-1})`, including `x0 == x1`
/// - [`RootFindingError::StepNotFinite`]   : the intercept overflowed
/// - [`RootFindingError::NonConvergence`]  : budget exhausted, no root reported
/// - [`RootFindingError::Expression`]      : `func` failed to evaluate
///
/// # Behavior
/// - Update: `x_{n+1} = x_n - f(x_n) (x_n - x_{n-1}) / (f(x_n) - f(x_{n-1}))`
/// - Converged when `|x_{n+1} - x_n| < tolerance`
///
/// # Warning
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg,
) -> RootReport
where F: ScalarFn {
    debug!(x0, x1, tolerance = cfg.tolerance(), max_iter = cfg.max_iter(), "secant");

    let mut history = Trace::new();
    let outcome = secant_loop(&mut func, x0, x1, &cfg, &mut history);

    RootReport::from_outcome(ALGORITHM, outcome, history)
}

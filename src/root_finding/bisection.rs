use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::report::{IterationRecord, RootReport, Termination};
use super::signs::opposite_sign;
use crate::function::ScalarFn;
use crate::trace::Trace;
use tracing::{debug, trace};

const ALGORITHM: Algorithm = Algorithm::BISECTION;

/// Bisection Configuration
///
/// # Defaults
///
/// ┌ DEFAULT_TOLERANCE - half-width `(b - a) / 2` below which the bracket is converged
/// └ DEFAULT_MAX_ITER  - iteration cap (100)
///
/// # Validation:
/// └ Setters validate eagerly:
///    ├ `tolerance` > 0 and finite
///    └ `max_iter`  >= 1
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(BisectionCfg);

/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}

fn bisection_loop<F>(
    func: &mut F,
    mut a: f64,
    mut b: f64,
    cfg: &BisectionCfg,
    history: &mut Trace<IterationRecord>,
) -> Result<(f64, Termination), RootFindingError>
where F: ScalarFn {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(RootFindingError::InvalidBounds { a, b });
    }

    let tol = cfg.tolerance();

    let mut fa = func.call(a)?;
    let mut fb = func.call(b)?;
    if !opposite_sign(fa, fb) {
        return Err(RootFindingError::NoSignChange { a, b, fa, fb });
    }

    let mut c = calculate_bisection(a, b);
    for iter in 1..=cfg.max_iter() {
        if (b - a) * 0.5 < tol {
            return Ok((c, Termination::ToleranceReached));
        }

        c = calculate_bisection(a, b);
        let fc = func.call(c)?;
        history.push(IterationRecord::Bracket { iteration: iter, a, b, c, fa, fb, fc });
        trace!(iter, a, b, c, fc, "bisection step");

        if fc == 0.0 {
            return Ok((c, Termination::ExactRoot));
        }

        // shrink interval
        if opposite_sign(fa, fc) {
            b  = c;
            fb = fc;
        } else {
            a  = c;
            fa = fc;
        }
    }

    if (b - a) * 0.5 < tol {
        Ok((c, Termination::ToleranceReached))
    } else {
        debug!(a, b, "bisection budget exhausted; returning last midpoint");
        Ok((c, Termination::IterationLimit))
    }
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that `func` is continuous on `[a, b]` and that
/// `func(a)` and `func(b)` have opposite signs, guaranteeing a root exists
/// within the interval.
///
/// # Arguments
///
/// ┌ `func` - Function whose root is to be found. See [`ScalarFn`].
/// ├ `a`    - Lower bound of the search interval. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the search interval. Must be finite and greater than `a`.
/// └ `cfg`  - [`BisectionCfg`] (tolerance, max_iter)
///
/// # Behavior
///
/// Each iteration sets `c = (a + b) / 2`, records
/// `(iteration, a, b, c, f(a), f(b), f(c))` and keeps the half containing the
/// sign change (`[a, c]` if `f(a) * f(c) < 0`, else `[c, b]`).
/// ├ Stops with [`Termination::ExactRoot`] if `f(c) == 0`.
/// ├ Stops with [`Termination::ToleranceReached`] once `(b - a) / 2 < tolerance`.
/// └ On an exhausted budget, returns the last midpoint without error
///   ([`Termination::IterationLimit`]); bisection cannot diverge.
///
/// # Errors (in [`RootReport::error`])
///
/// ┌ [`RootFindingError::InvalidBounds`] - `a` or `b` is NaN/inf, or `a >= b`.
/// ├ [`RootFindingError::NoSignChange`]  - `f(a) * f(b) >= 0`; no iteration is run.
/// └ [`RootFindingError::Expression`]    - `func` failed to evaluate.
pub fn bisection<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: BisectionCfg,
) -> RootReport
where F: ScalarFn {
    debug!(a, b, tolerance = cfg.tolerance(), max_iter = cfg.max_iter(), "bisection");

    let mut history = Trace::with_capacity(cfg.max_iter().min(64));
    let outcome = bisection_loop(&mut func, a, b, &cfg, &mut history);

    RootReport::from_outcome(ALGORITHM, outcome, history)
}

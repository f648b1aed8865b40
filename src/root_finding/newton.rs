//! Newton-Raphson method

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::report::{IterationRecord, RootReport, Termination};
use crate::function::ScalarFn;
use crate::trace::Trace;
use tracing::{debug, trace};

const ALGORITHM: Algorithm = Algorithm::NEWTON;


/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance and `max_iter`.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg);


/// Central finite-difference fallback, `h = eps^{1/3} * max(|x|, 1)`
#[inline]
fn eval_dfx_fd<F>(f: &mut F, x: f64) -> Result<f64, RootFindingError>
where F: ScalarFn {
    let h   = f64::EPSILON.cbrt() * x.abs().max(1.0);
    let fxp = f.call(x + h)?;
    let fxm = f.call(x - h)?;

    Ok((fxp - fxm) / (2.0 * h))
}


fn newton_loop<F, G>(
    f: &mut F,
    mut df: Option<G>,
    x0: f64,
    cfg: &NewtonCfg,
    history: &mut Trace<IterationRecord>,
) -> Result<(f64, Termination), RootFindingError>
where
    F: ScalarFn,
    G: ScalarFn
{
    if !x0.is_finite() {
        return Err(RootFindingError::InvalidGuess { x: x0 });
    }

    let tol = cfg.tolerance();

    let mut x  = x0;
    let mut fx = f.call(x)?;
    history.push(IterationRecord::Point { iteration: 0, x, fx });

    for iter in 1..=cfg.max_iter() {
        let dfx = match df.as_mut() {
            Some(d) => d.call(x)?,
            None    => eval_dfx_fd(f, x)?,
        };
        if dfx == 0.0 {
            return Err(RootFindingError::ZeroDerivative { x });
        }

        let step   = -fx / dfx;
        let x_next = x + step;
        if !x_next.is_finite() {
            return Err(RootFindingError::StepNotFinite { x, step });
        }

        let fx_next = f.call(x_next)?;
        history.push(IterationRecord::Point { iteration: iter, x: x_next, fx: fx_next });
        trace!(iter, x = x_next, fx = fx_next, dfx, "newton step");

        if (x_next - x).abs() < tol {
            return Ok((x_next, Termination::ToleranceReached));
        }

        x  = x_next;
        fx = fx_next;
    }

    Err(RootFindingError::NonConvergence { iterations: cfg.max_iter(), last: x })
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
/// Supports analytic derivatives or a central finite-difference fallback.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : optional analytic derivative; if `None`, use finite-difference
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (tolerance, `max_iter`)
///
/// # Returns
/// [`RootReport`] with `algorithm_name = "newton"`. The trace holds
/// `(0, x0, f(x0))` followed by `(n, x_n, f(x_n))` for every completed step.
///
/// # Errors (in [`RootReport::error`])
/// - [`RootFindingError::InvalidGuess`]   : `x0` non-finite
/// - [`RootFindingError::ZeroDerivative`] : `f'(x_n) == 0`; terminal
/// - [`RootFindingError::StepNotFinite`]  : `x_n - f/f'` overflowed
/// - [`RootFindingError::NonConvergence`] : budget exhausted, no root reported
/// - [`RootFindingError::Expression`]     : `f` or `f'` failed to evaluate
///
/// # Behavior
/// - Update: `x_{n+1} = x_n - f(x_n) / f'(x_n)`
/// - Converged when `|x_{n+1} - x_n| < tolerance`
///
/// # Notes
/// - Convergence is *local only* and depends on a good initial guess `x0` and
///   smoothness of `f`. For guaranteed convergence, use [`super::bisection`].
pub fn newton<F, G>(
    mut func: F,
    dfunc: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> RootReport
where
    F: ScalarFn,
    G: ScalarFn {
    debug!(
        x0,
        analytic_derivative = dfunc.is_some(),
        tolerance = cfg.tolerance(),
        max_iter = cfg.max_iter(),
        "newton"
    );

    let mut history = Trace::new();
    let outcome = newton_loop(&mut func, dfunc, x0, &cfg, &mut history);

    RootReport::from_outcome(ALGORITHM, outcome, history)
}

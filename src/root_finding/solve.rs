//! Expression-string entry point for the root finders.
//!
//! A presentation layer hands over the method, the text of `f(x)` and the
//! shared tolerance/iteration settings; compile errors come back inside the
//! report like any other failure.

use super::algorithms::Algorithm;
use super::bisection::{bisection, BisectionCfg};
use super::config::{impl_common_cfg, CommonCfg};
use super::newton::{newton, NewtonCfg};
use super::report::RootReport;
use super::secant::{secant, SecantCfg};
use crate::expression::Expression;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Method selection with its method-specific parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Method {
    Bisection { a: f64, b: f64 },
    /// `derivative` is the text of `f'(x)`; `None` uses a finite difference
    Newton    { x0: f64, derivative: Option<String> },
    Secant    { x0: f64, x1: f64 },
}
impl Method {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Method::Bisection { .. } => Algorithm::BISECTION,
            Method::Newton { .. }    => Algorithm::NEWTON,
            Method::Secant { .. }    => Algorithm::SECANT,
        }
    }
}


/// Settings shared by every [`Method`].
#[derive(Debug, Copy, Clone)]
pub struct SolveCfg {
    common: CommonCfg,
}
impl SolveCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(SolveCfg);


/// Compiles `expression` (and the derivative, for Newton) and runs `method`.
///
/// # Example
/// ```
/// use tributary::root_finding::solve::{solve, Method, SolveCfg};
///
/// let cfg = SolveCfg::new().set_tolerance(1e-6).unwrap();
/// let report = solve(&Method::Secant { x0: 0.0, x1: 2.0 }, "x**2 - 2", cfg);
/// assert!((report.root.unwrap() - 2f64.sqrt()).abs() < 1e-6);
/// ```
pub fn solve(method: &Method, expression: &str, cfg: SolveCfg) -> RootReport {
    let algorithm = method.algorithm();

    let f = match Expression::parse(expression) {
        Ok(f)  => f,
        Err(e) => return RootReport::rejected(algorithm, e.into()),
    };

    match method {
        Method::Bisection { a, b } => {
            bisection(f, *a, *b, BisectionCfg::from_common(cfg.common))
        }
        Method::Newton { x0, derivative } => {
            let df = match derivative.as_deref().map(Expression::parse).transpose() {
                Ok(df) => df,
                Err(e) => return RootReport::rejected(algorithm, e.into()),
            };
            newton(f, df, *x0, NewtonCfg::from_common(cfg.common))
        }
        Method::Secant { x0, x1 } => {
            secant(f, *x0, *x1, SecantCfg::from_common(cfg.common))
        }
    }
}

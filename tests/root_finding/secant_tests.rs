use approx::assert_abs_diff_eq;
use tributary::root_finding::errors::RootFindingError;
use tributary::root_finding::report::{IterationRecord, Termination};
use tributary::root_finding::secant::{secant, SecantCfg};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2_from_zero_and_two() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_tolerance(1e-6)?;

    let rep = secant(f, 0.0, 2.0, cfg);

    assert!(rep.is_converged());
    assert_eq!(rep.algorithm_name, "secant");
    assert_abs_diff_eq!(rep.outcome()?, 2f64.sqrt(), epsilon = 1e-6);
    Ok(())
}

#[test]
fn both_guesses_are_recorded() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let rep = secant(f, 0.0, 2.0, SecantCfg::new());

    let rows = rep.trace.as_slice();
    assert_eq!(rows[0], IterationRecord::Point { iteration: 0, x: 0.0, fx: -2.0 });
    assert_eq!(rows[1], IterationRecord::Point { iteration: 1, x: 2.0, fx: 2.0 });
    // first intercept of the chord through (0, -2) and (2, 2)
    assert_eq!(rows[2], IterationRecord::Point { iteration: 2, x: 1.0, fx: -1.0 });
    assert_eq!(rep.trace.len(), rep.iterations + 2);
    Ok(())
}

#[test]
fn flat_function_has_zero_denominator() {
    let f   = |_x: f64| 1.0;
    let rep = secant(f, 0.0, 1.0, SecantCfg::new());

    assert_eq!(rep.error, Some(RootFindingError::ZeroDenominator { x_prev: 0.0, x_curr: 1.0 }));
    assert_eq!(rep.termination, Termination::Failed);
    assert_eq!(rep.iterations, 0);
    assert_eq!(rep.trace.len(), 2);
}

#[test]
fn exhausted_budget_is_non_convergence() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_tolerance(1e-12)?.set_max_iter(2)?;

    let rep = secant(f, 0.0, 2.0, cfg);

    assert!(matches!(rep.error, Some(RootFindingError::NonConvergence { iterations: 2, .. })));
    assert_eq!(rep.root, None);
    assert_eq!(rep.iterations, 2);
    assert!(rep.outcome().is_err());
    Ok(())
}

#[test]
fn non_finite_guess_is_rejected() {
    let f   = |x: f64| x;
    let rep = secant(f, 0.0, f64::INFINITY, SecantCfg::new());
    assert_eq!(rep.error, Some(RootFindingError::InvalidGuess { x: f64::INFINITY }));
}

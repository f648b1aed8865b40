use approx::assert_abs_diff_eq;
use tributary::root_finding::errors::RootFindingError;
use tributary::root_finding::newton::{newton, NewtonCfg};
use tributary::root_finding::report::{IterationRecord, Termination};
use tributary::Expression;

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2_with_analytic_derivative() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_tolerance(1e-6)?;

    let rep = newton(f, Some(df), 1.0, cfg);

    assert!(rep.is_converged());
    assert_eq!(rep.algorithm_name, "newton");
    assert_eq!(rep.termination, Termination::ToleranceReached);
    assert_abs_diff_eq!(rep.outcome()?, 2f64.sqrt(), epsilon = 1e-6);
    assert!(rep.iterations < 10);
    Ok(())
}

#[test]
fn trace_starts_with_the_initial_guess() -> TestResult {
    let f  = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let rep = newton(f, Some(df), 1.0, NewtonCfg::new());

    assert_eq!(rep.trace.first().copied(), Some(IterationRecord::Point { iteration: 0, x: 1.0, fx: -1.0 }));
    assert_eq!(rep.trace.as_slice()[1], IterationRecord::Point { iteration: 1, x: 1.5, fx: 0.25 });
    assert_eq!(rep.trace.len(), rep.iterations + 1);
    Ok(())
}

#[test]
fn finds_sqrt_2_with_fd_derivative() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = NewtonCfg::new().set_tolerance(1e-10)?;

    let rep = newton(f, None::<fn(f64) -> f64>, 1.0, cfg);

    assert_abs_diff_eq!(rep.outcome()?, 2f64.sqrt(), epsilon = 1e-9);
    Ok(())
}

#[test]
fn accepts_compiled_expressions() -> TestResult {
    let f  = Expression::parse("cos(x) - x")?;
    let df = Expression::parse("-sin(x) - 1")?;

    let rep = newton(f, Some(df), 1.0, NewtonCfg::new());

    assert_abs_diff_eq!(rep.outcome()?, 0.739_085_133_215_160_6, epsilon = 1e-6);
    Ok(())
}

#[test]
fn zero_derivative_is_terminal() {
    let f  = |x: f64| x * x - 1.0;
    let df = |x: f64| 2.0 * x;

    let rep = newton(f, Some(df), 0.0, NewtonCfg::new());

    assert_eq!(rep.error, Some(RootFindingError::ZeroDerivative { x: 0.0 }));
    assert_eq!(rep.root, None);
    assert_eq!(rep.termination, Termination::Failed);
    assert_eq!(rep.iterations, 0);
    assert_eq!(rep.trace.len(), 1);
}

#[test]
fn exhausted_budget_is_non_convergence() -> TestResult {
    // no real root; every step has magnitude >= 1
    let f   = |x: f64| x * x + 1.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_max_iter(5)?;

    let rep = newton(f, Some(df), 0.5, cfg);

    assert!(matches!(rep.error, Some(RootFindingError::NonConvergence { iterations: 5, .. })));
    assert_eq!(rep.root, None);
    assert_eq!(rep.termination, Termination::IterationLimit);
    assert_eq!(rep.iterations, 5);
    assert_eq!(rep.trace.len(), 6);
    Ok(())
}

#[test]
fn non_finite_guess_is_rejected() {
    let f   = |x: f64| x;
    let rep = newton(f, None::<fn(f64) -> f64>, f64::NAN, NewtonCfg::new());

    assert!(matches!(rep.error, Some(RootFindingError::InvalidGuess { .. })));
    assert!(rep.trace.is_empty());
    assert_eq!(rep.iterations, 0);
}

#[test]
fn evaluation_failure_keeps_partial_trace() -> TestResult {
    let f  = Expression::parse("log(x)")?;
    let df = Expression::parse("1/x")?;

    // x1 = 3 - 3 ln 3 < 0, where log is undefined
    let rep = newton(f, Some(df), 3.0, NewtonCfg::new());

    assert!(matches!(
        rep.error,
        Some(RootFindingError::Expression(tributary::ExpressionError::NonFinite { .. }))
    ));
    assert_eq!(rep.trace.len(), 1);
    Ok(())
}

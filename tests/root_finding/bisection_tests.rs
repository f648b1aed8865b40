use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use tributary::root_finding::bisection::{bisection, BisectionCfg};
use tributary::root_finding::errors::RootFindingError;
use tributary::root_finding::report::{IterationRecord, Termination};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2_on_unit_bracket() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol = 1e-6;
    let cfg = BisectionCfg::new().set_tolerance(tol)?;

    let rep = bisection(f, 0.0, 2.0, cfg);
    let root = rep.outcome()?;

    assert!(rep.is_converged());
    assert_eq!(rep.termination, Termination::ToleranceReached);
    assert_eq!(rep.algorithm_name, "bisection");
    // the returned midpoint is an endpoint of the final bracket
    assert_abs_diff_eq!(root, 2f64.sqrt(), epsilon = 2.0 * tol);

    let bound = ((2.0 - 0.0) / tol).log2().ceil() as usize;
    assert!(rep.iterations <= bound, "{} > {}", rep.iterations, bound);
    assert_eq!(rep.iterations, rep.trace.len());
    Ok(())
}

#[test]
fn trace_rows_are_one_based_and_complete() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_tolerance(1e-3)?;

    let rep = bisection(f, 0.0, 2.0, cfg);

    let first = rep.trace.first().copied();
    assert_eq!(
        first,
        Some(IterationRecord::Bracket { iteration: 1, a: 0.0, b: 2.0, c: 1.0, fa: -2.0, fb: 2.0, fc: -1.0 })
    );
    for (i, rec) in rep.trace.iter().enumerate() {
        assert_eq!(rec.iteration(), i + 1);
    }
    Ok(())
}

#[test]
fn exact_midpoint_root_stops_immediately() -> TestResult {
    let f   = |x: f64| x - 1.0;
    let rep = bisection(f, 0.0, 2.0, BisectionCfg::new());

    assert_eq!(rep.outcome()?, 1.0);
    assert_eq!(rep.termination, Termination::ExactRoot);
    assert_eq!(rep.iterations, 1);
    Ok(())
}

#[test]
fn no_sign_change_runs_no_iterations() {
    let f   = |x: f64| x * x + 1.0;
    let rep = bisection(f, -1.0, 1.0, BisectionCfg::new());

    assert!(matches!(rep.error, Some(RootFindingError::NoSignChange { .. })));
    assert_eq!(rep.root, None);
    assert_eq!(rep.iterations, 0);
    assert!(rep.trace.is_empty());
    assert_eq!(rep.termination, Termination::Failed);
}

#[test]
fn zero_at_endpoint_is_not_a_sign_change() {
    let f   = |x: f64| x;
    let rep = bisection(f, 0.0, 1.0, BisectionCfg::new());
    assert!(matches!(rep.error, Some(RootFindingError::NoSignChange { .. })));
}

#[test]
fn rejects_reversed_and_non_finite_bounds() {
    let f = |x: f64| x;

    let rep = bisection(f, 2.0, 1.0, BisectionCfg::new());
    assert_eq!(rep.error, Some(RootFindingError::InvalidBounds { a: 2.0, b: 1.0 }));

    let rep = bisection(f, f64::NEG_INFINITY, 1.0, BisectionCfg::new());
    assert!(matches!(rep.error, Some(RootFindingError::InvalidBounds { .. })));
}

#[test]
fn exhausted_budget_returns_last_midpoint_without_error() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_max_iter(3)?;

    let rep = bisection(f, 0.0, 2.0, cfg);

    assert_eq!(rep.error, None);
    assert_eq!(rep.termination, Termination::IterationLimit);
    assert_eq!(rep.iterations, 3);
    assert_eq!(rep.root, rep.trace.last().map(IterationRecord::estimate));
    assert!(!rep.is_converged());
    Ok(())
}

#[test]
fn narrow_initial_bracket_needs_no_iterations() -> TestResult {
    let f   = |x: f64| x - 5e-8;
    let cfg = BisectionCfg::new().set_tolerance(1e-6)?;

    let rep = bisection(f, 0.0, 1e-7, cfg);

    assert_eq!(rep.iterations, 0);
    assert_eq!(rep.termination, Termination::ToleranceReached);
    assert_abs_diff_eq!(rep.outcome()?, 5e-8, epsilon = 1e-15);
    Ok(())
}

#[test]
fn function_failure_is_captured() {
    let f   = |x: f64| if x > 0.9 { f64::NAN } else { x - 0.5 };
    let rep = bisection(f, 0.0, 1.0, BisectionCfg::new());
    assert!(matches!(rep.error, Some(RootFindingError::Expression(_))));
    assert_eq!(rep.root, None);
}

#[test]
fn invalid_settings_are_rejected() {
    assert!(matches!(
        BisectionCfg::new().set_tolerance(0.0),
        Err(RootFindingError::InvalidTolerance { .. })
    ));
    assert!(matches!(
        BisectionCfg::new().set_tolerance(f64::NAN),
        Err(RootFindingError::InvalidTolerance { .. })
    ));
    assert!(matches!(
        BisectionCfg::new().set_max_iter(0),
        Err(RootFindingError::InvalidMaxIter { got: 0 })
    ));
}

proptest! {
    #[test]
    fn bracket_always_contains_the_root(
        r in -10.0f64..10.0,
        left in 0.1f64..10.0,
        right in 0.1f64..10.0,
    ) {
        let tol = 1e-6;
        let (a, b) = (r - left, r + right);
        let cfg = BisectionCfg::new().set_tolerance(tol).unwrap();

        let rep = bisection(move |x: f64| x - r, a, b, cfg);
        let root = rep.outcome().unwrap();

        for rec in rep.trace.iter() {
            if let IterationRecord::Bracket { a, b, .. } = *rec {
                prop_assert!(a <= r && r <= b);
            }
        }
        prop_assert!((root - r).abs() < 2.0 * tol);

        let bound = ((b - a) / tol).log2().ceil() as usize;
        prop_assert!(rep.iterations <= bound);
    }
}

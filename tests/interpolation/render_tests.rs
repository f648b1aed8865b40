use tributary::interpolation::errors::InterpolationError;
use tributary::interpolation::lagrange::LagrangePolynomial;
use tributary::interpolation::newton::NewtonPolynomial;
use tributary::interpolation::{fit_and_evaluate, Algorithm, Interpolator};

type TestResult = Result<(), InterpolationError>;

#[test]
fn newton_form_of_squares() -> TestResult {
    let poly = NewtonPolynomial::fit(&[1.0, 2.0, 3.0, 4.0], &[1.0, 4.0, 9.0, 16.0])?;
    assert_eq!(
        poly.to_polynomial_string(),
        "1.0000 + 3.0000*(x - 1) + 1.0000*(x - 1)*(x - 2) + 0.0000*(x - 1)*(x - 2)*(x - 3)"
    );
    Ok(())
}

#[test]
fn lagrange_form_uses_signed_weights() -> TestResult {
    let poly = LagrangePolynomial::fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])?;
    assert_eq!(
        poly.to_polynomial_string(),
        "0.0000*(x - 1)*(x - 2) - 1.0000*(x - 0)*(x - 2) + 2.0000*(x - 0)*(x - 1)"
    );
    Ok(())
}

#[test]
fn negative_nodes_and_leading_sign() -> TestResult {
    let poly = NewtonPolynomial::fit(&[-1.0, 2.0], &[0.0, 3.0])?;
    assert_eq!(poly.to_polynomial_string(), "0.0000 + 1.0000*(x + 1)");

    let poly = NewtonPolynomial::fit(&[0.5, 1.5], &[-2.5, 0.0])?;
    assert_eq!(poly.to_polynomial_string(), "-2.5000 + 2.5000*(x - 0.5)");
    Ok(())
}

#[test]
fn fit_and_evaluate_both_methods() -> TestResult {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [1.0, 4.0, 9.0, 16.0];

    let (newton, newton_str)     = fit_and_evaluate(Algorithm::Newton, &x, &y, 2.5)?;
    let (lagrange, lagrange_str) = fit_and_evaluate(Algorithm::Lagrange, &x, &y, 2.5)?;

    assert!((newton - lagrange).abs() < 1e-9);
    assert!(newton_str.starts_with("1.0000 + 3.0000*(x - 1)"));
    assert!(lagrange_str.contains("*(x - 2)*(x - 3)*(x - 4)"));
    Ok(())
}

#[test]
fn fit_and_evaluate_propagates_errors() {
    assert_eq!(
        fit_and_evaluate(Algorithm::Lagrange, &[1.0, 1.0], &[0.0, 1.0], 0.5),
        Err(InterpolationError::DegenerateSample { x1: 1.0, x2: 1.0 })
    );
    assert_eq!(
        fit_and_evaluate(Algorithm::Newton, &[0.0, 1.0], &[0.0, 1.0], f64::NAN)
            .map_err(|e| matches!(e, InterpolationError::NonFiniteQuery { .. })),
        Err(true)
    );
}

#[test]
fn small_scale_nodes_are_distinct() -> TestResult {
    let x = [1e-13, 3e-13];
    let y = [1.0, 2.0];

    for method in [Algorithm::Newton, Algorithm::Lagrange] {
        let (value, _) = fit_and_evaluate(method, &x, &y, 2e-13)?;
        assert!((value - 1.5).abs() < 1e-9, "{method:?}: {value}");
    }

    assert_eq!(
        fit_and_evaluate(Algorithm::Newton, &[0.0, -0.0], &y, 0.0),
        Err(InterpolationError::DegenerateSample { x1: 0.0, x2: -0.0 })
    );
    Ok(())
}

use tributary::expression::{Expression, ExpressionError};

type TestResult = Result<(), ExpressionError>;

#[test]
fn keeps_source_text() -> TestResult {
    let expr = Expression::parse("x**2 - 2")?;
    assert_eq!(expr.source(), "x**2 - 2");
    assert_eq!(expr.to_string(), "x**2 - 2");
    Ok(())
}

#[test]
fn parses_via_from_str() -> TestResult {
    let expr: Expression = "sin(x) + cos(x)".parse()?;
    assert_eq!(expr.eval(0.0)?, 1.0);
    Ok(())
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(Expression::parse(""), Err(ExpressionError::Empty)));
    assert!(matches!(Expression::parse("   "), Err(ExpressionError::Empty)));
}

#[test]
fn unknown_identifier_is_rejected_at_compile_time() {
    let err = Expression::parse("x + y").unwrap_err();
    assert_eq!(err, ExpressionError::UnknownIdentifier { name: "y".to_string() });
}

#[test]
fn names_outside_allow_list_never_resolve() {
    for src in ["__import__(x)", "open(x)", "eval(x)", "exit(0)"] {
        assert!(
            matches!(Expression::parse(src), Err(ExpressionError::UnknownFunction { .. })),
            "{src} should not compile"
        );
    }
    assert!(matches!(
        Expression::parse("os + x"),
        Err(ExpressionError::UnknownIdentifier { .. })
    ));
}

#[test]
fn wrong_arity_reports_counts() {
    let err = Expression::parse("sin(x, 2)").unwrap_err();
    assert_eq!(
        err,
        ExpressionError::WrongArity { name: "sin".to_string(), expected: 1, got: 2 }
    );

    let err = Expression::parse("pow(x)").unwrap_err();
    assert_eq!(
        err,
        ExpressionError::WrongArity { name: "pow".to_string(), expected: 2, got: 1 }
    );
}

#[test]
fn unbalanced_parentheses() {
    assert!(matches!(Expression::parse("(x + 1"), Err(ExpressionError::MismatchedParen)));
    assert!(matches!(Expression::parse("x + 1)"), Err(ExpressionError::MismatchedParen)));
}

#[test]
fn comma_only_separates_call_arguments() -> TestResult {
    for src in ["pow((x, 2))", "sin((1, 2))", "(x, 2)", "x, 2"] {
        let err = Expression::parse(src).unwrap_err();
        assert!(
            matches!(err, ExpressionError::Malformed { .. } | ExpressionError::MismatchedParen),
            "{src}: {err:?}"
        );
    }
    assert_eq!(Expression::parse("pow((x), 2)")?.eval(3.0)?, 9.0);
    Ok(())
}

#[test]
fn dangling_operator_is_malformed() {
    assert!(matches!(Expression::parse("x +"), Err(ExpressionError::Malformed { .. })));
    assert!(matches!(Expression::parse("x 2"), Err(ExpressionError::Malformed { .. })));
}

#[test]
fn bad_characters_and_numbers() {
    assert!(matches!(
        Expression::parse("x # 2"),
        Err(ExpressionError::UnexpectedCharacter { ch: '#', pos: 2 })
    ));
    assert!(matches!(
        Expression::parse("1.2.3 + x"),
        Err(ExpressionError::InvalidNumber { .. })
    ));
}

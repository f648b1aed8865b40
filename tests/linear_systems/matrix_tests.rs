use tributary::linear_systems::{LinearSystemError, Matrix};

type TestResult = Result<(), LinearSystemError>;

#[test]
fn from_rows_is_row_major() -> TestResult {
    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;

    assert_eq!((m.rows(), m.cols()), (2, 3));
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    assert_eq!(m[(0, 2)], 3.0);
    assert_eq!(m.get(1, 0), Some(4.0));
    assert_eq!(m.get(2, 0), None);
    assert_eq!(m.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    Ok(())
}

#[test]
fn ragged_and_empty_input() {
    let rows = vec![vec![1.0, 2.0], vec![3.0]];
    assert_eq!(
        Matrix::from_rows(&rows[..]),
        Err(LinearSystemError::RaggedRows { row: 1, expected: 2, got: 1 })
    );

    let none: Vec<Vec<f64>> = Vec::new();
    assert_eq!(Matrix::from_rows(&none[..]), Err(LinearSystemError::Empty));
}

#[test]
fn identity_is_neutral() -> TestResult {
    let a = Matrix::from_rows(&[[2.0, -1.0], [0.5, 3.0]])?;
    let i = Matrix::identity(2);

    assert_eq!(a.mul(&i)?, a);
    assert_eq!(i.mul(&a)?, a);
    assert_eq!(i.diagonal(), vec![1.0, 1.0]);
    Ok(())
}

#[test]
fn products() -> TestResult {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
    let b = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]])?;

    assert_eq!(a.mul(&b)?, Matrix::from_rows(&[[2.0, 1.0], [4.0, 3.0]])?);
    assert_eq!(a.mul_vec(&[1.0, 1.0])?, vec![3.0, 7.0]);
    assert_eq!(
        a.mul_vec(&[1.0]),
        Err(LinearSystemError::DimensionMismatch { expected: 2, got: 1 })
    );
    Ok(())
}

#[test]
fn get_mut_and_index_mut() -> TestResult {
    let mut m = Matrix::zeros(2, 2);
    m[(0, 1)] = 5.0;
    if let Some(v) = m.get_mut(1, 0) {
        *v = -1.0;
    }
    assert!(m.get_mut(2, 2).is_none());
    assert_eq!(m, Matrix::from_rows(&[[0.0, 5.0], [-1.0, 0.0]])?);
    Ok(())
}

#[test]
fn max_abs_diff_needs_equal_shapes() -> TestResult {
    let a = Matrix::from_rows(&[[1.0, 2.0]])?;
    let b = Matrix::from_rows(&[[1.5, 1.0]])?;

    assert_eq!(a.max_abs_diff(&b), Some(1.0));
    assert_eq!(a.max_abs_diff(&Matrix::zeros(2, 1)), None);
    Ok(())
}

#[test]
#[should_panic]
fn index_out_of_bounds_panics() {
    let m = Matrix::zeros(2, 2);
    let _ = m[(2, 0)];
}

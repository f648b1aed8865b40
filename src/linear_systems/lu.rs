//! Doolittle LU Decomposition
//!
//! Factors a square `A` into a unit-diagonal lower `L` and an upper `U` with
//! `A = L·U`, without row exchanges. For `i = 0..n`:
//!
//! ```text
//! U[i][j] = A[i][j] - Σ_{k<i} L[i][k] U[k][j]              j >= i
//! L[j][i] = (A[j][i] - Σ_{k<i} L[j][k] U[k][i]) / U[i][i]   j >  i
//! ```
//!
//! A zero pivot `U[i][i]` is a hard failure. Near-zero pivots are accepted
//! as they are.


use super::errors::LinearSystemError;
use super::matrix::Matrix;
use super::report::LuSolution;
use tracing::{debug, trace, warn};


/// `L` and `U` such that `A = L·U`.
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors {
    pub l: Matrix,
    pub u: Matrix,
}

impl LuFactors {
    pub fn dim(&self) -> usize { self.u.rows() }

    /// Solves `A·x = b`: forward substitution for `L·y = b`, then back
    /// substitution for `U·x = y`.
    pub fn solve(&self, b: &[f64]) -> Result<Vec<f64>, LinearSystemError> {
        let n = self.dim();
        if b.len() != n {
            return Err(LinearSystemError::DimensionMismatch { expected: n, got: b.len() });
        }

        let mut y = vec![0.0; n];
        for i in 0..n {
            let s: f64 = (0..i).map(|k| self.l[(i, k)] * y[k]).sum();
            y[i] = b[i] - s;
        }

        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let s: f64 = (i + 1..n).map(|k| self.u[(i, k)] * x[k]).sum();
            x[i] = (y[i] - s) / self.u[(i, i)];
        }

        Ok(x)
    }

    /// `det(A) = Π U[i][i]`.
    pub fn determinant(&self) -> f64 {
        self.u.diagonal().iter().product()
    }
}


/// Factors `a` with Doolittle's scheme.
///
/// # Errors
/// - [`LinearSystemError::Empty`]
/// - [`LinearSystemError::DimensionMismatch`] if `a` is not square
/// - [`LinearSystemError::SingularMatrix`] on the first zero pivot
pub fn lu_decompose(a: &Matrix) -> Result<LuFactors, LinearSystemError> {
    let n = a.rows();
    if n == 0 {
        return Err(LinearSystemError::Empty);
    }
    if !a.is_square() {
        return Err(LinearSystemError::DimensionMismatch { expected: n, got: a.cols() });
    }

    let mut l = Matrix::zeros(n, n);
    let mut u = Matrix::zeros(n, n);

    for i in 0..n {
        for j in i..n {
            let s: f64 = (0..i).map(|k| l[(i, k)] * u[(k, j)]).sum();
            u[(i, j)] = a[(i, j)] - s;
        }

        let pivot = u[(i, i)];
        if pivot == 0.0 {
            warn!(pivot = i, "zero pivot in lu decomposition");
            return Err(LinearSystemError::SingularMatrix { pivot: i });
        }
        trace!(row = i, pivot, "lu pivot");

        l[(i, i)] = 1.0;
        for j in (i + 1)..n {
            let s: f64 = (0..i).map(|k| l[(j, k)] * u[(k, i)]).sum();
            l[(j, i)] = (a[(j, i)] - s) / pivot;
        }
    }

    Ok(LuFactors { l, u })
}


/// Factors `a` and solves `a·x = b`.
///
/// # Example
/// ```
/// use tributary::linear_systems::{lu_solve, Matrix};
///
/// let a = Matrix::from_rows(&[[2.0, 1.0], [4.0, 3.0]]).unwrap();
/// let sol = lu_solve(&a, &[3.0, 7.0]).unwrap();
/// assert!((sol.solution[0] - 1.0).abs() < 1e-12);
/// assert!((sol.solution[1] - 1.0).abs() < 1e-12);
/// ```
pub fn lu_solve(a: &Matrix, b: &[f64]) -> Result<LuSolution, LinearSystemError> {
    if b.len() != a.rows() {
        return Err(LinearSystemError::DimensionMismatch { expected: a.rows(), got: b.len() });
    }

    let factors  = lu_decompose(a)?;
    let solution = factors.solve(b)?;
    debug!(n = factors.dim(), ?solution, "lu solve");

    let LuFactors { l, u } = factors;
    Ok(LuSolution { solution, l, u })
}

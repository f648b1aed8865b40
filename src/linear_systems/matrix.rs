//! Dense row-major matrix of `f64`.
//!
//! [`Matrix`] has a fixed `rows × cols` shape chosen at construction.
//! ├ [`Matrix::get`] / [`Matrix::get_mut`] : bounds-checked access
//! └ `m[(i, j)]`                           : panics when out of bounds
//!
//! Only what the solvers and their tests need is provided.

use super::errors::LinearSystemError;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0.0; rows * cols] }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    /// - [`LinearSystemError::Empty`] if there are no rows or the first row is empty
    /// - [`LinearSystemError::RaggedRows`] if a row differs in length from the first
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, LinearSystemError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if cols == 0 {
            return Err(LinearSystemError::Empty);
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != cols {
                return Err(LinearSystemError::RaggedRows { row, expected: cols, got: r.len() });
            }
            data.extend_from_slice(r);
        }

        Ok(Self { rows: rows.len(), cols, data })
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn is_square(&self) -> bool { self.rows == self.cols }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.rows && j < self.cols).then(|| self.data[i * self.cols + j])
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut f64> {
        if i < self.rows && j < self.cols {
            Some(&mut self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i` as a slice. Panics when `i >= rows`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.rows.min(self.cols)).map(|i| self[(i, i)]).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Matrix product `self · rhs`.
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix, LinearSystemError> {
        if self.cols != rhs.rows {
            return Err(LinearSystemError::DimensionMismatch { expected: self.cols, got: rhs.rows });
        }

        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let aik = self[(i, k)];
                for j in 0..rhs.cols {
                    out[(i, j)] += aik * rhs[(k, j)];
                }
            }
        }
        Ok(out)
    }

    /// Matrix-vector product `self · v`.
    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>, LinearSystemError> {
        if self.cols != v.len() {
            return Err(LinearSystemError::DimensionMismatch { expected: self.cols, got: v.len() });
        }

        Ok((0..self.rows)
            .map(|i| self.row(i).iter().zip(v).map(|(a, x)| a * x).sum())
            .collect())
    }

    /// Largest entry-wise `|self - other|`, or `None` when shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.rows != other.rows || self.cols != other.cols {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max),
        )
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds for {}x{} matrix", self.rows, self.cols);
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds for {}x{} matrix", self.rows, self.cols);
        &mut self.data[i * self.cols + j]
    }
}


/// `max_i |a_i - b_i|` over two equal-length vectors.
pub(crate) fn inf_norm_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0, f64::max)
}

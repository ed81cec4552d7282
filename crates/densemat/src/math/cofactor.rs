//! Determinant, minors, adjugate and inverse by cofactor expansion.
//!
//! Expansion is along the first row and recurses on freshly copied minors,
//! so the cost grows factorially with the dimension. This is meant for the
//! small matrices the rest of the crate works with.

use crate::error::{LinalgError, Result};
use crate::math::matrix::Matrix;

/// Determinants with magnitude below this are treated as singular by
/// [`Matrix::inverse`].
pub const DEFAULT_SINGULAR_EPSILON: f64 = 1e-12;

#[inline]
fn sign(k: usize) -> f64 {
    if k % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

impl Matrix {
    fn ensure_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(LinalgError::shape("square matrix", self.shape()));
        }
        Ok(())
    }

    /// Copy of `self` with `row` and `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        let (rows, cols) = self.shape();
        if row >= rows || col >= cols {
            return Err(LinalgError::IndexOutOfBounds {
                row,
                col,
                shape: self.shape(),
            });
        }
        if rows < 2 || cols < 2 {
            return Err(LinalgError::shape("at least 2x2 to take a minor", self.shape()));
        }
        let mut data = Vec::with_capacity((rows - 1) * (cols - 1));
        for r in (0..rows).filter(|&r| r != row) {
            let slice = self.row_slice(r);
            data.extend_from_slice(&slice[..col]);
            data.extend_from_slice(&slice[col + 1..]);
        }
        Matrix::from_shape_vec((rows - 1, cols - 1), data)
    }

    pub fn determinant(&self) -> Result<f64> {
        self.ensure_square()?;
        determinant_unchecked(self)
    }

    /// Signed minor `(-1)^(row+col) · det(minor(row, col))`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        self.ensure_square()?;
        if self.nrows() == 1 {
            // empty minor has determinant 1
            self.at(row, col)?;
            return Ok(1.0);
        }
        let minor = self.minor(row, col)?;
        Ok(sign(row + col) * determinant_unchecked(&minor)?)
    }

    pub fn cofactor_matrix(&self) -> Result<Matrix> {
        self.ensure_square()?;
        let n = self.nrows();
        let mut data = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                data.push(self.cofactor(row, col)?);
            }
        }
        Matrix::from_shape_vec((n, n), data)
    }

    /// Classical adjugate: the transpose of the cofactor matrix, so that
    /// `A · adj(A) = det(A) · I`.
    pub fn adjoint(&self) -> Result<Matrix> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// `adj(A) / det(A)`, rejecting matrices with `|det| < 1e-12`.
    pub fn inverse(&self) -> Result<Matrix> {
        self.inverse_with_tolerance(DEFAULT_SINGULAR_EPSILON)
    }

    pub fn inverse_with_tolerance(&self, epsilon: f64) -> Result<Matrix> {
        let det = self.determinant()?;
        if det.abs() < epsilon || !det.is_finite() {
            return Err(LinalgError::SingularMatrix { det });
        }
        if det.abs() < DEFAULT_SINGULAR_EPSILON {
            log::warn!(
                "inverting nearly singular matrix (det = {:e}, tolerance = {:e})",
                det,
                epsilon
            );
        }
        Ok(self.adjoint()?.map(|v| v / det))
    }

    /// Closed-form inverse of a 2x2 matrix.
    pub fn inverse_2x2(&self) -> Result<Matrix> {
        if self.shape() != (2, 2) {
            return Err(LinalgError::shape("2x2 matrix", self.shape()));
        }
        let (a, b, c, d) = (self[(0, 0)], self[(0, 1)], self[(1, 0)], self[(1, 1)]);
        let det = a * d - b * c;
        if det.abs() < DEFAULT_SINGULAR_EPSILON {
            return Err(LinalgError::SingularMatrix { det });
        }
        Matrix::from_values(2, 2, &[d / det, -b / det, -c / det, a / det])
    }
}

fn determinant_unchecked(m: &Matrix) -> Result<f64> {
    match m.nrows() {
        1 => Ok(m[(0, 0)]),
        2 => Ok(m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]),
        n => {
            let mut det = 0.0;
            for k in 0..n {
                let entry = m[(0, k)];
                if entry == 0.0 {
                    continue;
                }
                det += sign(k) * entry * determinant_unchecked(&m.minor(0, k)?)?;
            }
            Ok(det)
        }
    }
}

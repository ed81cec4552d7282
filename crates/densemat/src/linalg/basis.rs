//! Change of basis for linear maps and for vectors.

use crate::error::{LinalgError, Result};
use crate::math::vector::dot_scalar_f64;
use crate::math::{Matrix, Vector};

impl Matrix {
    /// Expresses the linear map `self` in the basis formed by the columns of
    /// `basis`, i.e. `basis⁻¹ · self · basis`.
    pub fn change_basis(&self, basis: &Matrix) -> Result<Matrix> {
        if !self.is_square() {
            return Err(LinalgError::shape("square matrix", self.shape()));
        }
        if basis.shape() != self.shape() {
            return Err(LinalgError::mismatch(
                "change_basis",
                self.shape(),
                basis.shape(),
            ));
        }
        basis.inverse()?.matmul(self)?.matmul(basis)
    }
}

impl Vector {
    /// Coordinates of `self` in a pairwise-perpendicular basis.
    ///
    /// Coordinate `i` is `self · b_i / ‖b_i‖²`. Two basis vectors count as
    /// perpendicular when `|b_i · b_j| ≤ epsilon · ‖b_i‖ · ‖b_j‖`.
    pub fn change_basis(&self, basis: &[Vector], epsilon: f64) -> Result<Vector> {
        if basis.len() != self.len() {
            return Err(LinalgError::mismatch(
                "change_basis",
                self.len(),
                basis.len(),
            ));
        }
        let mut norms = Vec::with_capacity(basis.len());
        for b in basis {
            self.ensure_same_len(b, "change_basis")?;
            let norm = b.norm();
            if norm == 0.0 {
                return Err(LinalgError::DegenerateVector);
            }
            norms.push(norm);
        }
        for i in 0..basis.len() {
            for j in (i + 1)..basis.len() {
                let dot = dot_scalar_f64(basis[i].as_slice(), basis[j].as_slice());
                if dot.abs() > epsilon * norms[i] * norms[j] {
                    return Err(LinalgError::NonOrthogonalBasis {
                        first: i,
                        second: j,
                    });
                }
            }
        }
        Ok(basis
            .iter()
            .map(|b| {
                dot_scalar_f64(self.as_slice(), b.as_slice())
                    / dot_scalar_f64(b.as_slice(), b.as_slice())
            })
            .collect())
    }
}

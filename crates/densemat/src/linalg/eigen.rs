use crate::error::{LinalgError, Result};
use crate::math::{Matrix, Vector};

/// An eigenvalue together with a unit eigenvector.
#[derive(Clone, Debug, PartialEq)]
pub struct EigenPair {
    pub value: f64,
    pub vector: Vector,
}

/// Real eigen-decomposition of a 2x2 matrix.
///
/// The eigenvalues solve `λ² − trace·λ + det = 0` and are returned in
/// ascending order. The discriminant is formed as `((a − d) / 2)² + b·c`
/// rather than `trace² − 4·det`, so equal or nearly equal eigenvalues do not
/// cancel into a spurious negative value. Each eigenvector solves
/// `(A − λI)x = 0`, has unit length and a positive first non-zero component.
/// When `A − λI` vanishes every vector is an eigenvector and the standard
/// basis vector matching the eigenvalue's position is returned. For a
/// defective matrix both pairs carry the same vector.
///
/// # Arguments
///
/// * `m` - A 2x2 matrix.
/// * `epsilon` - Relative size below which a row of `A − λI` counts as zero,
///   scaled by `max(1, max|a_ij|)`.
pub fn eigen_2x2(m: &Matrix, epsilon: f64) -> Result<[EigenPair; 2]> {
    if m.shape() != (2, 2) {
        return Err(LinalgError::shape("2x2 matrix", m.shape()));
    }
    let (a, b, c, d) = (m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);
    let half_gap = (a - d) / 2.0;
    let discriminant = half_gap * half_gap + b * c;
    if discriminant < 0.0 {
        return Err(LinalgError::ComplexResult {
            discriminant: 4.0 * discriminant,
        });
    }
    let mean = (a + d) / 2.0;
    let radius = discriminant.sqrt();
    let (low, high) = (mean - radius, mean + radius);

    let tolerance = epsilon * m.as_slice().iter().fold(1.0f64, |acc, v| acc.max(v.abs()));
    let first = EigenPair {
        value: low,
        vector: null_vector(m, low, tolerance, 0)?,
    };
    let second = EigenPair {
        value: high,
        vector: null_vector(m, high, tolerance, 1)?,
    };
    Ok([first, second])
}

/// Unit vector spanning the null space of `m − λI`.
fn null_vector(m: &Matrix, lambda: f64, tolerance: f64, position: usize) -> Result<Vector> {
    let rows = [
        [m[(0, 0)] - lambda, m[(0, 1)]],
        [m[(1, 0)], m[(1, 1)] - lambda],
    ];
    let norm = |r: &[f64; 2]| r[0].hypot(r[1]);
    let [p, q] = if norm(&rows[0]) >= norm(&rows[1]) {
        rows[0]
    } else {
        rows[1]
    };

    if p.hypot(q) <= tolerance {
        let mut basis = Vector::zeros(2);
        basis[position] = 1.0;
        return Ok(basis);
    }

    let v = Vector::from_vec(vec![-q, p]).normalize()?;
    let leading = v.iter().copied().find(|x| *x != 0.0).unwrap_or(1.0);
    let v = if leading < 0.0 { v.scale(-1.0) } else { v };
    // clear negative zeros
    Ok(v.map(|x| x + 0.0))
}

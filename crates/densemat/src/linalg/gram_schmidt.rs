use crate::config::Normalization;
use crate::error::{LinalgError, Result};
use crate::math::Vector;

/// Orthogonalize `vectors` in index order.
///
/// Output `i` is `v_i` with its projections on outputs `0..i` removed, and is
/// rescaled to unit length when `normalization` is
/// [`Normalization::Orthonormal`]. Projections are taken from the running
/// residual (modified Gram-Schmidt), which keeps the outputs orthogonal to
/// working precision.
///
/// # Arguments
///
/// * `vectors` - Linearly independent vectors, all of the same length.
/// * `normalization` - Whether to rescale the outputs to unit length.
/// * `epsilon` - A residual shorter than `epsilon · max(1, ‖v_i‖)` marks `v_i`
///   as dependent on the vectors before it.
///
/// # Returns
///
/// One output per input, spanning the same subspace.
pub fn gram_schmidt(
    vectors: &[Vector],
    normalization: Normalization,
    epsilon: f64,
) -> Result<Vec<Vector>> {
    let mut basis: Vec<Vector> = Vec::with_capacity(vectors.len());
    let dim = match vectors.first() {
        Some(v) => v.len(),
        None => return Ok(basis),
    };

    for (index, v) in vectors.iter().enumerate() {
        if v.len() != dim {
            return Err(LinalgError::mismatch("gram_schmidt", dim, v.len()));
        }
        let mut residual = v.clone();
        for u in &basis {
            let projection = residual.vector_projection(u)?;
            residual = residual.subtract(&projection)?;
        }
        if residual.norm() <= epsilon * v.norm().max(1.0) {
            return Err(LinalgError::LinearlyDependent { index });
        }
        log::trace!(
            "gram_schmidt: vector {} residual norm {:.3e}",
            index,
            residual.norm()
        );
        basis.push(match normalization {
            Normalization::Orthonormal => residual.normalize()?,
            Normalization::Orthogonal => residual,
        });
    }

    Ok(basis)
}

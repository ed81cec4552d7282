use crate::config::PageRankConfig;
use crate::error::{LinalgError, Result};
use crate::math::{Matrix, Vector};

/// Stationary distribution found by [`pagerank`].
#[derive(Clone, Debug, PartialEq)]
pub struct PageRank {
    /// Probability of ending up on each page; non-negative, sums to one.
    pub ranks: Vector,
    /// Power iterations performed before the change fell below tolerance.
    pub iterations: usize,
}

/// Rank `pages` pages by power iteration over a row-stochastic link matrix.
///
/// Entry `(i, j)` of `link` is the probability of following a link from page
/// `i` to page `j`, so each row must be non-negative and sum to one. Starting
/// from the uniform distribution, each step computes
/// `r ← d · linkᵀ · r + (1 − d) / n` where `d` is the configured damping.
/// Without damping (`d = 1`) the lazy chain `r ← (r + linkᵀ · r) / 2` is
/// iterated instead. It has the same stationary distribution and is
/// aperiodic, so periodic link structures converge too. Iteration stops once
/// the L1 change between steps drops below `config.tolerance`.
///
/// # Arguments
///
/// * `link` - Square row-stochastic link matrix.
/// * `pages` - Number of pages, which must match the size of `link`.
/// * `config` - Tolerance, iteration budget and damping.
///
/// # Returns
///
/// The converged ranks, or [`LinalgError::NoConvergence`] once
/// `config.max_iterations` steps have been spent.
pub fn pagerank(link: &Matrix, pages: usize, config: &PageRankConfig) -> Result<PageRank> {
    config.validate()?;
    if !link.is_square() {
        return Err(LinalgError::shape("square link matrix", link.shape()));
    }
    if link.nrows() != pages {
        return Err(LinalgError::mismatch("pagerank", pages, link.nrows()));
    }
    check_row_stochastic(link, config.stochastic_tolerance)?;

    let n = pages as f64;
    let teleport = (1.0 - config.damping) / n;
    let transition = link.transpose();
    let mut ranks = Vector::filled(pages, 1.0 / n);

    for iteration in 1..=config.max_iterations {
        let spread = ranks.apply_matrix(&transition)?;
        let next = if config.damping < 1.0 {
            spread.map(|r| config.damping * r + teleport)
        } else {
            spread.add(&ranks)?.scale(0.5)
        };
        let delta: f64 = next
            .iter()
            .zip(ranks.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        ranks = next;
        log::trace!("pagerank iteration {}: delta {:.3e}", iteration, delta);

        if delta < config.tolerance {
            log::debug!(
                "pagerank converged after {} iterations (delta {:.3e})",
                iteration,
                delta
            );
            let total: f64 = ranks.iter().sum();
            return Ok(PageRank {
                ranks: ranks.scale(1.0 / total),
                iterations: iteration,
            });
        }
    }

    Err(LinalgError::NoConvergence {
        iterations: config.max_iterations,
    })
}

fn check_row_stochastic(link: &Matrix, tolerance: f64) -> Result<()> {
    for row in 0..link.nrows() {
        let values = link.row_slice(row);
        let sum: f64 = values.iter().sum();
        if values.iter().any(|v| *v < 0.0 || !v.is_finite()) || (sum - 1.0).abs() > tolerance {
            return Err(LinalgError::NotStochastic { row, sum });
        }
    }
    Ok(())
}

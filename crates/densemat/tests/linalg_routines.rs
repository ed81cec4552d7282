//! Integration tests for Gram-Schmidt, 2x2 eigen-decomposition, PageRank,
//! Einstein summation and change of basis.

use densemat::config::{Normalization, PageRankConfig};
use densemat::linalg::{contract, eigen_2x2, einsum, gram_schmidt, pagerank};
use densemat::math::{Matrix, Vector};
use densemat::LinalgError;

const EPS: f64 = 1e-12;

fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() < tol, "{} != {} (tol {})", a, b, tol);
}

fn assert_matrix_close(a: &Matrix, b: &Matrix, tol: f64) {
    assert_eq!(a.shape(), b.shape());
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        assert_close(*x, *y, tol);
    }
}

fn vecs(rows: &[&[f64]]) -> Vec<Vector> {
    rows.iter().map(|r| Vector::from_vec(r.to_vec())).collect()
}

// ---------------------------------------------------------------------------
// Gram-Schmidt
// ---------------------------------------------------------------------------

#[test]
fn gram_schmidt_outputs_are_orthonormal() {
    let input = vecs(&[&[1.0, 1.0, 1.0], &[2.0, 1.0, 0.0], &[5.0, -1.0, 2.0]]);
    let out = gram_schmidt(&input, Normalization::Orthonormal, EPS).unwrap();
    assert_eq!(out.len(), input.len());
    for i in 0..out.len() {
        assert_close(out[i].norm(), 1.0, 1e-12);
        for j in (i + 1)..out.len() {
            assert_close(out[i].dot(&out[j]).unwrap(), 0.0, 1e-12);
        }
    }
}

#[test]
fn gram_schmidt_spans_the_input() {
    let input = vecs(&[&[3.0, 1.0, 0.0], &[2.0, 2.0, 1.0], &[0.0, 1.0, 4.0]]);
    let out = gram_schmidt(&input, Normalization::Orthonormal, EPS).unwrap();
    // every input is recovered from its coordinates in the orthonormal output
    for v in &input {
        let mut rebuilt = Vector::zeros(3);
        for u in &out {
            rebuilt = rebuilt.add(&u.scale(v.dot(u).unwrap())).unwrap();
        }
        for (a, b) in rebuilt.iter().zip(v.iter()) {
            assert_close(*a, *b, 1e-12);
        }
    }
}

#[test]
fn gram_schmidt_first_vector_direction_is_kept() {
    let input = vecs(&[&[3.0, 4.0], &[1.0, 0.0]]);
    let orthogonal = gram_schmidt(&input, Normalization::Orthogonal, EPS).unwrap();
    assert_eq!(orthogonal[0], input[0]);
    assert_close(orthogonal[0].dot(&orthogonal[1]).unwrap(), 0.0, 1e-12);

    let orthonormal = gram_schmidt(&input, Normalization::Orthonormal, EPS).unwrap();
    assert_close(orthonormal[0][0], 0.6, 1e-12);
    assert_close(orthonormal[0][1], 0.8, 1e-12);
}

#[test]
fn gram_schmidt_detects_dependence() {
    let input = vecs(&[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[2.0, -3.0, 0.0]]);
    assert_eq!(
        gram_schmidt(&input, Normalization::Orthonormal, 1e-9),
        Err(LinalgError::LinearlyDependent { index: 2 })
    );
    let with_zero = vecs(&[&[0.0, 0.0], &[1.0, 0.0]]);
    assert_eq!(
        gram_schmidt(&with_zero, Normalization::Orthonormal, EPS),
        Err(LinalgError::LinearlyDependent { index: 0 })
    );
}

#[test]
fn gram_schmidt_empty_and_mismatched() {
    assert!(gram_schmidt(&[], Normalization::Orthonormal, EPS)
        .unwrap()
        .is_empty());
    let ragged = vecs(&[&[1.0, 0.0], &[0.0, 1.0, 0.0]]);
    assert!(matches!(
        gram_schmidt(&ragged, Normalization::Orthonormal, EPS),
        Err(LinalgError::DimensionMismatch { .. })
    ));
}

// ---------------------------------------------------------------------------
// Eigen 2x2
// ---------------------------------------------------------------------------

#[test]
fn eigen_of_diagonal_matrix() {
    let m = Matrix::from_values(2, 2, &[2.0, 0.0, 0.0, 3.0]).unwrap();
    let [a, b] = eigen_2x2(&m, EPS).unwrap();
    assert_eq!(a.value, 2.0);
    assert_eq!(b.value, 3.0);
    assert_eq!(a.vector.to_vec(), vec![1.0, 0.0]);
    assert_eq!(b.vector.to_vec(), vec![0.0, 1.0]);
}

#[test]
fn eigen_vectors_satisfy_definition() {
    let m = Matrix::from_values(2, 2, &[2.0, 1.0, 1.0, 2.0]).unwrap();
    let pairs = eigen_2x2(&m, EPS).unwrap();
    assert_close(pairs[0].value, 1.0, 1e-12);
    assert_close(pairs[1].value, 3.0, 1e-12);
    for pair in pairs.iter() {
        let mv = pair.vector.apply_matrix(&m).unwrap();
        let lv = pair.vector.scale(pair.value);
        for (x, y) in mv.iter().zip(lv.iter()) {
            assert_close(*x, *y, 1e-12);
        }
        assert_close(pair.vector.norm(), 1.0, 1e-12);
    }
}

#[test]
fn eigen_of_non_symmetric_matrix() {
    let m = Matrix::from_values(2, 2, &[4.0, 1.0, 2.0, 3.0]).unwrap();
    let pairs = eigen_2x2(&m, EPS).unwrap();
    assert_close(pairs[0].value, 2.0, 1e-12);
    assert_close(pairs[1].value, 5.0, 1e-12);
    for pair in pairs.iter() {
        let mv = pair.vector.apply_matrix(&m).unwrap();
        let lv = pair.vector.scale(pair.value);
        for (x, y) in mv.iter().zip(lv.iter()) {
            assert_close(*x, *y, 1e-12);
        }
    }
}

#[test]
fn eigen_of_scaled_identity_returns_standard_basis() {
    let m = Matrix::identity(2).unwrap().scale(5.0);
    let [a, b] = eigen_2x2(&m, EPS).unwrap();
    assert_eq!(a.value, 5.0);
    assert_eq!(b.value, 5.0);
    assert_eq!(a.vector.to_vec(), vec![1.0, 0.0]);
    assert_eq!(b.vector.to_vec(), vec![0.0, 1.0]);
}

#[test]
fn eigen_of_repeated_inexact_diagonal_is_real() {
    let m = Matrix::from_values(2, 2, &[0.185, 0.0, 0.0, 0.185]).unwrap();
    let [a, b] = eigen_2x2(&m, EPS).unwrap();
    assert_eq!(a.value, 0.185);
    assert_eq!(b.value, 0.185);
    assert_eq!(a.vector.to_vec(), vec![1.0, 0.0]);
    assert_eq!(b.vector.to_vec(), vec![0.0, 1.0]);
}

#[test]
fn eigen_of_repeated_diagonals_never_turns_complex() {
    for k in 1..=2000 {
        let x = 0.037 * k as f64;
        let m = Matrix::from_values(2, 2, &[x, 0.0, 0.0, x]).unwrap();
        let [a, b] = eigen_2x2(&m, EPS).unwrap();
        assert_eq!(a.value, x);
        assert_eq!(b.value, x);
    }
}

#[test]
fn eigen_of_nearly_repeated_non_symmetric_matrix() {
    for k in 1..=2000 {
        let x = 0.037 * k as f64;
        let m = Matrix::from_values(2, 2, &[x, 1e-9, 0.0, x + 1e-9]).unwrap();
        let pairs = eigen_2x2(&m, EPS).unwrap();
        let scale = x.max(1.0);
        assert!(pairs[0].value <= pairs[1].value);
        assert_close(pairs[0].value, x, 1e-12 * scale);
        assert_close(pairs[1].value, x + 1e-9, 1e-12 * scale);
        for pair in pairs.iter() {
            assert_close(pair.vector.norm(), 1.0, 1e-12);
            let mv = pair.vector.apply_matrix(&m).unwrap();
            let lv = pair.vector.scale(pair.value);
            for (u, v) in mv.iter().zip(lv.iter()) {
                assert_close(*u, *v, 1e-9 * scale);
            }
        }
    }
}

#[test]
fn eigen_of_rotation_is_complex() {
    let m = Matrix::from_values(2, 2, &[0.0, -1.0, 1.0, 0.0]).unwrap();
    assert!(matches!(
        eigen_2x2(&m, EPS),
        Err(LinalgError::ComplexResult { .. })
    ));
}

#[test]
fn eigen_requires_two_by_two() {
    let m = Matrix::identity(3).unwrap();
    assert!(matches!(eigen_2x2(&m, EPS), Err(LinalgError::InvalidShape { .. })));
}

// ---------------------------------------------------------------------------
// PageRank
// ---------------------------------------------------------------------------

#[test]
fn pagerank_finds_stationary_distribution() {
    let link = Matrix::from_values(3, 3, &[0.0, 0.5, 0.5, 1.0, 0.0, 0.0, 0.5, 0.5, 0.0]).unwrap();
    let result = pagerank(&link, 3, &PageRankConfig::default()).unwrap();
    assert_close(result.ranks[0], 4.0 / 9.0, 1e-8);
    assert_close(result.ranks[1], 3.0 / 9.0, 1e-8);
    assert_close(result.ranks[2], 2.0 / 9.0, 1e-8);
    assert!(result.iterations > 1);
}

#[test]
fn pagerank_ranks_are_probabilities() {
    let link = Matrix::from_values(
        4,
        4,
        &[
            0.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, //
            0.5, 0.0, 0.0, 0.5, //
            0.0, 0.0, 0.0, 1.0, //
            0.0, 0.5, 0.5, 0.0,
        ],
    )
    .unwrap();
    let result = pagerank(&link, 4, &PageRankConfig::default()).unwrap();
    let total: f64 = result.ranks.iter().sum();
    assert_close(total, 1.0, 1e-12);
    assert!(result.ranks.iter().all(|r| *r >= 0.0));
}

#[test]
fn pagerank_of_cycle_is_uniform() {
    let link = Matrix::from_values(3, 3, &[0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0]).unwrap();
    let config = PageRankConfig {
        damping: 0.85,
        ..PageRankConfig::default()
    };
    let result = pagerank(&link, 3, &config).unwrap();
    for r in result.ranks.iter() {
        assert_close(*r, 1.0 / 3.0, 1e-12);
    }
    assert_eq!(result.iterations, 1);
}

#[test]
fn pagerank_of_periodic_chain_converges_without_damping() {
    // page 0 links to 1 and 2, both of which link back: period two
    let link = Matrix::from_values(3, 3, &[0.0, 0.5, 0.5, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
    let result = pagerank(&link, 3, &PageRankConfig::default()).unwrap();
    assert_close(result.ranks[0], 0.5, 1e-8);
    assert_close(result.ranks[1], 0.25, 1e-8);
    assert_close(result.ranks[2], 0.25, 1e-8);
}

#[test]
fn pagerank_of_bipartite_path_converges_without_damping() {
    let link = Matrix::from_values(
        4,
        4,
        &[
            0.0, 1.0, 0.0, 0.0, //
            0.5, 0.0, 0.5, 0.0, //
            0.0, 0.5, 0.0, 0.5, //
            0.0, 0.0, 1.0, 0.0,
        ],
    )
    .unwrap();
    let result = pagerank(&link, 4, &PageRankConfig::default()).unwrap();
    let expected = [1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0];
    for (r, e) in result.ranks.iter().zip(expected.iter()) {
        assert_close(*r, *e, 1e-8);
    }
    let total: f64 = result.ranks.iter().sum();
    assert_close(total, 1.0, 1e-12);
}

#[test]
fn pagerank_reports_exhausted_budget() {
    let link = Matrix::from_values(3, 3, &[0.0, 0.5, 0.5, 1.0, 0.0, 0.0, 0.5, 0.5, 0.0]).unwrap();
    let config = PageRankConfig {
        max_iterations: 1,
        ..PageRankConfig::default()
    };
    assert_eq!(
        pagerank(&link, 3, &config),
        Err(LinalgError::NoConvergence { iterations: 1 })
    );
}

#[test]
fn pagerank_rejects_invalid_link_matrix() {
    let not_stochastic = Matrix::from_values(2, 2, &[0.5, 0.4, 0.0, 1.0]).unwrap();
    assert!(matches!(
        pagerank(&not_stochastic, 2, &PageRankConfig::default()),
        Err(LinalgError::NotStochastic { row: 0, .. })
    ));

    let negative = Matrix::from_values(2, 2, &[1.5, -0.5, 0.0, 1.0]).unwrap();
    assert!(matches!(
        pagerank(&negative, 2, &PageRankConfig::default()),
        Err(LinalgError::NotStochastic { row: 0, .. })
    ));

    let rect = Matrix::from_values(1, 2, &[0.5, 0.5]).unwrap();
    assert!(matches!(
        pagerank(&rect, 1, &PageRankConfig::default()),
        Err(LinalgError::InvalidShape { .. })
    ));

    let link = Matrix::identity(2).unwrap();
    assert!(matches!(
        pagerank(&link, 3, &PageRankConfig::default()),
        Err(LinalgError::DimensionMismatch { .. })
    ));
}

#[test]
fn pagerank_rejects_invalid_config() {
    let link = Matrix::identity(2).unwrap();
    let config = PageRankConfig {
        damping: 0.0,
        ..PageRankConfig::default()
    };
    assert!(matches!(
        pagerank(&link, 2, &config),
        Err(LinalgError::InvalidConfig(_))
    ));
}

// ---------------------------------------------------------------------------
// Einstein summation
// ---------------------------------------------------------------------------

fn sample_pair() -> (Matrix, Matrix) {
    let a = Matrix::from_values(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let b = Matrix::from_values(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
    (a, b)
}

#[test]
fn einsum_matrix_product() {
    let (a, b) = sample_pair();
    let expected = a.matmul(&b).unwrap();
    assert_eq!(einsum("ij,jk->ik", &a, &b).unwrap(), expected);
    assert_eq!(einsum("ij,jk", &a, &b).unwrap(), expected);
    assert_eq!(contract(&a, &b).unwrap(), expected);
}

#[test]
fn einsum_transposed_output() {
    let (a, b) = sample_pair();
    let expected = a.matmul(&b).unwrap().transpose();
    assert_eq!(einsum("ij,jk->ki", &a, &b).unwrap(), expected);
}

#[test]
fn einsum_against_transposed_operand() {
    let (a, _) = sample_pair();
    let expected = a.matmul(&a.transpose()).unwrap();
    assert_eq!(einsum("ij,kj->ik", &a, &a).unwrap(), expected);
}

#[test]
fn einsum_scalar_results() {
    let (a, _) = sample_pair();
    let frob = einsum("ij,ij->", &a, &a).unwrap();
    assert_eq!(frob.shape(), (1, 1));
    assert_eq!(frob[(0, 0)], a.frobenius_dot(&a).unwrap());

    let m = Matrix::from_values(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    let traces = einsum("ii,jj->", &m, &m).unwrap();
    assert_eq!(traces[(0, 0)], 25.0);
}

#[test]
fn einsum_single_free_index_is_column() {
    let (a, b) = sample_pair();
    let sums = einsum("ij,jk->i", &a, &b).unwrap();
    assert_eq!(sums.shape(), (2, 1));
    assert_eq!(sums.to_vec(), vec![58.0 + 64.0, 139.0 + 154.0]);
}

#[test]
fn einsum_extent_mismatch() {
    let (a, _) = sample_pair();
    assert!(matches!(
        einsum("ij,jk->ik", &a, &a),
        Err(LinalgError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        einsum("ii,jk->jk", &a, &a),
        Err(LinalgError::DimensionMismatch { .. })
    ));
}

#[test]
fn einsum_invalid_subscripts() {
    let (a, b) = sample_pair();
    for bad in ["", "ij", "ij,jk,kl->il", "ijk,jk->ik", "ij,jk->ikj", "ij,jk->iq", "12,23->13"] {
        assert!(
            matches!(einsum(bad, &a, &b), Err(LinalgError::InvalidSubscripts(_))),
            "{} should be rejected",
            bad
        );
    }
}

// ---------------------------------------------------------------------------
// Change of basis
// ---------------------------------------------------------------------------

#[test]
fn matrix_change_basis() {
    let a = Matrix::from_values(2, 2, &[2.0, 0.0, 0.0, 3.0]).unwrap();
    let basis = Matrix::from_values(2, 2, &[1.0, 1.0, 0.0, 1.0]).unwrap();
    let changed = a.change_basis(&basis).unwrap();
    let expected = Matrix::from_values(2, 2, &[2.0, -1.0, 0.0, 3.0]).unwrap();
    assert_matrix_close(&changed, &expected, 1e-12);
    assert_close(
        changed.determinant().unwrap(),
        a.determinant().unwrap(),
        1e-12,
    );
}

#[test]
fn matrix_change_basis_errors() {
    let a = Matrix::identity(2).unwrap();
    let singular = Matrix::from_values(2, 2, &[1.0, 2.0, 2.0, 4.0]).unwrap();
    assert!(matches!(
        a.change_basis(&singular),
        Err(LinalgError::SingularMatrix { .. })
    ));
    assert!(matches!(
        a.change_basis(&Matrix::identity(3).unwrap()),
        Err(LinalgError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        Matrix::zeros(2, 3).unwrap().change_basis(&a),
        Err(LinalgError::InvalidShape { .. })
    ));
}

#[test]
fn vector_change_basis() {
    let v = Vector::from_vec(vec![5.0, -1.0]);
    let basis = vecs(&[&[1.0, 1.0], &[1.0, -1.0]]);
    let coords = v.change_basis(&basis, EPS).unwrap();
    assert_eq!(coords.to_vec(), vec![2.0, 3.0]);
}

#[test]
fn vector_change_basis_errors() {
    let v = Vector::from_vec(vec![5.0, -1.0]);
    let skewed = vecs(&[&[1.0, 0.0], &[1.0, 1.0]]);
    assert_eq!(
        v.change_basis(&skewed, EPS),
        Err(LinalgError::NonOrthogonalBasis { first: 0, second: 1 })
    );
    let with_zero = vecs(&[&[1.0, 0.0], &[0.0, 0.0]]);
    assert_eq!(
        v.change_basis(&with_zero, EPS),
        Err(LinalgError::DegenerateVector)
    );
    let too_few = vecs(&[&[1.0, 0.0]]);
    assert!(matches!(
        v.change_basis(&too_few, EPS),
        Err(LinalgError::DimensionMismatch { .. })
    ));
}

use std::error::Error;

use densemat::config::SolverConfig;
use densemat::linalg::{eigen_2x2, einsum, gram_schmidt, pagerank};
use densemat::math::{Matrix, Vector};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("densemat=debug"))
        .init();
    let config = SolverConfig::default();

    let a = Matrix::from_rows(vec![
        vec![2.0, -3.0, 1.0],
        vec![2.0, 0.0, -1.0],
        vec![1.0, 4.0, 5.0],
    ])?;
    println!("A =\n{:.3}", a);
    println!("det(A) = {}", a.determinant()?);
    println!("adj(A) =\n{:.3}", a.adjoint()?);
    println!("inv(A) =\n{:.4}", a.inverse_with_tolerance(config.epsilon)?);

    let basis = gram_schmidt(
        &[
            Vector::from_vec(vec![1.0, 1.0, 0.0]),
            Vector::from_vec(vec![1.0, 0.0, 1.0]),
            Vector::from_vec(vec![0.0, 1.0, 1.0]),
        ],
        config.normalization,
        config.epsilon,
    )?;
    for (idx, v) in basis.iter().enumerate() {
        println!("e{} = {:.4}", idx, v);
    }

    let sym = Matrix::from_values(2, 2, &[2.0, 1.0, 1.0, 2.0])?;
    for pair in eigen_2x2(&sym, config.epsilon)?.iter() {
        println!("λ = {:.3}, v = {:.4}", pair.value, pair.vector);
    }

    let links = Matrix::from_rows(vec![
        vec![0.0, 0.5, 0.5],
        vec![1.0, 0.0, 0.0],
        vec![0.5, 0.5, 0.0],
    ])?;
    let ranks = pagerank(&links, links.nrows(), &config.pagerank)?;
    println!(
        "PageRank after {} iterations: {:.4}",
        ranks.iterations, ranks.ranks
    );

    let trace_of_product = einsum("ij,ji->", &a, &a.transpose())?;
    println!("tr(A·Aᵀ) = {}", trace_of_product[(0, 0)]);

    Ok(())
}

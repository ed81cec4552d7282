use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use densemat::config::SolverConfig;
use densemat::linalg::{eigen_2x2, einsum, gram_schmidt, pagerank};

use crate::input::{read_json, EinsumInput, MatrixInput, VectorsInput};
use crate::util::format_scalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Determinant,
    Inverse,
    Adjoint,
    Transpose,
    Eigen,
    PageRank,
    GramSchmidt,
    Einsum,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Determinant,
        Operation::Inverse,
        Operation::Adjoint,
        Operation::Transpose,
        Operation::Eigen,
        Operation::PageRank,
        Operation::GramSchmidt,
        Operation::Einsum,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Determinant => "det",
            Operation::Inverse => "inverse",
            Operation::Adjoint => "adjoint",
            Operation::Transpose => "transpose",
            Operation::Eigen => "eigen",
            Operation::PageRank => "pagerank",
            Operation::GramSchmidt => "gram-schmidt",
            Operation::Einsum => "einsum",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            Operation::Determinant => "Determinant by cofactor expansion",
            Operation::Inverse => "Inverse via the adjugate",
            Operation::Adjoint => "Adjugate (transposed cofactor matrix)",
            Operation::Transpose => "Transpose",
            Operation::Eigen => "Eigenvalues and unit eigenvectors of a 2x2 matrix",
            Operation::PageRank => "PageRank of a row-stochastic link matrix",
            Operation::GramSchmidt => "Orthogonalize a list of vectors",
            Operation::Einsum => "Einstein-summation contraction of two matrices",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .find(|op| op.name() == s)
            .copied()
            .ok_or_else(|| format!("Unknown operation: {}", s))
    }
}

/// Run `op` on the JSON input at `input_path` and render the result with
/// `precision` decimals.
pub fn run<P: AsRef<Path>>(
    op: Operation,
    input_path: P,
    config: &SolverConfig,
    precision: usize,
) -> Result<String> {
    let path = input_path.as_ref();
    log::debug!("[densemat] {} on {}", op, path.display());

    let output = match op {
        Operation::Determinant => {
            let input: MatrixInput = read_json(path)?;
            let det = input.matrix.determinant()?;
            format_scalar(det, precision)
        }
        Operation::Inverse => {
            let input: MatrixInput = read_json(path)?;
            let inverse = input
                .matrix
                .inverse_with_tolerance(config.epsilon)
                .context("Matrix is not invertible")?;
            format!("{:.*}", precision, inverse)
        }
        Operation::Adjoint => {
            let input: MatrixInput = read_json(path)?;
            format!("{:.*}", precision, input.matrix.adjoint()?)
        }
        Operation::Transpose => {
            let input: MatrixInput = read_json(path)?;
            format!("{:.*}", precision, input.matrix.transpose())
        }
        Operation::Eigen => {
            let input: MatrixInput = read_json(path)?;
            let pairs = eigen_2x2(&input.matrix, config.epsilon)?;
            pairs
                .iter()
                .map(|pair| {
                    format!(
                        "{}\t{:.*}",
                        format_scalar(pair.value, precision),
                        precision,
                        pair.vector
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        Operation::PageRank => {
            let input: MatrixInput = read_json(path)?;
            let pages = input.matrix.nrows();
            let result = pagerank(&input.matrix, pages, &config.pagerank)?;
            log::info!(
                "[densemat] PageRank converged after {} iterations",
                result.iterations
            );
            format!("{:.*}", precision, result.ranks)
        }
        Operation::GramSchmidt => {
            let input: VectorsInput = read_json(path)?;
            let basis = gram_schmidt(&input.vectors, config.normalization, config.epsilon)?;
            basis
                .iter()
                .map(|v| format!("{:.*}", precision, v))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Operation::Einsum => {
            let input: EinsumInput = read_json(path)?;
            let result = einsum(&input.subscripts, &input.a, &input.b)
                .with_context(|| format!("einsum `{}` failed", input.subscripts))?;
            format!("{:.*}", precision, result)
        }
    };
    Ok(output)
}

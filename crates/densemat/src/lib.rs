//! densemat: dense matrix and vector arithmetic.
//!
//! This crate provides a row-major `Matrix` and a `Vector` over `f64` with
//! elementwise arithmetic, transpose and matrix products, determinants,
//! adjugates and inverses by cofactor expansion, and a handful of small
//! linear-algebra routines (Gram-Schmidt, 2x2 eigen-decomposition,
//! Einstein summation, PageRank, change of basis).
//!
//! Every operation returns a new value. Shape problems, singular matrices
//! and non-real results are reported through [`error::LinalgError`] rather
//! than panics.
pub mod config;
pub mod error;
pub mod linalg;
pub mod math;

pub use config::{Normalization, PageRankConfig, SolverConfig};
pub use error::{LinalgError, Result};
pub use math::{Matrix, Vector};

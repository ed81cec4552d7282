//! Algorithms built on top of [`Matrix`](crate::math::Matrix) and
//! [`Vector`](crate::math::Vector).
pub mod basis;
pub mod eigen;
pub mod einsum;
pub mod gram_schmidt;
pub mod pagerank;

pub use eigen::{eigen_2x2, EigenPair};
pub use einsum::{contract, einsum};
pub use gram_schmidt::gram_schmidt;
pub use pagerank::{pagerank, PageRank};

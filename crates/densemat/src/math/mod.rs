//! Dense `Matrix` and `Vector` types and their arithmetic.
//!
//! Both types own freshly allocated storage and every operation returns a
//! new value, so results never alias their inputs.
pub mod cofactor;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use cofactor::DEFAULT_SINGULAR_EPSILON;
pub use matrix::Matrix;
pub use scalar::{quadratic, round_to, sigmoid, sigmoid_prime};
pub use vector::Vector;

use std::error::Error;
use std::fmt;

/// Errors produced by matrix, vector and solver operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand shapes are incompatible for `op`.
    DimensionMismatch {
        op: &'static str,
        expected: String,
        actual: String,
    },
    /// Inverse requested on a matrix whose determinant is (numerically) zero.
    SingularMatrix { det: f64 },
    /// Construction or operation with an unusable shape.
    InvalidShape { expected: String, actual: String },
    /// Negative discriminant, the roots are not real.
    ComplexResult { discriminant: f64 },
    IndexOutOfBounds {
        row: usize,
        col: usize,
        shape: (usize, usize),
    },
    /// A direction was requested from a zero-length vector.
    DegenerateVector,
    /// Gram-Schmidt input vector at `index` lies in the span of the earlier ones.
    LinearlyDependent { index: usize },
    NonOrthogonalBasis { first: usize, second: usize },
    /// PageRank link matrix row is negative or does not sum to one.
    NotStochastic { row: usize, sum: f64 },
    NoConvergence { iterations: usize },
    InvalidSubscripts(String),
    /// Quadratic with a zero leading coefficient.
    DegenerateEquation,
    InvalidConfig(String),
}

impl LinalgError {
    pub(crate) fn mismatch(
        op: &'static str,
        expected: impl fmt::Debug,
        actual: impl fmt::Debug,
    ) -> Self {
        LinalgError::DimensionMismatch {
            op,
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }
    }

    pub(crate) fn shape(expected: impl Into<String>, actual: impl fmt::Debug) -> Self {
        LinalgError::InvalidShape {
            expected: expected.into(),
            actual: format!("{:?}", actual),
        }
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::DimensionMismatch {
                op,
                expected,
                actual,
            } => write!(
                f,
                "dimension mismatch in {}: expected {}, got {}",
                op, expected, actual
            ),
            LinalgError::SingularMatrix { det } => {
                write!(f, "matrix is singular (determinant {:e})", det)
            }
            LinalgError::InvalidShape { expected, actual } => {
                write!(f, "invalid shape: expected {}, got {}", expected, actual)
            }
            LinalgError::ComplexResult { discriminant } => write!(
                f,
                "discriminant {} is negative, solutions are complex",
                discriminant
            ),
            LinalgError::IndexOutOfBounds { row, col, shape } => write!(
                f,
                "index ({}, {}) out of bounds for matrix of shape {:?}",
                row, col, shape
            ),
            LinalgError::DegenerateVector => write!(f, "zero vector has no direction"),
            LinalgError::LinearlyDependent { index } => write!(
                f,
                "vector {} is linearly dependent on the preceding vectors",
                index
            ),
            LinalgError::NonOrthogonalBasis { first, second } => write!(
                f,
                "basis vectors {} and {} are not perpendicular",
                first, second
            ),
            LinalgError::NotStochastic { row, sum } => write!(
                f,
                "link matrix row {} is not a probability distribution (sum {})",
                row, sum
            ),
            LinalgError::NoConvergence { iterations } => {
                write!(f, "no convergence after {} iterations", iterations)
            }
            LinalgError::InvalidSubscripts(msg) => write!(f, "invalid subscripts: {}", msg),
            LinalgError::DegenerateEquation => {
                write!(f, "leading coefficient is zero, equation is not quadratic")
            }
            LinalgError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl Error for LinalgError {}

pub type Result<T> = std::result::Result<T, LinalgError>;

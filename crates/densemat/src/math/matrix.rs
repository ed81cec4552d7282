use std::convert::TryFrom;
use std::fmt;
use std::ops::{Index, Mul, Neg};

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};
use crate::math::scalar::round_to;
use crate::math::vector::{dot_scalar_f64, Vector};

/// Dense row-major matrix of `f64`.
///
/// Every matrix has at least one row and one column, and every operation
/// returns a freshly allocated matrix rather than writing into its receiver.
/// Serializes as a list of rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(LinalgError::shape("at least one row and one column", shape));
        }
        if data.len() != rows * cols {
            return Err(LinalgError::shape(
                format!("{} values for shape ({}, {})", rows * cols, rows, cols),
                data.len(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Builds a `rows × cols` matrix from row-major `values`.
    pub fn from_values(rows: usize, cols: usize, values: &[f64]) -> Result<Self> {
        Self::from_shape_vec((rows, cols), values.to_vec())
    }

    /// Builds a matrix from a list of rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(LinalgError::shape(
                    format!("{} columns in row {}", ncols, idx),
                    row.len(),
                ));
            }
            data.extend(row);
        }
        Self::from_shape_vec((nrows, ncols), data)
    }

    pub fn from_row_vectors(vectors: &[Vector]) -> Result<Self> {
        Self::from_rows(vectors.iter().map(Vector::to_vec).collect())
    }

    /// Packs `vectors` side by side as the columns of a matrix.
    pub fn from_column_vectors(vectors: &[Vector]) -> Result<Self> {
        Ok(Self::from_row_vectors(vectors)?.transpose())
    }

    /// An `n × 1` column matrix.
    pub fn column_from(values: &[f64]) -> Result<Self> {
        Self::from_shape_vec((values.len(), 1), values.to_vec())
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self> {
        Self::from_shape_vec((rows, cols), vec![value; rows * cols])
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, 0.0)
    }

    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, 1.0)
    }

    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            let offset = m.offset(i, i);
            m.data[offset] = 1.0;
        }
        Ok(m)
    }

    /// Entries drawn uniformly from `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        let data = (0..rows * cols).map(|_| rng.gen::<f64>()).collect();
        Self::from_shape_vec((rows, cols), data)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn at(&self, row: usize, col: usize) -> Result<f64> {
        self.get(row, col).ok_or(LinalgError::IndexOutOfBounds {
            row,
            col,
            shape: self.shape(),
        })
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn row(&self, row: usize) -> Result<Vector> {
        if row >= self.rows {
            return Err(LinalgError::IndexOutOfBounds {
                row,
                col: 0,
                shape: self.shape(),
            });
        }
        Ok(Vector::from_vec(self.row_slice(row).to_vec()))
    }

    pub fn column(&self, col: usize) -> Result<Vector> {
        if col >= self.cols {
            return Err(LinalgError::IndexOutOfBounds {
                row: 0,
                col,
                shape: self.shape(),
            });
        }
        Ok((0..self.rows).map(|row| self[(row, col)]).collect())
    }

    /// Row-major copy of all entries.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    pub fn map<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn round_to_decimals(&self, decimals: i32) -> Matrix {
        self.map(|v| round_to(v, decimals))
    }

    fn zip_with<F>(&self, other: &Matrix, op: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(LinalgError::mismatch(op, self.shape(), other.shape()));
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Elementwise (Hadamard) product. See [`Matrix::matmul`] for the matrix product.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "multiply", |a, b| a * b)
    }

    /// Elementwise quotient. Division by a zero entry follows IEEE rules.
    pub fn divide(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "divide", |a, b| a / b)
    }

    pub fn scale(&self, scalar: f64) -> Matrix {
        self.map(|v| v * scalar)
    }

    pub fn add_scalar(&self, scalar: f64) -> Matrix {
        self.map(|v| v + scalar)
    }

    /// Sum of elementwise products.
    pub fn frobenius_dot(&self, other: &Matrix) -> Result<f64> {
        if self.shape() != other.shape() {
            return Err(LinalgError::mismatch(
                "frobenius_dot",
                self.shape(),
                other.shape(),
            ));
        }
        Ok(dot_scalar_f64(&self.data, &other.data))
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)]);
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix product `self · other`. Output rows are computed in parallel.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(LinalgError::mismatch(
                "matmul",
                (self.cols, other.cols),
                other.shape(),
            ));
        }
        let cols = other.cols;
        let mut data = vec![0.0; self.rows * cols];
        data.par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out_row)| {
                for (k, &a) in self.row_slice(row).iter().enumerate() {
                    for (out, &b) in out_row.iter_mut().zip(other.row_slice(k)) {
                        *out += a * b;
                    }
                }
            });
        Ok(Matrix {
            data,
            rows: self.rows,
            cols,
        })
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape()
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(value: Matrix) -> Self {
        value.to_rows()
    }
}

/// One bracketed row per line. Honors `{:.N}` precision.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, value)?,
                    None => write!(f, "{}", value)?,
                }
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if row + 1 != self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

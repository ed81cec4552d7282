use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut, Neg};
use std::slice::{Iter, IterMut};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};
use crate::math::matrix::Matrix;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<f64>) -> Self {
        Self::new(data)
    }

    pub fn filled(len: usize, value: f64) -> Self {
        Vector::from_vec(vec![value; len])
    }

    pub fn zeros(len: usize) -> Self {
        Vector::filled(len, 0.0)
    }

    pub fn ones(len: usize) -> Self {
        Vector::filled(len, 1.0)
    }

    /// Entries drawn uniformly from `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        (0..len).map(|_| rng.gen::<f64>()).collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    pub fn map<F>(&self, f: F) -> Vector
    where
        F: FnMut(&f64) -> f64,
    {
        self.data.iter().map(f).collect()
    }

    pub(crate) fn ensure_same_len(&self, other: &Vector, op: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinalgError::mismatch(op, self.len(), other.len()));
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Vector, op: &'static str, f: F) -> Result<Vector>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.ensure_same_len(other, op)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.ensure_same_len(other, "dot")?;
        Ok(dot_scalar_f64(self.as_slice(), other.as_slice()))
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        dot_scalar_f64(self.as_slice(), self.as_slice()).sqrt()
    }

    pub fn length(&self) -> f64 {
        self.norm()
    }

    pub fn normalize(&self) -> Result<Vector> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(LinalgError::DegenerateVector);
        }
        Ok(self.scale(1.0 / norm))
    }

    /// Angle in radians between `self` and `other`, in `[0, π]`.
    pub fn angle_between(&self, other: &Vector) -> Result<f64> {
        let dot = self.dot(other)?;
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return Err(LinalgError::DegenerateVector);
        }
        // rounding can push the cosine just outside [-1, 1]
        Ok((dot / denom).clamp(-1.0, 1.0).acos())
    }

    /// Signed length of the shadow of `self` on `onto`.
    pub fn scalar_projection(&self, onto: &Vector) -> Result<f64> {
        let dot = self.dot(onto)?;
        let norm = onto.norm();
        if norm == 0.0 {
            return Err(LinalgError::DegenerateVector);
        }
        Ok(dot / norm)
    }

    /// Component of `self` along `onto`.
    pub fn vector_projection(&self, onto: &Vector) -> Result<Vector> {
        let num = self.dot(onto)?;
        let denom = dot_scalar_f64(onto.as_slice(), onto.as_slice());
        if denom == 0.0 {
            return Err(LinalgError::DegenerateVector);
        }
        Ok(onto.scale(num / denom))
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// `self + v_0 + v_1 + ...`
    pub fn add_many(&self, vectors: &[Vector]) -> Result<Vector> {
        vectors.iter().try_fold(self.clone(), |acc, v| acc.add(v))
    }

    /// `self - v_0 - v_1 - ...`
    pub fn subtract_many(&self, vectors: &[Vector]) -> Result<Vector> {
        vectors.iter().try_fold(self.clone(), |acc, v| acc.subtract(v))
    }

    pub fn scale(&self, scalar: f64) -> Vector {
        self.map(|v| v * scalar)
    }

    pub fn add_scalar(&self, scalar: f64) -> Vector {
        self.map(|v| v + scalar)
    }

    /// Matrix-vector product `M · self`.
    pub fn apply_matrix(&self, matrix: &Matrix) -> Result<Vector> {
        if matrix.ncols() != self.len() {
            return Err(LinalgError::mismatch(
                "apply_matrix",
                (matrix.nrows(), self.len()),
                matrix.shape(),
            ));
        }
        Ok((0..matrix.nrows())
            .map(|row| dot_scalar_f64(matrix.row_slice(row), self.as_slice()))
            .collect())
    }

    /// Bilinear form `uᵀ · M · v`.
    pub fn inner_product(matrix: &Matrix, u: &Vector, v: &Vector) -> Result<f64> {
        let mv = v.apply_matrix(matrix)?;
        u.dot(&mv)
    }
}

pub(crate) fn dot_scalar_f64(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::from_vec(value)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            match f.precision() {
                Some(p) => write!(f, "{:.*}", p, value)?,
                None => write!(f, "{}", value)?,
            }
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

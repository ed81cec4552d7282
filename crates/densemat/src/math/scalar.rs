//! Scalar helpers shared by the matrix and solver code.

use crate::error::{LinalgError, Result};

/// Real roots of `a·x² + b·x + c = 0`, larger root first.
///
/// Fails with [`LinalgError::ComplexResult`] when the discriminant is
/// negative and [`LinalgError::DegenerateEquation`] when `a` is zero.
pub fn quadratic(a: f64, b: f64, c: f64) -> Result<(f64, f64)> {
    if a == 0.0 {
        return Err(LinalgError::DegenerateEquation);
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Err(LinalgError::ComplexResult { discriminant });
    }
    let sqrt_disc = discriminant.sqrt();
    let x1 = (-b + sqrt_disc) / (2.0 * a);
    let x2 = (-b - sqrt_disc) / (2.0 * a);
    if x1 >= x2 {
        Ok((x1, x2))
    } else {
        Ok((x2, x1))
    }
}

/// Rounds `number` to `decimals` places after the point.
pub fn round_to(number: f64, decimals: i32) -> f64 {
    let s = 10f64.powi(decimals);
    (number * s).round() / s
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of [`sigmoid`].
pub fn sigmoid_prime(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}

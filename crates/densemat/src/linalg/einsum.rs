//! Einstein-summation contraction of two matrices.
//!
//! Subscripts name the axes of each operand with one lowercase letter per
//! axis, e.g. `"ij,jk->ik"`. A letter that is missing from the output is
//! summed over. Without `->` the output keeps the letters that occur exactly
//! once, in alphabetical order.

use crate::error::{LinalgError, Result};
use crate::math::Matrix;

#[derive(Debug, Clone, PartialEq)]
struct Subscripts {
    lhs: [char; 2],
    rhs: [char; 2],
    output: Vec<char>,
}

fn parse_operand(operand: &str) -> Result<[char; 2]> {
    let letters: Vec<char> = operand.chars().collect();
    match letters.as_slice() {
        [a, b] if a.is_ascii_lowercase() && b.is_ascii_lowercase() => Ok([*a, *b]),
        _ => Err(LinalgError::InvalidSubscripts(format!(
            "operand `{}` must name exactly two axes with lowercase letters",
            operand
        ))),
    }
}

fn parse(subscripts: &str) -> Result<Subscripts> {
    let compact: String = subscripts.chars().filter(|c| !c.is_whitespace()).collect();
    let (inputs, explicit) = match compact.split_once("->") {
        Some((inputs, output)) => (inputs, Some(output)),
        None => (compact.as_str(), None),
    };

    let operands: Vec<&str> = inputs.split(',').collect();
    if operands.len() != 2 {
        return Err(LinalgError::InvalidSubscripts(format!(
            "expected two operands, got {}",
            operands.len()
        )));
    }
    let lhs = parse_operand(operands[0])?;
    let rhs = parse_operand(operands[1])?;
    let all: Vec<char> = lhs.iter().chain(rhs.iter()).copied().collect();

    let output = match explicit {
        Some(output) => {
            let letters: Vec<char> = output.chars().collect();
            if letters.len() > 2 {
                return Err(LinalgError::InvalidSubscripts(format!(
                    "output `{}` has more than two axes",
                    output
                )));
            }
            for (idx, c) in letters.iter().enumerate() {
                if !all.contains(c) {
                    return Err(LinalgError::InvalidSubscripts(format!(
                        "output index `{}` does not appear in the operands",
                        c
                    )));
                }
                if letters[..idx].contains(c) {
                    return Err(LinalgError::InvalidSubscripts(format!(
                        "output index `{}` is repeated",
                        c
                    )));
                }
            }
            letters
        }
        None => {
            let mut once: Vec<char> = all
                .iter()
                .copied()
                .filter(|c| all.iter().filter(|x| *x == c).count() == 1)
                .collect();
            once.sort_unstable();
            if once.len() > 2 {
                return Err(LinalgError::InvalidSubscripts(format!(
                    "implicit output `{}` has more than two axes",
                    once.iter().collect::<String>()
                )));
            }
            once
        }
    };

    Ok(Subscripts { lhs, rhs, output })
}

/// Contract `a` and `b` according to `subscripts`.
///
/// A scalar result is returned as a 1x1 matrix and a single free index as a
/// column matrix. Every letter must have the same extent on every axis it
/// labels.
pub fn einsum(subscripts: &str, a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let parsed = parse(subscripts)?;

    // letters in order of first appearance, with their extents
    let mut letters: Vec<char> = Vec::with_capacity(4);
    let mut extents: Vec<usize> = Vec::with_capacity(4);
    let axes = [
        (parsed.lhs[0], a.nrows()),
        (parsed.lhs[1], a.ncols()),
        (parsed.rhs[0], b.nrows()),
        (parsed.rhs[1], b.ncols()),
    ];
    for (letter, extent) in axes {
        match letters.iter().position(|l| *l == letter) {
            Some(pos) if extents[pos] != extent => {
                return Err(LinalgError::DimensionMismatch {
                    op: "einsum",
                    expected: format!("extent {} for index `{}`", extents[pos], letter),
                    actual: extent.to_string(),
                });
            }
            Some(_) => {}
            None => {
                letters.push(letter);
                extents.push(extent);
            }
        }
    }

    let slot = |c: char| letters.iter().position(|l| *l == c).unwrap_or(0);
    let (a_row, a_col) = (slot(parsed.lhs[0]), slot(parsed.lhs[1]));
    let (b_row, b_col) = (slot(parsed.rhs[0]), slot(parsed.rhs[1]));
    let out_slots: Vec<usize> = parsed.output.iter().map(|c| slot(*c)).collect();

    let (out_rows, out_cols) = match out_slots.as_slice() {
        [] => (1, 1),
        [r] => (extents[*r], 1),
        [r, c] => (extents[*r], extents[*c]),
        _ => unreachable!("parser limits the output to two axes"),
    };
    let mut out = vec![0.0; out_rows * out_cols];

    // walk every assignment of values to the letters, odometer style
    let mut index = vec![0usize; letters.len()];
    'walk: loop {
        let term = a[(index[a_row], index[a_col])] * b[(index[b_row], index[b_col])];
        let position = match out_slots.as_slice() {
            [] => 0,
            [r] => index[*r],
            [r, c] => index[*r] * out_cols + index[*c],
            _ => unreachable!("parser limits the output to two axes"),
        };
        out[position] += term;

        for axis in (0..index.len()).rev() {
            index[axis] += 1;
            if index[axis] < extents[axis] {
                continue 'walk;
            }
            index[axis] = 0;
        }
        break;
    }

    Matrix::from_shape_vec((out_rows, out_cols), out)
}

/// Ordinary matrix product written as the single-index contraction
/// `"ij,jk->ik"`.
pub fn contract(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    einsum("ij,jk->ik", a, b)
}

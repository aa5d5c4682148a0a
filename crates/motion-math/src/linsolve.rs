//! Dense linear solves for boundary-condition fitting.

use motion_core::{ProfileError, Result};

/// Solve the square system `A x = b` by Gauss-Jordan elimination with partial pivoting.
///
/// The augmented matrix `[A | b]` is reduced column by column: the row with the
/// largest magnitude in the pivot column is swapped into place, normalized by
/// its pivot, and the column is eliminated from every other row. After the last
/// column the augmented column holds the solution.
///
/// # Errors
/// * [`ProfileError::DimensionMismatch`] if `a` is not `n x n` with `b` of length `n`
/// * [`ProfileError::Singular`] if a pivot is zero or non-finite
pub fn solve(a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>> {
    let n = b.len();
    if a.len() != n || a.iter().any(|row| row.len() != n) {
        return Err(ProfileError::DimensionMismatch {
            rows: a.len(),
            cols: a.first().map_or(0, Vec::len),
            rhs: n,
        });
    }

    let mut aug: Vec<Vec<f64>> = a
        .iter()
        .zip(b)
        .map(|(row, &rhs)| {
            let mut r = Vec::with_capacity(n + 1);
            r.extend_from_slice(row);
            r.push(rhs);
            r
        })
        .collect();

    for col in 0..n {
        // Partial pivot
        let mut max_row = col;
        let mut max_val = aug[col][col].abs();
        for (row, r) in aug.iter().enumerate().skip(col + 1) {
            if r[col].abs() > max_val {
                max_val = r[col].abs();
                max_row = row;
            }
        }
        aug.swap(col, max_row);

        let pivot = aug[col][col];
        if pivot == 0.0 || !pivot.is_finite() {
            return Err(ProfileError::Singular { column: col });
        }

        for v in aug[col].iter_mut().skip(col) {
            *v /= pivot;
        }

        let pivot_row = aug[col].clone();
        for (row, r) in aug.iter_mut().enumerate() {
            if row == col {
                continue;
            }
            let factor = r[col];
            if factor == 0.0 {
                continue;
            }
            for (v, p) in r.iter_mut().zip(&pivot_row).skip(col) {
                *v -= factor * p;
            }
        }
    }

    Ok(aug.into_iter().map(|row| row[n]).collect())
}

//! Minimal vector and matrix algebra over plain slices.
//!
//! These work on operands of any length, so every operation that combines two operands checks
//! that their lengths agree and fails with [`Error::DimensionMismatch`] otherwise. For fixed-size
//! 3D work, prefer [`Vector`](crate::Vector), which is backed by [`nalgebra`].

use crate::error::{Error, Result};

fn same_len(left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { left, right })
    }
}

/// Computes the dot (scalar) product of two equal-length vectors.
pub fn dot(v1: &[f64], v2: &[f64]) -> Result<f64> {
    same_len(v1.len(), v2.len())?;
    Ok(v1.iter().zip(v2).map(|(a, b)| a * b).sum())
}

/// Computes the cross product `a × b` of two 3D vectors.
#[must_use]
pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Computes the Euclidean norm of a vector.
#[doc(alias = "magnitude")]
#[must_use]
pub fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Multiplies `matrix` (given as a sequence of rows) with the column vector `vector`.
///
/// Every row must have as many elements as `vector`. The result has one element per row.
///
/// # Examples
///
/// ```rust
/// use cosy::linalg::mat_multiply;
///
/// let swap = [[0., 1.], [1., 0.]];
/// assert_eq!(mat_multiply(&swap, &[3., 4.]).unwrap(), vec![4., 3.]);
/// assert!(mat_multiply(&swap, &[3., 4., 5.]).is_err());
/// ```
pub fn mat_multiply<R: AsRef<[f64]>>(matrix: &[R], vector: &[f64]) -> Result<Vec<f64>> {
    matrix.iter().map(|row| dot(row.as_ref(), vector)).collect()
}

/// Multiplies the 3×3 `matrix` (given as rows) with the column vector `vector`.
///
/// This is [`mat_multiply`] for the fixed-size case, where the types already guarantee that the
/// dimensions agree.
#[must_use]
pub fn mat3_multiply(matrix: [[f64; 3]; 3], vector: [f64; 3]) -> [f64; 3] {
    matrix.map(|row| row.iter().zip(vector).map(|(a, b)| a * b).sum::<f64>())
}

/// Sums a sequence of equal-length rows column by column.
///
/// An empty sequence sums to an empty vector.
pub fn sum_columns<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<f64>> {
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };

    let mut totals = vec![0.; first.as_ref().len()];
    for row in rows {
        let row = row.as_ref();
        same_len(totals.len(), row.len())?;
        for (total, value) in totals.iter_mut().zip(row) {
            *total += value;
        }
    }
    Ok(totals)
}

/// Sums two equal-length vectors element by element.
pub fn sum_tuple(t1: &[f64], t2: &[f64]) -> Result<Vec<f64>> {
    same_len(t1.len(), t2.len())?;
    Ok(t1.iter().zip(t2).map(|(a, b)| a + b).collect())
}

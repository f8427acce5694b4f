// src/matrix/determinant.rs

use num::{BigInt, One, Zero};
use std::cmp::Ordering;
use crate::core::coefficient::RealField;
use crate::error::Result;

/// Exact determinant of an integer matrix by Bareiss fraction-free elimination.
///
/// Every intermediate division is exact, so entries stay integral and bounded
/// by the Hadamard bound of the input.
pub fn bareiss_determinant(mut matrix: Vec<Vec<BigInt>>) -> BigInt {
    let n = matrix.len();
    if n == 0 {
        return BigInt::one();
    }

    let mut negate = false;
    let mut previous_pivot = BigInt::one();

    for k in 0..n - 1 {
        if matrix[k][k].is_zero() {
            match (k + 1..n).find(|&i| !matrix[i][k].is_zero()) {
                Some(i) => {
                    matrix.swap(k, i);
                    negate = !negate;
                }
                None => return BigInt::zero(),
            }
        }

        for i in k + 1..n {
            for j in k + 1..n {
                let value = &matrix[i][j] * &matrix[k][k] - &matrix[i][k] * &matrix[k][j];
                matrix[i][j] = value / &previous_pivot;
            }
        }
        previous_pivot = matrix[k][k].clone();
    }

    let determinant = matrix[n - 1][n - 1].clone();
    if negate { -determinant } else { determinant }
}

/// Determinant over a real field by Gaussian elimination with partial pivoting.
///
/// Exact for `BigRational`; for `f64` this is the approximate baseline and
/// ill-conditioned matrices lose precision without any error being raised.
pub fn gaussian_determinant<F: RealField>(mut matrix: Vec<Vec<F>>, one: &F) -> Result<F> {
    let n = matrix.len();
    let mut determinant = one.clone();

    for col in 0..n {
        let pivot_row = (col..n)
            .filter(|&r| !matrix[r][col].is_zero_element())
            .max_by(|&a, &b| {
                matrix[a][col]
                    .magnitude()
                    .partial_cmp(&matrix[b][col].magnitude())
                    .unwrap_or(Ordering::Equal)
            });
        let pivot_row = match pivot_row {
            Some(r) => r,
            None => return Ok(one.zero_like()),
        };
        if pivot_row != col {
            matrix.swap(pivot_row, col);
            determinant = -determinant;
        }

        let pivot = matrix[col][col].clone();
        determinant = determinant * pivot.clone();
        let pivot_inverse = pivot.try_inverse()?;

        for r in col + 1..n {
            if matrix[r][col].is_zero_element() {
                continue;
            }
            let factor = matrix[r][col].clone() * pivot_inverse.clone();
            for c in col..n {
                matrix[r][c] = matrix[r][c].clone() - factor.clone() * matrix[col][c].clone();
            }
        }
    }

    Ok(determinant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coefficient::rational;
    use num::BigRational;

    fn integer_matrix(rows: &[&[i64]]) -> Vec<Vec<BigInt>> {
        rows.iter().map(|r| r.iter().map(|&v| BigInt::from(v)).collect()).collect()
    }

    #[test]
    fn test_bareiss_small() {
        assert_eq!(bareiss_determinant(vec![]), BigInt::from(1));
        assert_eq!(bareiss_determinant(integer_matrix(&[&[7]])), BigInt::from(7));
        assert_eq!(bareiss_determinant(integer_matrix(&[&[1, 2], &[3, 4]])), BigInt::from(-2));
        let m = integer_matrix(&[&[2, -3, 1], &[2, 0, -1], &[1, 4, 5]]);
        assert_eq!(bareiss_determinant(m), BigInt::from(49));
    }

    #[test]
    fn test_bareiss_needs_row_swap() {
        let m = integer_matrix(&[&[0, 1, 2], &[1, 0, 3], &[4, -3, 8]]);
        assert_eq!(bareiss_determinant(m), BigInt::from(-2));
        let singular = integer_matrix(&[&[1, 2], &[2, 4]]);
        assert_eq!(bareiss_determinant(singular), BigInt::from(0));
    }

    #[test]
    fn test_gaussian_matches_bareiss() {
        let rows: &[&[i64]] = &[&[2, -3, 1, 4], &[2, 0, -1, 3], &[1, 4, 5, -2], &[0, 1, 1, 1]];
        let exact = bareiss_determinant(integer_matrix(rows));
        let rational_matrix: Vec<Vec<BigRational>> = integer_matrix(rows)
            .iter()
            .map(|r| r.iter().map(rational).collect())
            .collect();
        let one = rational(&BigInt::from(1));
        assert_eq!(gaussian_determinant(rational_matrix, &one).unwrap(), rational(&exact));

        let float_matrix: Vec<Vec<f64>> = rows
            .iter()
            .map(|r| r.iter().map(|&v| v as f64).collect())
            .collect();
        let approximate = gaussian_determinant(float_matrix, &1.0).unwrap();
        let exact = exact.to_string().parse::<f64>().unwrap();
        assert!((approximate - exact).abs() < 1e-9);
    }
}

// src/matrix/sylvester.rs

use crate::core::coefficient::Ring;
use crate::error::{AlgebraError, Result};
use crate::polynomial::polynomial::Polynomial;

/// Sylvester matrix of `p` (degree m) and `q` (degree n).
///
/// The first n rows hold successive shifts of `p`'s coefficients, the last m
/// rows successive shifts of `q`'s, coefficients lowest degree first.
pub fn sylvester_matrix<F: Ring>(p: &Polynomial<F>, q: &Polynomial<F>) -> Result<Vec<Vec<F>>> {
    let zero = match (p.leading_coefficient(), q.leading_coefficient()) {
        (Some(c), Some(_)) => c.zero_like(),
        _ => {
            return Err(AlgebraError::DegenerateInput(
                "Sylvester matrix of the zero polynomial".to_string(),
            ))
        }
    };

    let m = p.degree() as usize;
    let n = q.degree() as usize;
    let size = m + n;
    let mut matrix = vec![vec![zero; size]; size];

    for i in 0..n {
        for (j, c) in p.iter().enumerate() {
            matrix[i][i + j] = c.clone();
        }
    }
    for i in 0..m {
        for (j, c) in q.iter().enumerate() {
            matrix[n + i][i + j] = c.clone();
        }
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::BigInt;

    fn row(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_layout() {
        // x^2 + 1 and its derivative 2x
        let p = Polynomial::from_integers(&[1, 0, 1]);
        let matrix = sylvester_matrix(&p, &p.derivative()).unwrap();
        assert_eq!(matrix, vec![row(&[1, 0, 1]), row(&[0, 2, 0]), row(&[0, 0, 2])]);
    }

    #[test]
    fn test_constant_operands() {
        let p = Polynomial::from_integers(&[3]);
        let q = Polynomial::from_integers(&[1, 1]);
        assert_eq!(sylvester_matrix(&p, &q).unwrap(), vec![row(&[3])]);
        assert!(sylvester_matrix(&p, &Polynomial::zero()).is_err());
    }
}

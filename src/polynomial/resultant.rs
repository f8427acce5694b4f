// src/polynomial/resultant.rs

use num::{BigInt, Integer, Zero};
use log::trace;
use crate::core::coefficient::RealField;
use crate::error::{AlgebraError, Result};
use crate::matrix::determinant::{bareiss_determinant, gaussian_determinant};
use crate::matrix::sylvester::sylvester_matrix;
use crate::polynomial::polynomial::Polynomial;

/// Resultant of `p` and `q` as the determinant of their Sylvester matrix.
pub fn resultant<F: RealField>(p: &Polynomial<F>, q: &Polynomial<F>) -> Result<F> {
    p.ensure_real()?;
    q.ensure_real()?;
    let matrix = sylvester_matrix(p, q)?;
    let one = matrix
        .first()
        .and_then(|row| row.first())
        .map(|c| c.one_like());
    match one {
        Some(one) => gaussian_determinant(matrix, &one),
        // both polynomials constant: the empty determinant
        None => Ok(p[0].one_like()),
    }
}

/// Discriminant `(-1)^(n(n-1)/2) · res(P, P') / lead(P)`.
///
/// When every coefficient of `poly` is an integer the value is rounded to
/// the nearest integer, which removes floating residue from `f64` input.
pub fn discriminant<F: RealField>(poly: &Polynomial<F>) -> Result<F> {
    let n = poly.degree();
    let lead = match poly.leading_coefficient() {
        Some(c) if n >= 1 => c.clone(),
        _ => {
            return Err(AlgebraError::DegenerateInput(format!(
                "discriminant needs degree >= 1, got {}",
                n
            )))
        }
    };

    let value = resultant(poly, &poly.derivative())?.try_div(&lead)?;
    let value = if n % 4 >= 2 { -value } else { value };
    if poly.iter().all(|c| c.is_integral()) {
        return Ok(value.round_integral());
    }
    Ok(value)
}

/// Exact resultant of two integer polynomials (fraction-free elimination).
pub fn resultant_integer(p: &Polynomial<BigInt>, q: &Polynomial<BigInt>) -> Result<BigInt> {
    Ok(bareiss_determinant(sylvester_matrix(p, q)?))
}

/// Exact discriminant of an integer polynomial.
pub fn discriminant_integer(poly: &Polynomial<BigInt>) -> Result<BigInt> {
    let n = poly.degree();
    let lead = match poly.leading_coefficient() {
        Some(c) if n >= 1 => c.clone(),
        _ => {
            return Err(AlgebraError::DegenerateInput(format!(
                "discriminant needs degree >= 1, got {}",
                n
            )))
        }
    };

    let res = resultant_integer(poly, &poly.derivative())?;
    let (quotient, remainder) = res.div_rem(&lead);
    if !remainder.is_zero() {
        return Err(AlgebraError::DegenerateInput(format!(
            "res(P, P') = {} is not divisible by the leading coefficient {}",
            res, lead
        )));
    }
    trace!("disc({}) from res(P, P') = {}", poly, res);
    Ok(if n % 4 >= 2 { -quotient } else { quotient })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z(coefficients: &[i64]) -> Polynomial<BigInt> {
        Polynomial::from_integers(coefficients)
    }

    #[test]
    fn test_known_discriminants() {
        assert_eq!(discriminant_integer(&z(&[1, 0, 1])).unwrap(), BigInt::from(-4));
        assert_eq!(discriminant_integer(&z(&[-2, 0, 1])).unwrap(), BigInt::from(8));
        assert_eq!(discriminant_integer(&z(&[-2, 0, 0, 1])).unwrap(), BigInt::from(-108));
        assert_eq!(discriminant_integer(&z(&[0, -1, 0, 1])).unwrap(), BigInt::from(4));
        assert_eq!(discriminant_integer(&z(&[5, 0, 1])).unwrap(), BigInt::from(-20));
    }

    #[test]
    fn test_linear_discriminant_is_one() {
        assert_eq!(discriminant_integer(&z(&[7, 1])).unwrap(), BigInt::from(1));
        assert_eq!(discriminant(&z(&[7, 1]).to_f64()).unwrap(), 1.0);
    }

    #[test]
    fn test_constant_is_rejected() {
        assert!(matches!(discriminant_integer(&z(&[3])), Err(AlgebraError::DegenerateInput(_))));
        assert!(matches!(discriminant(&Polynomial::<f64>::zero()), Err(AlgebraError::DegenerateInput(_))));
    }

    #[test]
    fn test_repeated_root_has_zero_discriminant() {
        // (x - 1)^2 (x + 2)
        assert!(discriminant_integer(&z(&[2, -3, 0, 1])).unwrap().is_zero());
    }

    #[test]
    fn test_exact_and_float_paths_agree() {
        for coefficients in [&[1, 0, 1][..], &[-2, 0, 0, 1], &[3, -1, 4, 1, 5], &[1, 1, 1, 1, 1, 1]] {
            let p = z(coefficients);
            let exact = discriminant_integer(&p).unwrap();
            let rational = discriminant(&p.to_rational()).unwrap();
            assert!(rational.is_integer());
            assert_eq!(rational.to_integer(), exact);
            let float = discriminant(&p.to_f64()).unwrap();
            assert_eq!(BigInt::from(float as i64), exact);
        }
    }

    #[test]
    fn test_non_monic_quadratic() {
        // b^2 - 4ac for 2x^2 + 3x + 1
        assert_eq!(discriminant_integer(&z(&[1, 3, 2])).unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_resultant_of_coprime_linear_factors() {
        // res(x - 1, x - 3) = (1 - 3) up to sign convention of the layout
        let r = resultant_integer(&z(&[-1, 1]), &z(&[-3, 1])).unwrap();
        assert!(r == BigInt::from(2) || r == BigInt::from(-2));
        assert!(resultant_integer(&z(&[-1, 1]), &z(&[-1, 1])).unwrap().is_zero());
    }
}

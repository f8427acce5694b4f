// src/real_roots/sturm.rs

use std::cmp::Ordering;
use log::trace;
use crate::core::coefficient::RealField;
use crate::error::{AlgebraError, Result};
use crate::polynomial::polynomial::Polynomial;

/// Sturm sequence `P, P', -rem(P, P'), ...` up to the last nonzero term.
pub fn sturm_sequence<F: RealField>(poly: &Polynomial<F>) -> Result<Vec<Polynomial<F>>> {
    poly.ensure_real()?;
    let mut sequence = vec![poly.clone()];
    let mut a = poly.clone();
    let mut b = poly.derivative();
    while !b.is_zero() {
        sequence.push(b.clone());
        let next = -a.rem(&b)?;
        a = b;
        b = next;
    }
    Ok(sequence)
}

/// Number of strict sign changes; zeros never take part in a change.
pub fn sign_changes(signs: &[Ordering]) -> usize {
    signs
        .windows(2)
        .filter(|pair| {
            matches!(
                (pair[0], pair[1]),
                (Ordering::Less, Ordering::Greater) | (Ordering::Greater, Ordering::Less)
            )
        })
        .count()
}

/// Number of distinct real roots by Sturm's theorem.
pub fn sturm_root_count<F: RealField>(poly: &Polynomial<F>) -> Result<usize> {
    let sequence = sturm_sequence(poly)?;
    let at_minus_infinity: Vec<Ordering> = sequence.iter().map(|s| s.sign_at_infinity(true)).collect();
    let at_plus_infinity: Vec<Ordering> = sequence.iter().map(|s| s.sign_at_infinity(false)).collect();

    let left = sign_changes(&at_minus_infinity);
    let right = sign_changes(&at_plus_infinity);
    trace!("Sturm sequence of length {}: {} - {} sign changes", sequence.len(), left, right);
    left.checked_sub(right).ok_or_else(|| {
        AlgebraError::DegenerateInput(format!(
            "Sturm sequence of {} has more sign changes at +inf than at -inf",
            poly
        ))
    })
}

/// Number of real roots counted with multiplicity (`r1`).
///
/// Each pass through `gcd(P, P')` lowers every multiplicity by one, so summing
/// the distinct-root counts over the passes counts each root fully.
pub fn real_roots_with_multiplicity<F: RealField>(poly: &Polynomial<F>) -> Result<usize> {
    let mut total = 0;
    let mut current = poly.clone();
    let mut distinct = sturm_root_count(&current)?;
    while distinct > 0 {
        total += distinct;
        current = current.gcd(&current.derivative())?;
        distinct = sturm_root_count(&current)?;
    }
    Ok(total)
}

/// Number of complex-conjugate root pairs (`r2`).
pub fn complex_pair_count<F: RealField>(poly: &Polynomial<F>) -> Result<usize> {
    pairs_left_over(poly, real_roots_with_multiplicity(poly)?)
}

/// `(degree - r1) / 2`, failing on a negative or odd remainder
fn pairs_left_over<F: RealField>(poly: &Polynomial<F>, real: usize) -> Result<usize> {
    let degree = poly.degree().max(0) as usize;
    let non_real = degree.checked_sub(real).ok_or_else(|| {
        AlgebraError::DegenerateInput(format!("{} real roots for degree {}", real, degree))
    })?;
    if non_real % 2 != 0 {
        return Err(AlgebraError::DegenerateInput(format!(
            "odd number ({}) of non-real roots for {}",
            non_real, poly
        )));
    }
    Ok(non_real / 2)
}

/// Signature `(r1, r2)` with `r1 + 2 * r2 = degree`.
pub fn signature<F: RealField>(poly: &Polynomial<F>) -> Result<(usize, usize)> {
    let r1 = real_roots_with_multiplicity(poly)?;
    let r2 = pairs_left_over(poly, r1)?;
    Ok((r1, r2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::BigRational;

    fn q(coefficients: &[i64]) -> Polynomial<BigRational> {
        Polynomial::from_integers(coefficients).to_rational()
    }

    #[test]
    fn test_sign_changes_skip_zeros() {
        use Ordering::*;
        assert_eq!(sign_changes(&[Greater, Less, Greater]), 2);
        assert_eq!(sign_changes(&[Greater, Equal, Less]), 0);
        assert_eq!(sign_changes(&[]), 0);
    }

    #[test]
    fn test_cubic_with_three_roots() {
        let p = q(&[0, -1, 0, 1]);
        assert_eq!(sturm_sequence(&p).unwrap().len(), 4);
        assert_eq!(sturm_root_count(&p).unwrap(), 3);
        assert_eq!(signature(&p).unwrap(), (3, 0));
    }

    #[test]
    fn test_no_real_roots() {
        let p = q(&[1, 0, 1]);
        assert_eq!(sturm_root_count(&p).unwrap(), 0);
        assert_eq!(complex_pair_count(&p).unwrap(), 1);
    }

    #[test]
    fn test_repeated_roots() {
        // (x - 1)^2 (x + 1)
        let p = q(&[1, -1, -1, 1]);
        assert_eq!(sturm_root_count(&p).unwrap(), 2);
        assert_eq!(real_roots_with_multiplicity(&p).unwrap(), 3);

        // (x^2 + 1)^2
        let p = q(&[1, 0, 2, 0, 1]);
        assert_eq!(real_roots_with_multiplicity(&p).unwrap(), 0);
        assert_eq!(complex_pair_count(&p).unwrap(), 2);
    }

    #[test]
    fn test_leftover_pairs_reject_odd_counts() {
        let quartic = q(&[1, 0, 2, 0, 1]);
        assert_eq!(pairs_left_over(&quartic, 0).unwrap(), 2);
        assert!(matches!(pairs_left_over(&quartic, 1), Err(AlgebraError::DegenerateInput(_))));
        assert!(matches!(pairs_left_over(&quartic, 5), Err(AlgebraError::DegenerateInput(_))));
        assert_eq!(signature(&quartic).unwrap(), (0, 2));
    }

    #[test]
    fn test_cube_root_of_two() {
        let p = q(&[-2, 0, 0, 1]);
        assert_eq!(signature(&p).unwrap(), (1, 1));
    }

    #[test]
    fn test_constants() {
        assert_eq!(sturm_root_count(&q(&[5])).unwrap(), 0);
        assert_eq!(sturm_root_count(&Polynomial::<BigRational>::zero()).unwrap(), 0);
    }

    #[test]
    fn test_float_coefficients() {
        let p = Polynomial::new(vec![-2.0, 0.0, 1.0]);
        assert_eq!(sturm_root_count(&p).unwrap(), 2);
        let bad = Polynomial::new(vec![1.0, f64::INFINITY]);
        assert!(matches!(sturm_root_count(&bad), Err(AlgebraError::NotReal(_))));
    }
}

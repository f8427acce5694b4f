// src/factor/berlekamp.rs

use log::{debug, trace};
use crate::core::coefficient::Ring;
use crate::core::factor_multiset::FactorMultiset;
use crate::error::{AlgebraError, Result};
use crate::integer_math::FieldElement;
use crate::matrix::kernel::gaussian_kernel_element;
use crate::polynomial::field::{common_modulus, frobenius_root, pow_mod};
use crate::polynomial::polynomial::Polynomial;

/// Factorization of a polynomial over a prime field: the leading unit that
/// was divided out and the monic irreducible factors with multiplicities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    pub unit: FieldElement,
    pub factors: FactorMultiset<FieldElement>,
}

impl Factorization {
    /// Multiply the factorization back out
    pub fn expand(&self) -> Result<Polynomial<FieldElement>> {
        self.factors.expand(&self.unit)
    }

    pub fn is_irreducible(&self) -> bool {
        self.factors.len() == 1 && self.factors.total_multiplicity() == 1
    }
}

/// Factor `poly` over ℤ/pℤ.
///
/// Every coefficient must carry the same prime modulus, otherwise this fails
/// with `InvalidField`. A constant polynomial yields itself as the unit and
/// no factors.
pub fn factor(poly: &Polynomial<FieldElement>) -> Result<Factorization> {
    let p = common_modulus(poly)?;
    let unit = match poly.leading_coefficient() {
        Some(c) => *c,
        None => {
            return Err(AlgebraError::DegenerateInput(
                "cannot factor the zero polynomial".to_string(),
            ))
        }
    };
    if poly.degree() == 0 {
        return Ok(Factorization { unit, factors: FactorMultiset::new() });
    }

    debug!("Factoring {} over GF({})", poly, p);
    let monic = poly.mul_scalar(&unit.invert()?);
    let factors = split_monic(&monic, p)?;
    debug!("{} irreducible factors of {} over GF({})", factors.len(), poly, p);
    Ok(Factorization { unit, factors })
}

/// Irreducible factors of a monic polynomial over GF(p), `p` read from the
/// coefficients.
///
/// Fails with `InvalidField` for mixed or non-prime moduli and with
/// `DegenerateInput` when the leading coefficient is not one.
pub fn factor_monic(poly: &Polynomial<FieldElement>) -> Result<FactorMultiset<FieldElement>> {
    let p = common_modulus(poly)?;
    if !poly.is_monic() {
        return Err(AlgebraError::DegenerateInput(format!("{} is not monic", poly)));
    }
    split_monic(poly, p)
}

/// Berlekamp on a monic polynomial whose coefficients all lie in GF(p).
///
/// Pending work is kept on an explicit stack of `(polynomial, weight)` pairs;
/// `weight` multiplies the multiplicity of every factor found below it.
fn split_monic(poly: &Polynomial<FieldElement>, p: u64) -> Result<FactorMultiset<FieldElement>> {
    let mut factors = FactorMultiset::new();
    let mut pending: Vec<(Polynomial<FieldElement>, usize)> = vec![(poly.clone(), 1)];

    while let Some((current, weight)) = pending.pop() {
        trace!("Berlekamp step on {} (weight {}, {} pending)", current, weight, pending.len());
        if current.degree() <= 0 {
            continue;
        }
        if current.degree() == 1 {
            factors.add(current, weight);
            continue;
        }

        let repeated = current.gcd(&current.derivative())?;
        if repeated.degree() == current.degree() {
            // P' = 0, so P(x) = R(x^p)
            pending.push((frobenius_root(&current, p), weight * p as usize));
            continue;
        }

        let square_free = if repeated.degree() > 0 {
            let cofactor = current.div_exact(&repeated)?;
            pending.push((repeated, weight));
            cofactor
        } else {
            current
        };

        match berlekamp_subalgebra_element(&square_free, p)? {
            None => factors.add(square_free, weight),
            Some(q) => {
                let one = q[q.len() - 1].one_like();
                for i in 0..p {
                    let shifted = &q - &Polynomial::constant(one.scale_by(i as i64));
                    let divisor = square_free.gcd(&shifted)?;
                    if divisor.degree() > 0 {
                        pending.push((divisor, weight));
                    }
                }
            }
        }
    }

    Ok(factors)
}

/// A non-constant `Q` with `Q^p ≡ Q (mod P)` for square-free `P`, or `None`
/// when only the constants qualify, which means `P` is irreducible.
fn berlekamp_subalgebra_element(poly: &Polynomial<FieldElement>, p: u64) -> Result<Option<Polynomial<FieldElement>>> {
    let d = poly.degree() as usize;
    let lead = poly[d];
    let zero = lead.zero_like();
    let one = lead.one_like();

    // rows hold (Frobenius - Id)(x^i) for i in 1..d; x^0 is fixed and skipped
    let x = Polynomial::x(&one);
    let x_to_p = pow_mod(&x, p, poly)?;
    let mut image = x_to_p.clone();
    let mut rows = Vec::with_capacity(d.saturating_sub(1));
    for i in 1..d {
        let row = &image - &Polynomial::monomial(one, i);
        rows.push(row);
        image = (&image * &x_to_p).rem(poly)?;
    }

    let kernel = gaussian_kernel_element(rows, &zero, &one)?;
    Ok(kernel.map(|combination| combination.shift(1)))
}

// src/polynomial/field.rs

use num::BigInt;
use crate::core::coefficient::Field;
use crate::error::{AlgebraError, Result};
use crate::integer_math::factorization_factory::is_probable_prime;
use crate::integer_math::FieldElement;
use crate::polynomial::polynomial::Polynomial;

/// Map each integer coefficient to its class in ℤ/pℤ.
pub fn reduce_modulo(poly: &Polynomial<BigInt>, prime: u64) -> Result<Polynomial<FieldElement>> {
    if !is_probable_prime(prime) {
        return Err(AlgebraError::InvalidField(format!("{} is not prime", prime)));
    }
    Ok(poly.map_coefficients(|c| FieldElement::from_bigint(c, prime)))
}

impl Polynomial<BigInt> {
    pub fn reduce_modulo(&self, prime: u64) -> Result<Polynomial<FieldElement>> {
        reduce_modulo(self, prime)
    }
}

/// The single prime modulus shared by every coefficient.
pub fn common_modulus(poly: &Polynomial<FieldElement>) -> Result<u64> {
    let mut coefficients = poly.iter();
    let modulus = match coefficients.next() {
        Some(c) => c.modulus(),
        None => {
            return Err(AlgebraError::DegenerateInput(
                "the zero polynomial carries no modulus".to_string(),
            ))
        }
    };
    if let Some(other) = coefficients.find(|c| c.modulus() != modulus) {
        return Err(AlgebraError::InvalidField(format!(
            "coefficients mix moduli {} and {}",
            modulus,
            other.modulus()
        )));
    }
    if !is_probable_prime(modulus) {
        return Err(AlgebraError::InvalidField(format!("modulus {} is not prime", modulus)));
    }
    Ok(modulus)
}

/// `base^exponent mod modulus` by square-and-multiply with reduction after every step
pub fn pow_mod<F: Field>(base: &Polynomial<F>, mut exponent: u64, modulus: &Polynomial<F>) -> Result<Polynomial<F>> {
    let one = match modulus.leading_coefficient() {
        Some(c) => Polynomial::constant(c.one_like()),
        None => {
            return Err(AlgebraError::DegenerateInput(
                "reduction modulo the zero polynomial".to_string(),
            ))
        }
    };

    let mut result = one.rem(modulus)?;
    let mut base = base.rem(modulus)?;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = (&result * &base).rem(modulus)?;
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base.square().rem(modulus)?;
        }
    }
    Ok(result)
}

/// Recover `R` from `P(x) = R(x^p)` by keeping every p-th coefficient.
pub fn frobenius_root(poly: &Polynomial<FieldElement>, p: u64) -> Polynomial<FieldElement> {
    Polynomial::new(poly.iter().step_by(p as usize).cloned().collect())
}

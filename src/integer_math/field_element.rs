// src/integer_math/field_element.rs

use num::{BigInt, Integer, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use crate::core::coefficient::{Field, Ring};
use crate::error::{AlgebraError, Result};
use crate::integer_math::factorization_factory::{mod_pow, mul_mod};
use crate::integer_math::gcd::GCD;

/// Residue class of ℤ/nℤ, stored as `0 <= value < modulus`.
///
/// The std operators panic when the moduli differ; use the `checked_*`
/// methods to get `IncompatibleModulus` back instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "EncodedFieldElement")]
pub struct FieldElement {
    value: u64,
    modulus: u64,
}

/// Wire form, reduced on decoding
#[derive(Deserialize)]
struct EncodedFieldElement {
    value: u64,
    modulus: u64,
}

impl TryFrom<EncodedFieldElement> for FieldElement {
    type Error = AlgebraError;

    fn try_from(encoded: EncodedFieldElement) -> Result<Self> {
        if encoded.modulus == 0 {
            return Err(AlgebraError::InvalidField("modulus 0".to_string()));
        }
        Ok(FieldElement { value: encoded.value % encoded.modulus, modulus: encoded.modulus })
    }
}

impl FieldElement {
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    pub fn new(value: i64, modulus: u64) -> Self {
        assert!(modulus > 0, "FieldElement modulus must be positive");
        let value = (value as i128).rem_euclid(modulus as i128) as u64;
        FieldElement { value, modulus }
    }

    pub fn from_bigint(value: &BigInt, modulus: u64) -> Self {
        assert!(modulus > 0, "FieldElement modulus must be positive");
        let residue = value.mod_floor(&BigInt::from(modulus));
        FieldElement {
            value: residue.to_u64().unwrap_or_default(),
            modulus,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    fn ensure_same_modulus(&self, other: &Self) -> Result<()> {
        if self.modulus != other.modulus {
            return Err(AlgebraError::IncompatibleModulus {
                left: self.modulus,
                right: other.modulus,
            });
        }
        Ok(())
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_modulus(other)?;
        let value = ((self.value as u128 + other.value as u128) % self.modulus as u128) as u64;
        Ok(FieldElement { value, modulus: self.modulus })
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_modulus(other)?;
        self.checked_add(&other.negate())
    }

    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        self.ensure_same_modulus(other)?;
        Ok(FieldElement {
            value: mul_mod(self.value, other.value, self.modulus),
            modulus: self.modulus,
        })
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        self.ensure_same_modulus(other)?;
        self.checked_mul(&other.invert()?)
    }

    pub fn negate(&self) -> Self {
        let value = if self.value == 0 { 0 } else { self.modulus - self.value };
        FieldElement { value, modulus: self.modulus }
    }

    /// Inverse via the extended Euclidean algorithm on `(value, modulus)`.
    pub fn invert(&self) -> Result<Self> {
        let (g, x, _) = GCD::extended_euclid(self.value as i128, self.modulus as i128);
        if g != 1 || self.modulus == 1 {
            return Err(AlgebraError::NotInvertible {
                value: self.value.to_string(),
                modulus: self.modulus.to_string(),
            });
        }
        let value = x.rem_euclid(self.modulus as i128) as u64;
        Ok(FieldElement { value, modulus: self.modulus })
    }

    /// Square-and-multiply exponentiation
    pub fn pow(&self, exponent: u64) -> Self {
        FieldElement {
            value: mod_pow(self.value, exponent, self.modulus),
            modulus: self.modulus,
        }
    }

    /// Multiply by a plain integer, reduced into this element's field
    pub fn scale_by(&self, k: i64) -> Self {
        let k = FieldElement::new(k, self.modulus);
        FieldElement {
            value: mul_mod(self.value, k.value, self.modulus),
            modulus: self.modulus,
        }
    }
}

fn unwrap_same_modulus(result: Result<FieldElement>) -> FieldElement {
    match result {
        Ok(element) => element,
        Err(error) => panic!("{}", error),
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, other: FieldElement) -> FieldElement {
        unwrap_same_modulus(self.checked_add(&other))
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: FieldElement) -> FieldElement {
        unwrap_same_modulus(self.checked_sub(&other))
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: FieldElement) -> FieldElement {
        unwrap_same_modulus(self.checked_mul(&other))
    }
}

impl Div for FieldElement {
    type Output = FieldElement;

    fn div(self, other: FieldElement) -> FieldElement {
        unwrap_same_modulus(self.checked_div(&other))
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}

impl Ring for FieldElement {
    fn zero_like(&self) -> Self {
        FieldElement { value: 0, modulus: self.modulus }
    }

    fn one_like(&self) -> Self {
        FieldElement::new(1, self.modulus)
    }

    fn is_zero_element(&self) -> bool {
        self.value == 0
    }

    fn scale(&self, k: i64) -> Self {
        self.scale_by(k)
    }
}

impl Field for FieldElement {
    fn try_inverse(&self) -> Result<Self> {
        self.invert()
    }

    fn try_div(&self, other: &Self) -> Result<Self> {
        self.checked_div(other)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// src/core/coefficient.rs

use num::{BigInt, BigRational, One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};
use crate::error::{AlgebraError, Result};

/// Capabilities a polynomial coefficient must offer.
///
/// The identities are produced from an existing value (`zero_like`,
/// `one_like`) rather than from a static constructor, so coefficient types
/// that carry context, such as a residue and its modulus, fit the same
/// interface as plain integers.
///
/// Implementations:
/// - FieldElement: residues modulo a prime
/// - BigInt: integer minimal polynomials (ring only, no inversion)
/// - BigRational: exact real analysis
/// - f64: approximate real analysis
pub trait Ring:
    Clone +
    Debug +
    Display +
    PartialEq +
    Add<Output = Self> +
    Sub<Output = Self> +
    Neg<Output = Self> +
    Mul<Output = Self> +
    Sized +
    Send +
    Sync
{
    /// Additive identity of the ring `self` lives in
    fn zero_like(&self) -> Self;

    /// Multiplicative identity of the ring `self` lives in
    fn one_like(&self) -> Self;

    fn is_zero_element(&self) -> bool;

    /// Multiply by a plain integer
    fn scale(&self, k: i64) -> Self;
}

/// A ring in which every nonzero element has an inverse.
pub trait Field: Ring {
    fn try_inverse(&self) -> Result<Self>;

    fn try_div(&self, other: &Self) -> Result<Self> {
        Ok(self.clone() * other.try_inverse()?)
    }
}

/// An ordered field embedded in the reals, used for sign-based root counting.
pub trait RealField: Field + PartialOrd {
    /// Whether the value is an actual real number (always true for exact types)
    fn is_real(&self) -> bool;

    /// Sign relative to zero
    fn sign(&self) -> Ordering;

    fn magnitude(&self) -> Self;

    fn is_integral(&self) -> bool;

    /// Nearest integer, half away from zero
    fn round_integral(&self) -> Self;
}

impl Ring for BigInt {
    fn zero_like(&self) -> Self {
        BigInt::zero()
    }

    fn one_like(&self) -> Self {
        BigInt::one()
    }

    fn is_zero_element(&self) -> bool {
        Zero::is_zero(self)
    }

    fn scale(&self, k: i64) -> Self {
        self * BigInt::from(k)
    }
}

impl Ring for BigRational {
    fn zero_like(&self) -> Self {
        BigRational::zero()
    }

    fn one_like(&self) -> Self {
        BigRational::one()
    }

    fn is_zero_element(&self) -> bool {
        Zero::is_zero(self)
    }

    fn scale(&self, k: i64) -> Self {
        self * BigRational::from_integer(BigInt::from(k))
    }
}

impl Field for BigRational {
    fn try_inverse(&self) -> Result<Self> {
        if Zero::is_zero(self) {
            return Err(AlgebraError::NotInvertible {
                value: self.to_string(),
                modulus: "Q".to_string(),
            });
        }
        Ok(self.recip())
    }
}

impl RealField for BigRational {
    fn is_real(&self) -> bool {
        true
    }

    fn sign(&self) -> Ordering {
        if self.is_positive() {
            Ordering::Greater
        } else if self.is_negative() {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    fn magnitude(&self) -> Self {
        Signed::abs(self)
    }

    fn is_integral(&self) -> bool {
        self.is_integer()
    }

    fn round_integral(&self) -> Self {
        self.round()
    }
}

impl Ring for f64 {
    fn zero_like(&self) -> Self {
        0.0
    }

    fn one_like(&self) -> Self {
        1.0
    }

    fn is_zero_element(&self) -> bool {
        *self == 0.0
    }

    fn scale(&self, k: i64) -> Self {
        self * k as f64
    }
}

impl Field for f64 {
    fn try_inverse(&self) -> Result<Self> {
        if *self == 0.0 {
            return Err(AlgebraError::NotInvertible {
                value: self.to_string(),
                modulus: "R".to_string(),
            });
        }
        Ok(1.0 / self)
    }
}

impl RealField for f64 {
    fn is_real(&self) -> bool {
        self.is_finite()
    }

    fn sign(&self) -> Ordering {
        self.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
    }

    fn magnitude(&self) -> Self {
        self.abs()
    }

    fn is_integral(&self) -> bool {
        self.is_finite() && self.fract() == 0.0
    }

    fn round_integral(&self) -> Self {
        self.round()
    }
}

/// Convert an integer to a rational coefficient
pub fn rational(value: &BigInt) -> BigRational {
    BigRational::from_integer(value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities_follow_the_value() {
        let x = BigInt::from(42);
        assert_eq!(x.zero_like(), BigInt::from(0));
        assert_eq!(x.one_like(), BigInt::from(1));
        assert!(x.zero_like().is_zero_element());
        assert_eq!(x.scale(-2), BigInt::from(-84));
    }

    #[test]
    fn test_rational_inverse() {
        let half = BigRational::new(BigInt::from(1), BigInt::from(2));
        assert_eq!(half.try_inverse().unwrap(), rational(&BigInt::from(2)));
        assert!(half.zero_like().try_inverse().is_err());
    }

    #[test]
    fn test_real_signs() {
        let minus = rational(&BigInt::from(-3));
        assert_eq!(minus.sign(), Ordering::Less);
        assert_eq!(minus.magnitude(), rational(&BigInt::from(3)));
        assert_eq!(0.0f64.sign(), Ordering::Equal);
        assert!(!f64::NAN.is_real());
        assert!(2.5f64.is_real());
        assert!(!2.5f64.is_integral());
        assert_eq!((-3.6f64).round_integral(), -4.0);
        let seven_halves = BigRational::new(BigInt::from(7), BigInt::from(2));
        assert!(!seven_halves.is_integral());
        assert_eq!(seven_halves.round_integral(), rational(&BigInt::from(4)));
    }
}

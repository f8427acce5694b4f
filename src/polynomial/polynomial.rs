// src/polynomial/polynomial.rs

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Add, Index, Mul, Neg, Sub};
use num::{BigInt, BigRational, ToPrimitive};
use serde::{Deserialize, Serialize};
use crate::core::coefficient::{rational, Field, RealField, Ring};
use crate::error::{AlgebraError, Result};

/// Dense univariate polynomial, coefficients stored lowest degree first.
///
/// The coefficient vector never ends in a zero, so the zero polynomial is the
/// empty vector and has degree -1.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "EncodedPolynomial<F>")]
#[serde(bound(deserialize = "F: Ring + Deserialize<'de>"))]
pub struct Polynomial<F> {
    coefficients: Vec<F>,
}

/// Wire form, trimmed on decoding
#[derive(Deserialize)]
struct EncodedPolynomial<F> {
    coefficients: Vec<F>,
}

impl<F: Ring> From<EncodedPolynomial<F>> for Polynomial<F> {
    fn from(encoded: EncodedPolynomial<F>) -> Self {
        Polynomial::new(encoded.coefficients)
    }
}

impl<F: Ring> Polynomial<F> {
    pub fn new(mut coefficients: Vec<F>) -> Self {
        while coefficients.last().map_or(false, |c| c.is_zero_element()) {
            coefficients.pop();
        }
        Polynomial { coefficients }
    }

    pub fn zero() -> Self {
        Polynomial { coefficients: Vec::new() }
    }

    pub fn constant(c: F) -> Self {
        Polynomial::new(vec![c])
    }

    /// `c * x^degree`
    pub fn monomial(c: F, degree: usize) -> Self {
        Polynomial::constant(c).shift(degree)
    }

    /// The polynomial `x` over the ring of `sample`
    pub fn x(sample: &F) -> Self {
        Polynomial::new(vec![sample.zero_like(), sample.one_like()])
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Degree, -1 for the zero polynomial
    pub fn degree(&self) -> isize {
        self.coefficients.len() as isize - 1
    }

    pub fn leading_coefficient(&self) -> Option<&F> {
        self.coefficients.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.coefficients.iter()
    }

    /// Horner evaluation
    pub fn evaluate(&self, x: &F) -> F {
        let mut coefficients = self.coefficients.iter().rev();
        let mut value = match coefficients.next() {
            Some(leading) => leading.clone(),
            None => return x.zero_like(),
        };
        for c in coefficients {
            value = value * x.clone() + c.clone();
        }
        value
    }

    pub fn derivative(&self) -> Self {
        let coefficients = self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.scale(i as i64))
            .collect();
        Polynomial::new(coefficients)
    }

    /// Multiply by `x^d`
    pub fn shift(&self, d: usize) -> Self {
        match self.coefficients.first() {
            None => Polynomial::zero(),
            Some(c) => {
                let mut coefficients = vec![c.zero_like(); d];
                coefficients.extend(self.coefficients.iter().cloned());
                Polynomial { coefficients }
            }
        }
    }

    /// Multiply every coefficient by `k`
    pub fn mul_scalar(&self, k: &F) -> Self {
        Polynomial::new(self.coefficients.iter().map(|c| k.clone() * c.clone()).collect())
    }

    pub fn square(&self) -> Self {
        self * self
    }

    /// Square-and-multiply power. `0^0` has no coefficient ring to build `1` in.
    pub fn pow(&self, mut k: u32) -> Result<Self> {
        let one = match self.coefficients.first() {
            Some(c) => Polynomial::constant(c.one_like()),
            None if k > 0 => return Ok(Polynomial::zero()),
            None => {
                return Err(AlgebraError::DegenerateInput(
                    "zero polynomial raised to the power 0".to_string(),
                ))
            }
        };

        let mut result = one;
        let mut base = self.clone();
        while k > 0 {
            if k & 1 == 1 {
                result = &result * &base;
            }
            k >>= 1;
            if k > 0 {
                base = base.square();
            }
        }
        Ok(result)
    }

    pub fn map_coefficients<G: Ring>(&self, f: impl Fn(&F) -> G) -> Polynomial<G> {
        Polynomial::new(self.coefficients.iter().map(f).collect())
    }
}

impl<F: Field> Polynomial<F> {
    /// Euclidean division `self = q * divisor + r` with `deg r < deg divisor`.
    pub fn div_rem(&self, divisor: &Polynomial<F>) -> Result<(Self, Self)> {
        let lead = divisor.leading_coefficient().ok_or_else(|| {
            AlgebraError::DegenerateInput("division by the zero polynomial".to_string())
        })?;
        let lead_inverse = lead.try_inverse()?;

        if self.len() < divisor.len() {
            return Ok((Polynomial::zero(), self.clone()));
        }

        let divisor_degree = divisor.len() - 1;
        let mut remainder = self.coefficients.clone();
        let zero = lead.zero_like();
        let mut quotient = vec![zero.clone(); self.len() - divisor_degree];

        for i in (0..quotient.len()).rev() {
            let top = remainder[divisor_degree + i].clone();
            if top.is_zero_element() {
                continue;
            }
            let coefficient = top * lead_inverse.clone();
            // set explicitly: f64 coefficients leave rounding residue here
            remainder[divisor_degree + i] = zero.clone();
            for j in 0..divisor_degree {
                remainder[i + j] = remainder[i + j].clone() - coefficient.clone() * divisor.coefficients[j].clone();
            }
            quotient[i] = coefficient;
        }

        Ok((Polynomial::new(quotient), Polynomial::new(remainder)))
    }

    pub fn div_exact(&self, divisor: &Polynomial<F>) -> Result<Self> {
        Ok(self.div_rem(divisor)?.0)
    }

    pub fn rem(&self, divisor: &Polynomial<F>) -> Result<Self> {
        Ok(self.div_rem(divisor)?.1)
    }

    /// Scale so the leading coefficient is one.
    pub fn monic(&self) -> Result<Self> {
        let lead = self.leading_coefficient().ok_or_else(|| {
            AlgebraError::DegenerateInput("the zero polynomial has no monic form".to_string())
        })?;
        Ok(self.mul_scalar(&lead.try_inverse()?))
    }

    pub fn is_monic(&self) -> bool {
        self.leading_coefficient().map_or(false, |c| *c == c.one_like())
    }

    /// Monic greatest common divisor by the Euclidean algorithm.
    pub fn gcd(&self, other: &Polynomial<F>) -> Result<Self> {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.rem(&b)?;
            a = b;
            b = r;
        }
        a.monic()
    }
}

impl<F: RealField> Polynomial<F> {
    /// Fails with `NotReal` unless every coefficient is a finite real number.
    pub fn ensure_real(&self) -> Result<()> {
        match self.coefficients.iter().find(|c| !c.is_real()) {
            Some(c) => Err(AlgebraError::NotReal(format!("coefficient {} of {}", c, self))),
            None => Ok(()),
        }
    }

    /// Sign of the polynomial as `x` tends to +∞ (or -∞)
    pub fn sign_at_infinity(&self, negative: bool) -> Ordering {
        match self.leading_coefficient() {
            None => Ordering::Equal,
            Some(lead) => {
                let sign = lead.sign();
                if negative && self.degree() % 2 == 1 {
                    sign.reverse()
                } else {
                    sign
                }
            }
        }
    }
}

impl Polynomial<BigInt> {
    pub fn from_integers(coefficients: &[i64]) -> Self {
        Polynomial::new(coefficients.iter().map(|&c| BigInt::from(c)).collect())
    }

    pub fn to_rational(&self) -> Polynomial<BigRational> {
        self.map_coefficients(rational)
    }

    pub fn to_f64(&self) -> Polynomial<f64> {
        self.map_coefficients(|c| c.to_f64().unwrap_or(f64::NAN))
    }
}

impl<'a, 'b, F: Ring> Add<&'b Polynomial<F>> for &'a Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, other: &'b Polynomial<F>) -> Polynomial<F> {
        let (long, short) = if self.len() >= other.len() { (self, other) } else { (other, self) };
        let mut coefficients = long.coefficients.clone();
        for (c, s) in coefficients.iter_mut().zip(short.coefficients.iter()) {
            *c = c.clone() + s.clone();
        }
        Polynomial::new(coefficients)
    }
}

impl<'a, F: Ring> Neg for &'a Polynomial<F> {
    type Output = Polynomial<F>;

    fn neg(self) -> Polynomial<F> {
        Polynomial { coefficients: self.coefficients.iter().map(|c| -c.clone()).collect() }
    }
}

impl<'a, 'b, F: Ring> Sub<&'b Polynomial<F>> for &'a Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, other: &'b Polynomial<F>) -> Polynomial<F> {
        self + &(-other)
    }
}

impl<'a, 'b, F: Ring> Mul<&'b Polynomial<F>> for &'a Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, other: &'b Polynomial<F>) -> Polynomial<F> {
        let zero = match (self.coefficients.first(), other.coefficients.first()) {
            (Some(c), Some(_)) => c.zero_like(),
            _ => return Polynomial::zero(),
        };
        let mut coefficients = vec![zero; self.len() + other.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            if a.is_zero_element() {
                continue;
            }
            for (j, b) in other.coefficients.iter().enumerate() {
                coefficients[i + j] = coefficients[i + j].clone() + a.clone() * b.clone();
            }
        }
        Polynomial::new(coefficients)
    }
}

impl<F: Ring> Add for Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, other: Polynomial<F>) -> Polynomial<F> {
        &self + &other
    }
}

impl<F: Ring> Sub for Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, other: Polynomial<F>) -> Polynomial<F> {
        &self - &other
    }
}

impl<F: Ring> Mul for Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, other: Polynomial<F>) -> Polynomial<F> {
        &self * &other
    }
}

impl<F: Ring> Neg for Polynomial<F> {
    type Output = Polynomial<F>;

    fn neg(self) -> Polynomial<F> {
        -&self
    }
}

impl<F> Index<usize> for Polynomial<F> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        &self.coefficients[index]
    }
}

impl<'a, F> IntoIterator for &'a Polynomial<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.iter()
    }
}

impl<F: Ord> PartialOrd for Polynomial<F> {
    fn partial_cmp(&self, other: &Polynomial<F>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Ord> Ord for Polynomial<F> {
    /// Lower degree first, then coefficients compared from the top
    fn cmp(&self, other: &Polynomial<F>) -> Ordering {
        self.coefficients
            .len()
            .cmp(&other.coefficients.len())
            .then_with(|| self.coefficients.iter().rev().cmp(other.coefficients.iter().rev()))
    }
}

impl<F: Ring> Display for Polynomial<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_zero() {
            return write!(f, "0");
        }
        let terms: Vec<String> = self.coefficients
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero_element())
            .map(|(d, c)| match d {
                0 => format!("{}", c),
                1 => format!("{}*X", c),
                _ => format!("{}*X^{}", c, d),
            })
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}

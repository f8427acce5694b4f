// src/ideals/number_field.rs

use log::{info, warn};
use num::BigInt;
use crate::config::NumFieldConfig;
use crate::error::{AlgebraError, Result};
use crate::ideals::decomposition::{decompose_primes, ideals_above, IdealFactorization, PrimeDecomposition};
use crate::ideals::minkowski::{bound_floor, minkowski_bound};
use crate::integer_math::primes_below;
use crate::polynomial::polynomial::Polynomial;
use crate::polynomial::resultant::discriminant_integer;
use crate::real_roots::sturm::signature;

/// Invariants of the number field `Q[X]/(P)` for an integer minimal polynomial `P`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberField {
    minimal_polynomial: Polynomial<BigInt>,
    discriminant: BigInt,
    signature: (usize, usize),
    minkowski_bound: f64,
}

impl NumberField {
    pub fn new(minimal_polynomial: Polynomial<BigInt>) -> Result<Self> {
        if minimal_polynomial.degree() < 1 {
            return Err(AlgebraError::DegenerateInput(format!(
                "minimal polynomial {} must have positive degree",
                minimal_polynomial
            )));
        }

        let discriminant = discriminant_integer(&minimal_polynomial)?;
        let signature = signature(&minimal_polynomial.to_rational())?;
        let degree = minimal_polynomial.degree() as usize;
        let minkowski_bound = minkowski_bound(degree, signature.1, &discriminant);

        info!(
            "Field of {}: degree {}, disc {}, signature ({}, {}), Minkowski bound {:.4}",
            minimal_polynomial, degree, discriminant, signature.0, signature.1, minkowski_bound
        );

        Ok(NumberField { minimal_polynomial, discriminant, signature, minkowski_bound })
    }

    pub fn minimal_polynomial(&self) -> &Polynomial<BigInt> {
        &self.minimal_polynomial
    }

    pub fn degree(&self) -> usize {
        self.minimal_polynomial.degree() as usize
    }

    pub fn discriminant(&self) -> &BigInt {
        &self.discriminant
    }

    /// `(r1, r2)`: real embeddings and pairs of complex embeddings
    pub fn signature(&self) -> (usize, usize) {
        self.signature
    }

    pub fn minkowski_bound(&self) -> f64 {
        self.minkowski_bound
    }

    /// The bound floors to at most 1, so the ring of integers is principal.
    pub fn is_principal(&self) -> bool {
        bound_floor(self.minkowski_bound) <= 1
    }

    pub fn ideals_above(&self, prime: u64) -> Result<PrimeDecomposition> {
        ideals_above(&self.minimal_polynomial, prime)
    }

    /// Decompose every prime up to the Minkowski bound.
    pub fn factor_ideals(&self, config: &NumFieldConfig) -> Result<IdealFactorization> {
        let bound = self.minkowski_bound;
        if self.is_principal() {
            info!("Minkowski bound {:.4} floors to 1: principal, no primes to examine", bound);
            return Ok(IdealFactorization {
                bound,
                principal: true,
                primes_examined_up_to: bound_floor(bound),
                truncated: false,
                decompositions: Vec::new(),
            });
        }

        let floor = bound_floor(bound);
        let (limit, truncated) = match config.decomposition.prime_limit {
            Some(cap) if cap < floor => {
                warn!("Minkowski bound {:.4} exceeds the prime limit {}, stopping there", bound, cap);
                (cap, true)
            }
            _ => (floor, false),
        };

        let primes = primes_below(limit.saturating_add(1));
        info!("Examining {} primes up to {}", primes.len(), limit);
        let threads = if config.decomposition.parallel {
            Some(config.effective_threads())
        } else {
            None
        };
        let decompositions = decompose_primes(&self.minimal_polynomial, &primes, threads)?;

        Ok(IdealFactorization {
            bound,
            principal: false,
            primes_examined_up_to: limit,
            truncated,
            decompositions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(coefficients: &[i64]) -> NumberField {
        NumberField::new(Polynomial::from_integers(coefficients)).unwrap()
    }

    #[test]
    fn test_gaussian_field_is_principal() {
        let gaussian = field(&[1, 0, 1]);
        assert_eq!(gaussian.degree(), 2);
        assert_eq!(gaussian.discriminant(), &BigInt::from(-4));
        assert_eq!(gaussian.signature(), (0, 1));
        assert!(gaussian.is_principal());

        let result = gaussian.factor_ideals(&NumFieldConfig::default()).unwrap();
        assert!(result.principal);
        assert!(result.decompositions.is_empty());
    }

    #[test]
    fn test_cube_root_of_two() {
        let k = field(&[-2, 0, 0, 1]);
        assert_eq!(k.signature(), (1, 1));
        assert!((k.minkowski_bound() - 2.94).abs() < 0.01);
        assert!(!k.is_principal());

        let result = k.factor_ideals(&NumFieldConfig::default()).unwrap();
        assert_eq!(result.primes_examined_up_to, 2);
        assert_eq!(result.decompositions.len(), 1);
        assert_eq!(result.decompositions[0].ideals[0].exponent, 3);
    }

    #[test]
    fn test_prime_limit_truncates() {
        // disc(x^3 + x + 1000) is large enough for a bound far above 5
        let k = field(&[1000, 1, 0, 1]);
        assert!(k.minkowski_bound() > 5.0);

        let mut config = NumFieldConfig::default();
        config.decomposition.prime_limit = Some(5);
        config.decomposition.parallel = false;
        let result = k.factor_ideals(&config).unwrap();
        assert!(result.truncated);
        assert_eq!(result.primes_examined_up_to, 5);
        let primes: Vec<u64> = result.decompositions.iter().map(|d| d.prime).collect();
        assert_eq!(primes, vec![2, 3, 5]);
    }

    #[test]
    fn test_constant_is_rejected() {
        let err = NumberField::new(Polynomial::from_integers(&[7])).unwrap_err();
        assert!(matches!(err, AlgebraError::DegenerateInput(_)));
    }
}

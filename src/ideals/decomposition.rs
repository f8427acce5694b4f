// src/ideals/decomposition.rs

use log::{debug, warn};
use num::BigInt;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use crate::error::Result;
use crate::factor::berlekamp::factor;
use crate::integer_math::FieldElement;
use crate::polynomial::polynomial::Polynomial;

/// The prime ideal `(p, D(α))` raised to its ramification exponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdealDescriptor {
    pub prime: u64,
    pub generator: Polynomial<FieldElement>,
    pub exponent: usize,
}

impl IdealDescriptor {
    /// Degree of the residue field over GF(p)
    pub fn residue_degree(&self) -> usize {
        self.generator.degree().max(0) as usize
    }
}

impl fmt::Display for IdealDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.prime, self.generator)?;
        if self.exponent > 1 {
            write!(f, "^{}", self.exponent)?;
        }
        Ok(())
    }
}

/// How the rational prime `p` splits in the ring of integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeDecomposition {
    pub prime: u64,
    /// Leading coefficient of the minimal polynomial modulo `p`
    pub unit: FieldElement,
    pub ideals: Vec<IdealDescriptor>,
}

impl PrimeDecomposition {
    pub fn ideal_count(&self) -> usize {
        self.ideals.len()
    }

    pub fn is_ramified(&self) -> bool {
        self.ideals.iter().any(|ideal| ideal.exponent > 1)
    }

    /// `(p)` stays prime
    pub fn is_inert(&self) -> bool {
        self.ideals.len() == 1 && self.ideals[0].exponent == 1
    }

    pub fn splits_completely(&self) -> bool {
        !self.ideals.is_empty()
            && self.ideals.iter().all(|ideal| ideal.exponent == 1 && ideal.residue_degree() == 1)
    }

    /// `Σ e·f`, the degree of the reduced minimal polynomial
    pub fn total_degree(&self) -> usize {
        self.ideals.iter().map(|ideal| ideal.exponent * ideal.residue_degree()).sum()
    }
}

impl fmt::Display for PrimeDecomposition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_inert() {
            return write!(f, "({}) = ({})", self.prime, self.prime);
        }
        write!(f, "({}) =", self.prime)?;
        for ideal in &self.ideals {
            write!(f, " {}", ideal)?;
        }
        Ok(())
    }
}

/// Result of running the driver over every prime up to the Minkowski bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealFactorization {
    pub bound: f64,
    /// The bound floors to 1: every ideal is principal and no prime was examined
    pub principal: bool,
    pub primes_examined_up_to: u64,
    /// A configured prime limit stopped the driver short of the bound
    pub truncated: bool,
    pub decompositions: Vec<PrimeDecomposition>,
}

/// Prime ideals of the ring of integers lying above `prime`.
pub fn ideals_above(poly: &Polynomial<BigInt>, prime: u64) -> Result<PrimeDecomposition> {
    let reduced = poly.reduce_modulo(prime)?;
    let factorization = factor(&reduced)?;
    let ideals = factorization
        .factors
        .into_iter()
        .map(|(generator, exponent)| IdealDescriptor { prime, generator, exponent })
        .collect();

    let decomposition = PrimeDecomposition { prime, unit: factorization.unit, ideals };
    debug!("{}", decomposition);
    Ok(decomposition)
}

/// Decompose every prime in `primes`, keeping their order.
///
/// With `threads` set the primes are spread over a dedicated rayon pool of
/// that size; without it they are handled on the calling thread.
pub fn decompose_primes(
    poly: &Polynomial<BigInt>,
    primes: &[u64],
    threads: Option<usize>,
) -> Result<Vec<PrimeDecomposition>> {
    let start = Instant::now();
    let decompositions = match threads {
        Some(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.install(|| {
                primes
                    .par_iter()
                    .map(|&p| ideals_above(poly, p))
                    .collect::<Result<Vec<_>>>()
            })?,
            Err(e) => {
                warn!("Could not build a pool of {} threads ({}), decomposing sequentially", n, e);
                sequential(poly, primes)?
            }
        },
        None => sequential(poly, primes)?,
    };
    debug!(
        "Decomposed {} primes in {}µs",
        primes.len(),
        start.elapsed().as_micros()
    );
    Ok(decompositions)
}

fn sequential(poly: &Polynomial<BigInt>, primes: &[u64]) -> Result<Vec<PrimeDecomposition>> {
    primes.iter().map(|&p| ideals_above(poly, p)).collect()
}

// src/integer_math/fast_prime_sieve.rs

use bitvec::prelude::*;
use log::trace;

/// Sieve of Eratosthenes over a bit vector of odd numbers.
pub struct FastPrimeSieve {
    limit: u64,
    composite: BitVec,
}

impl FastPrimeSieve {
    /// Sieve every number strictly below `limit`
    pub fn new(limit: u64) -> Self {
        // bit i stands for 2*i + 1
        let size = (limit / 2) as usize;
        let mut composite = bitvec![0; size];
        if size > 0 {
            composite.set(0, true);
        }

        let mut p = 3u64;
        while p * p < limit {
            if !composite[(p / 2) as usize] {
                let mut multiple = p * p;
                while multiple < limit {
                    composite.set((multiple / 2) as usize, true);
                    multiple += 2 * p;
                }
            }
            p += 2;
        }

        trace!("Sieved {} odd candidates below {}", size, limit);
        FastPrimeSieve { limit, composite }
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        let two = if self.limit > 2 { Some(2u64) } else { None };
        two.into_iter().chain(
            self.composite
                .iter_zeros()
                .map(|i| 2 * i as u64 + 1)
                .filter(move |&n| n < self.limit),
        )
    }
}

/// Ascending list of the primes `< n`.
pub fn primes_below(n: u64) -> Vec<u64> {
    FastPrimeSieve::new(n).iter().collect()
}

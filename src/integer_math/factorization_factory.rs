// src/integer_math/factorization_factory.rs

pub struct FactorizationFactory;

impl FactorizationFactory {
    /// Witnesses that make Miller-Rabin deterministic for every `u64`.
    pub const PRIME_CHECK_BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    pub fn is_probable_prime(input: u64) -> bool {
        if input < 2 {
            return false;
        }
        for &base in &Self::PRIME_CHECK_BASES {
            if input == base {
                return true;
            }
            if input % base == 0 {
                return false;
            }
        }

        let mut d = input - 1;
        let mut s = 0;
        while d % 2 == 0 {
            d /= 2;
            s += 1;
        }

        'witness: for &a in &Self::PRIME_CHECK_BASES {
            let mut x = mod_pow(a, d, input);
            if x == 1 || x == input - 1 {
                continue;
            }
            for _ in 1..s {
                x = mul_mod(x, x, input);
                if x == input - 1 {
                    continue 'witness;
                }
                if x == 1 {
                    return false;
                }
            }
            return false;
        }
        true
    }
}

pub fn is_probable_prime(n: u64) -> bool {
    FactorizationFactory::is_probable_prime(n)
}

pub(crate) fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

pub(crate) fn mod_pow(base: u64, mut exponent: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    let mut base = base % m;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        exponent >>= 1;
        base = mul_mod(base, base, m);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer_math::fast_prime_sieve::primes_below;

    #[test]
    fn test_agrees_with_sieve() {
        let primes = primes_below(2000);
        for n in 0..2000u64 {
            assert_eq!(is_probable_prime(n), primes.contains(&n), "n = {}", n);
        }
    }

    #[test]
    fn test_large_values() {
        assert!(is_probable_prime(1_000_000_007));
        assert!(is_probable_prime(18_446_744_073_709_551_557));
        assert!(!is_probable_prime(3_215_031_751)); // strong pseudoprime to bases 2, 3, 5, 7
        assert!(!is_probable_prime(1_000_000_007 * 3));
    }
}

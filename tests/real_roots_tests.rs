// tests/real_roots_tests.rs
//
// Sturm root counting and discriminants across the exact and
// floating-point coefficient paths.

use num::BigInt;
use numfield::polynomial::{discriminant, discriminant_integer, Polynomial};
use numfield::real_roots::{signature, sturm_root_count};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(test)]
mod real_roots_tests {
    use super::*;

    fn z(coefficients: &[i64]) -> Polynomial<BigInt> {
        Polynomial::from_integers(coefficients)
    }

    /// Product of `(x - r)` over the given roots
    fn from_roots(roots: &[i64]) -> Polynomial<BigInt> {
        roots
            .iter()
            .fold(z(&[1]), |acc, &r| &acc * &z(&[-r, 1]))
    }

    /// Chebyshev polynomial of the first kind via T(n+1) = 2x T(n) - T(n-1)
    fn chebyshev(n: usize) -> Polynomial<BigInt> {
        let mut previous = z(&[1]);
        let mut current = z(&[0, 1]);
        if n == 0 {
            return previous;
        }
        for _ in 1..n {
            let next = &(&z(&[0, 2]) * &current) - &previous;
            previous = current;
            current = next;
        }
        current
    }

    #[test]
    fn test_chebyshev_roots_are_all_real() {
        for n in 1..=8 {
            let t = chebyshev(n).to_rational();
            assert_eq!(sturm_root_count(&t).unwrap(), n);
            assert_eq!(signature(&t).unwrap(), (n, 0));
        }
    }

    #[test]
    fn test_random_roots_with_complex_pairs() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..10 {
            let real_count = rng.random_range(1..=4usize);
            let roots: Vec<i64> = (0..real_count).map(|_| rng.random_range(-6..=6)).collect();
            let pairs = rng.random_range(0..=2usize);

            let mut p = from_roots(&roots);
            for k in 0..pairs {
                // x^2 + k + 1 has no real roots
                p = &p * &z(&[k as i64 + 1, 0, 1]);
            }

            let mut distinct = roots.clone();
            distinct.sort();
            distinct.dedup();

            let q = p.to_rational();
            assert_eq!(sturm_root_count(&q).unwrap(), distinct.len(), "distinct roots of {}", p);
            assert_eq!(signature(&q).unwrap(), (real_count, pairs), "signature of {}", p);
        }
    }

    #[test]
    fn test_float_and_exact_paths_agree_on_small_inputs() {
        let inputs = [
            z(&[-2, 0, 0, 1]),
            z(&[0, -1, 0, 1]),
            z(&[1, 0, 1]),
            chebyshev(5),
            from_roots(&[-3, 1, 4]),
        ];
        for p in inputs.iter() {
            assert_eq!(
                sturm_root_count(&p.to_f64()).unwrap(),
                sturm_root_count(&p.to_rational()).unwrap(),
                "root count of {}",
                p
            );
            let exact = discriminant_integer(p).unwrap();
            let float = discriminant(&p.to_f64()).unwrap();
            assert_eq!(BigInt::from(float as i64), exact, "discriminant of {}", p);
        }
    }

    #[test]
    fn test_discriminant_from_roots() {
        // disc of a monic polynomial is the product of (ri - rj)^2
        let roots = [-2i64, 1, 3, 7];
        let mut expected = 1i64;
        for i in 0..roots.len() {
            for j in i + 1..roots.len() {
                expected *= (roots[i] - roots[j]).pow(2);
            }
        }
        assert_eq!(discriminant_integer(&from_roots(&roots)).unwrap(), BigInt::from(expected));
    }
}

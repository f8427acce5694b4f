// src/ideals/minkowski.rs

use num::{BigInt, Signed, ToPrimitive};
use std::f64::consts::PI;

/// Minkowski bound `(4/π)^r2 · n! / n^n · sqrt(|disc|)`.
///
/// `n! / n^n` is accumulated as the product of `k / n` so large degrees do
/// not overflow before the square root is applied.
pub fn minkowski_bound(degree: usize, r2: usize, discriminant: &BigInt) -> f64 {
    let n = degree as f64;
    let factorial_ratio: f64 = (1..=degree).map(|k| k as f64 / n).product();
    let root = discriminant
        .abs()
        .to_f64()
        .unwrap_or(f64::INFINITY)
        .sqrt();
    (4.0 / PI).powi(r2 as i32) * factorial_ratio * root
}

/// Largest rational integer that can be the smallest norm of an ideal class
/// representative: the bound rounded down.
pub fn bound_floor(bound: f64) -> u64 {
    if bound.is_nan() || bound < 0.0 {
        return 0;
    }
    // saturates at u64::MAX for huge bounds
    bound.floor() as u64
}

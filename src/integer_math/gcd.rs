// src/integer_math/gcd.rs

pub struct GCD;

impl GCD {
    /// Extended Euclid on machine integers.
    ///
    /// Returns `(g, x, y)` with `a*x + b*y = g` and `g >= 0`.
    pub fn extended_euclid(a: i128, b: i128) -> (i128, i128, i128) {
        let (mut old_r, mut r) = (a, b);
        let (mut old_x, mut x) = (1i128, 0i128);
        let (mut old_y, mut y) = (0i128, 1i128);

        while r != 0 {
            let quotient = old_r.div_euclid(r);
            (old_r, r) = (r, old_r - quotient * r);
            (old_x, x) = (x, old_x - quotient * x);
            (old_y, y) = (y, old_y - quotient * y);
        }

        if old_r < 0 {
            (-old_r, -old_x, -old_y)
        } else {
            (old_r, old_x, old_y)
        }
    }
}

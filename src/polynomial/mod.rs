// src/polynomial/mod.rs

pub mod field;
pub mod polynomial;
pub mod resultant;

pub use field::{common_modulus, frobenius_root, pow_mod, reduce_modulo};
pub use polynomial::Polynomial;
pub use resultant::{discriminant, discriminant_integer, resultant, resultant_integer};

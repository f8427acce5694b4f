// src/ideals/mod.rs

pub mod decomposition;
pub mod minkowski;
pub mod number_field;

pub use decomposition::{decompose_primes, ideals_above, IdealDescriptor, IdealFactorization, PrimeDecomposition};
pub use minkowski::minkowski_bound;
pub use number_field::NumberField;

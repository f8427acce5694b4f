// src/integer_math/mod.rs

pub mod factorization_factory;
pub mod fast_prime_sieve;
pub mod field_element;
pub mod gcd;

pub use factorization_factory::is_probable_prime;
pub use fast_prime_sieve::primes_below;
pub use field_element::FieldElement;

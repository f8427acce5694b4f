// src/factor/mod.rs

pub mod berlekamp;

pub use berlekamp::{factor, factor_monic, Factorization};

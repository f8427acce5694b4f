// src/core/mod.rs

pub mod coefficient;
pub mod factor_multiset;

pub use coefficient::{Field, RealField, Ring};
pub use factor_multiset::FactorMultiset;

// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod factor;
pub mod ideals;
pub mod integer_math;
pub mod matrix;
pub mod polynomial;
pub mod real_roots;

pub use crate::config::NumFieldConfig;
pub use crate::error::{AlgebraError, Result};
pub use crate::factor::{factor, Factorization};
pub use crate::ideals::{IdealDescriptor, IdealFactorization, NumberField, PrimeDecomposition};
pub use crate::integer_math::FieldElement;
pub use crate::polynomial::Polynomial;

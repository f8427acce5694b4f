// src/real_roots/mod.rs

pub mod sturm;

pub use sturm::{
    complex_pair_count, real_roots_with_multiplicity, signature, sturm_root_count, sturm_sequence,
};

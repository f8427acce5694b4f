// src/config/mod.rs

pub mod numfield_config;

pub use numfield_config::{init_logging, DecompositionConfig, NumFieldConfig};

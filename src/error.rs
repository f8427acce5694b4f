// src/error.rs

use thiserror::Error;

/// Failures raised by the field, polynomial and number-field routines.
///
/// Every variant signals a violated precondition on the caller's side; none
/// of them is retried or recovered from internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    #[error("field elements have different moduli ({left} and {right})")]
    IncompatibleModulus { left: u64, right: u64 },

    #[error("{value} is not invertible modulo {modulus}")]
    NotInvertible { value: String, modulus: String },

    #[error("real coefficients required: {0}")]
    NotReal(String),

    #[error("invalid coefficient field: {0}")]
    InvalidField(String),

    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

pub type Result<T> = std::result::Result<T, AlgebraError>;

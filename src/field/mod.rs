//! GF(2^8) field tables and scalar arithmetic
//!
//! This module provides the log/antilog tables for a primitive polynomial
//! and the table-driven scalar operations built on top of them.

pub mod gf256;
pub mod table;

pub use gf256::Gf256;
pub use table::{carryless_mul, FieldTable, PRIMITIVE_POLY_11D, PRIMITIVE_POLY_12D};

/// Error types for field and polynomial operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Polynomial size must be greater than zero")]
    ZeroSizePolynomial,

    #[error("Polynomial {0:#05x} is not of degree 8")]
    InvalidPolynomial(u16),

    #[error("Polynomial {0:#05x} is not primitive: 2 does not generate the field")]
    NonPrimitivePolynomial(u16),

    #[error("Failed to allocate {requested} coefficient slots")]
    AllocationFailed { requested: usize },
}

/// Result type for field operations
pub type FieldResult<T> = Result<T, FieldError>;

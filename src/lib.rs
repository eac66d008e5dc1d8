//! rsfield: table-driven GF(2^8) arithmetic for Reed-Solomon codes
//!
//! This library builds log/antilog tables for a primitive polynomial and
//! layers scalar and polynomial arithmetic on top of them.

pub mod arithmetic;
pub mod field;
pub mod polynomial;
pub mod util;

// Re-export commonly used types
pub use arithmetic::field::Element;
pub use arithmetic::traits::{BinaryField, Field};
pub use field::{FieldError, FieldResult, FieldTable, Gf256};
pub use polynomial::{poly_add, poly_mul, Polynomial};

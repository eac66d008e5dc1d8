use std::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{One, Zero};

/// Trait for field elements with basic arithmetic operations
pub trait Field:
    Sized
    + Copy
    + PartialEq
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
{
    /// Returns the characteristic of the field
    fn characteristic() -> u64;

    /// Returns the number of elements in the field
    fn order() -> u64;

    /// Returns the multiplicative inverse of this element
    fn inverse(&self) -> Option<Self>;

    /// Squares this element
    fn square(&self) -> Self {
        *self * *self
    }

    /// Raises this element to a power
    fn pow(&self, exp: u64) -> Self;

    /// Generates a uniformly random element
    fn random() -> Self;
}

/// Trait for binary extension fields GF(2^m) defined by a primitive polynomial
pub trait BinaryField: Field {
    /// Extension degree m
    fn degree() -> u32;

    /// The reduction polynomial, including the x^m term
    fn primitive_polynomial() -> u16;

    /// The element whose powers enumerate every nonzero element
    fn generator() -> Self;
}

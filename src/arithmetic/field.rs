use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use lazy_static::lazy_static;
use num_traits::{One, Zero};

use crate::arithmetic::traits::{BinaryField, Field};
use crate::field::{Gf256, PRIMITIVE_POLY_11D};

lazy_static! {
    static ref STANDARD_FIELD: Gf256 = Gf256::standard();
}

/// An element of GF(2^8) under the 0x11D polynomial
///
/// Arithmetic goes through the shared log/antilog tables; addition and
/// subtraction are both XOR.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Element(pub u8);

impl Element {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Element {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Element> for u8 {
    fn from(element: Element) -> Self {
        element.0
    }
}

impl Field for Element {
    fn characteristic() -> u64 {
        2
    }

    fn order() -> u64 {
        256
    }

    fn inverse(&self) -> Option<Self> {
        STANDARD_FIELD.checked_inverse(self.0).ok().map(Self)
    }

    /// `0^0` is taken to be one, matching `num_traits::pow`.
    fn pow(&self, exp: u64) -> Self {
        if self.0 == 0 {
            return if exp == 0 { Self::one() } else { Self::zero() };
        }
        Self(STANDARD_FIELD.pow(self.0, (exp % 255) as u32))
    }

    fn random() -> Self {
        Self(rand::random())
    }
}

impl BinaryField for Element {
    fn degree() -> u32 {
        8
    }

    fn primitive_polynomial() -> u16 {
        PRIMITIVE_POLY_11D
    }

    fn generator() -> Self {
        Self(2)
    }
}

impl Zero for Element {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl One for Element {
    fn one() -> Self {
        Self(1)
    }
}

impl Add for Element {
    type Output = Self;

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }
}

impl Sub for Element {
    type Output = Self;

    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }
}

impl Mul for Element {
    type Output = Self;

    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self(STANDARD_FIELD.mul(self.0, other.0))
    }
}

impl Div for Element {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        match STANDARD_FIELD.div(self.0, rhs.0) {
            Ok(value) if !rhs.is_zero() => Self(value),
            _ => panic!("Division by zero"),
        }
    }
}

impl Neg for Element {
    type Output = Self;

    // Characteristic 2: every element is its own negation
    fn neg(self) -> Self {
        self
    }
}

impl AddAssign for Element {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Element {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl MulAssign for Element {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl DivAssign for Element {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

impl fmt::LowerHex for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

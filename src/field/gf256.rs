//! Table-driven scalar arithmetic in GF(2^8)

use std::fmt;
use std::sync::Arc;

use super::table::{FieldTable, GROUP_ORDER, PRIMITIVE_POLY_11D};
use super::{FieldError, FieldResult};

/// Handle to GF(2^8) for one primitive polynomial.
///
/// Cloning is cheap: every clone shares the same [`FieldTable`].
#[derive(Clone)]
pub struct Gf256 {
    table: Arc<FieldTable>,
}

impl Gf256 {
    /// Field defined by `poly`, which must be primitive (see [`FieldTable::build`]).
    pub fn new(poly: u16) -> Self {
        Self {
            table: FieldTable::shared(poly),
        }
    }

    /// Field defined by `poly`, rejecting polynomials that do not define GF(2^8).
    pub fn try_new(poly: u16) -> FieldResult<Self> {
        Ok(Self {
            table: FieldTable::try_shared(poly)?,
        })
    }

    /// Field defined by 0x11D
    pub fn standard() -> Self {
        Self::new(PRIMITIVE_POLY_11D)
    }

    /// Wraps an explicitly constructed table.
    pub fn from_table(table: Arc<FieldTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &FieldTable {
        &self.table
    }

    pub fn poly(&self) -> u16 {
        self.table.poly()
    }

    #[inline]
    pub fn add(&self, x0: u8, x1: u8) -> u8 {
        x0 ^ x1
    }

    #[inline]
    pub fn sub(&self, x0: u8, x1: u8) -> u8 {
        x0 ^ x1
    }

    #[inline]
    pub fn mul(&self, x0: u8, x1: u8) -> u8 {
        if x0 == 0 || x1 == 0 {
            return 0;
        }
        let log = self.table.log();
        // Both logs are below 255, so one subtraction reduces the sum
        let mut sum = log[x0 as usize] as usize + log[x1 as usize] as usize;
        if sum >= GROUP_ORDER {
            sum -= GROUP_ORDER;
        }
        self.table.exp()[sum]
    }

    /// Divides `x0` by `x1`.
    ///
    /// Returns [`FieldError::DivisionByZero`] when `x1` is zero and `x0` is not;
    /// zero divided by anything is zero.
    #[inline]
    pub fn div(&self, x0: u8, x1: u8) -> FieldResult<u8> {
        if x0 == 0 {
            return Ok(0);
        }
        if x1 == 0 {
            return Err(FieldError::DivisionByZero);
        }
        let log = self.table.log();
        let mut diff = log[x0 as usize] as isize - log[x1 as usize] as isize;
        if diff < 0 {
            diff += GROUP_ORDER as isize;
        }
        Ok(self.table.exp()[diff as usize])
    }

    /// Raises `x` to the power `p`.
    ///
    /// # Panics
    ///
    /// Panics on `pow(0, 0)`, which has no value in the field.
    pub fn pow(&self, x: u8, p: u32) -> u8 {
        if x == 0 {
            assert!(p != 0, "0^0 is undefined in GF(2^8)");
            return 0;
        }
        let e = u64::from(self.table.log()[x as usize]) * u64::from(p) % GROUP_ORDER as u64;
        self.table.exp()[e as usize]
    }

    /// Multiplicative inverse of `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is zero. Use [`Gf256::checked_inverse`] to get an error instead.
    pub fn inverse(&self, x: u8) -> u8 {
        assert!(x != 0, "zero has no multiplicative inverse");
        self.table.exp()[GROUP_ORDER - self.table.log()[x as usize] as usize]
    }

    pub fn checked_inverse(&self, x: u8) -> FieldResult<u8> {
        if x == 0 {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.inverse(x))
    }

    /// `2^i`, with `i` taken modulo the group order
    pub fn exp(&self, i: usize) -> u8 {
        self.table.exp()[i % GROUP_ORDER]
    }

    /// Discrete logarithm of `x`, or `None` for zero
    pub fn log(&self, x: u8) -> Option<u8> {
        (x != 0).then(|| self.table.log()[x as usize])
    }
}

impl Default for Gf256 {
    fn default() -> Self {
        Self::standard()
    }
}

impl PartialEq for Gf256 {
    fn eq(&self, other: &Self) -> bool {
        self.poly() == other.poly()
    }
}

impl Eq for Gf256 {}

impl fmt::Debug for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^8)[{:#05x}]", self.poly())
    }
}

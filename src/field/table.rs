//! Log/antilog tables for GF(2^8)
//!
//! Tables are built once per primitive polynomial and shared read-only
//! through [`FieldTable::shared`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use lazy_static::lazy_static;
use tracing::{debug, trace, warn};

use super::{FieldError, FieldResult};

/// x^8 + x^4 + x^3 + x^2 + 1, the usual Reed-Solomon / QR code choice
pub const PRIMITIVE_POLY_11D: u16 = 0x11D;

/// x^8 + x^5 + x^3 + x^2 + 1
pub const PRIMITIVE_POLY_12D: u16 = 0x12D;

/// Order of the multiplicative group
pub const GROUP_ORDER: usize = 255;

const GENERATOR: u8 = 2;

lazy_static! {
    static ref TABLE_CACHE: RwLock<HashMap<u16, Arc<FieldTable>>> = RwLock::new(HashMap::new());
}

/// Multiplies two field elements bit by bit, reducing by `poly`.
///
/// This is the Russian-peasant multiply used to bootstrap the tables, so it
/// never consults one.
pub fn carryless_mul(x0: u8, x1: u8, poly: u16) -> u8 {
    let mut a = u16::from(x0);
    let mut b = x1;
    let mut result = 0u16;

    while b > 0 {
        if b & 1 == 1 {
            result ^= a;
        }
        b >>= 1;
        a <<= 1;
        if a >= 0x100 {
            a ^= poly;
        }
    }

    (result & 0xFF) as u8
}

/// Exponent and logarithm tables for the field defined by one primitive polynomial.
///
/// `exp[i] = 2^i` for `i` in `0..=255`; since the group order is 255,
/// `exp[255] == exp[0] == 1`. `log[e]` is the discrete logarithm of every
/// nonzero `e`. `log[0]` is a placeholder and carries no meaning.
#[derive(Clone, PartialEq, Eq)]
pub struct FieldTable {
    poly: u16,
    exp: [u8; 256],
    log: [u8; 256],
}

impl FieldTable {
    /// Builds the tables for `poly`.
    ///
    /// `poly` must be a primitive degree-8 polynomial (bit 8 set, 2 generating
    /// every nonzero element). Anything else is a precondition violation and
    /// yields meaningless tables; use [`FieldTable::try_build`] for untrusted
    /// input.
    pub fn build(poly: u16) -> Self {
        debug_assert!(
            (0x100..=0x1FF).contains(&poly),
            "primitive polynomial {poly:#05x} must have degree 8"
        );

        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];
        let mut x = 1u8;

        for (i, slot) in exp.iter_mut().enumerate() {
            *slot = x;
            // exp[255] repeats exp[0]; keep log[1] == 0
            if i < GROUP_ORDER {
                log[x as usize] = i as u8;
            }
            x = carryless_mul(x, GENERATOR, poly);
        }

        debug!("built GF(2^8) tables for {poly:#05x}");
        Self { poly, exp, log }
    }

    /// Builds the tables after checking that `poly` really defines the field.
    pub fn try_build(poly: u16) -> FieldResult<Self> {
        check_degree(poly)?;
        let table = Self::build(poly);
        table.check_generator()?;
        Ok(table)
    }

    fn check_generator(&self) -> FieldResult<()> {
        let mut seen = [false; 256];
        for &e in &self.exp[..GROUP_ORDER] {
            if e == 0 || seen[e as usize] {
                warn!("rejected {:#05x}: 2 does not generate the field", self.poly);
                return Err(FieldError::NonPrimitivePolynomial(self.poly));
            }
            seen[e as usize] = true;
        }
        Ok(())
    }

    /// Returns the process-wide table for `poly`, building it on first use.
    ///
    /// Same precondition as [`FieldTable::build`].
    pub fn shared(poly: u16) -> Arc<FieldTable> {
        if let Some(table) = Self::cached(poly) {
            trace!("table cache hit for {poly:#05x}");
            return table;
        }
        Self::insert_with(poly, || Self::build(poly))
    }

    /// Like [`FieldTable::shared`], but validates `poly` first.
    ///
    /// Rejected polynomials are never added to the cache.
    pub fn try_shared(poly: u16) -> FieldResult<Arc<FieldTable>> {
        check_degree(poly)?;
        if let Some(table) = Self::cached(poly) {
            // A cache hit may come from an unchecked `shared` call
            table.check_generator()?;
            return Ok(table);
        }
        let table = Self::try_build(poly)?;
        Ok(Self::insert_with(poly, || table))
    }

    fn cached(poly: u16) -> Option<Arc<FieldTable>> {
        // Tables are immutable, so a poisoned lock still guards valid data
        TABLE_CACHE
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&poly)
            .cloned()
    }

    fn insert_with<F>(poly: u16, build: F) -> Arc<FieldTable>
    where
        F: FnOnce() -> FieldTable,
    {
        let mut cache = TABLE_CACHE.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry(poly).or_insert_with(|| Arc::new(build())))
    }

    /// The shared table for [`PRIMITIVE_POLY_11D`].
    pub fn standard() -> Arc<FieldTable> {
        Self::shared(PRIMITIVE_POLY_11D)
    }

    /// The defining primitive polynomial
    pub fn poly(&self) -> u16 {
        self.poly
    }

    /// Antilogarithm table, `exp[i] = 2^i`
    pub fn exp(&self) -> &[u8; 256] {
        &self.exp
    }

    /// Logarithm table; entry 0 is a placeholder
    pub fn log(&self) -> &[u8; 256] {
        &self.log
    }
}

fn check_degree(poly: u16) -> FieldResult<()> {
    if (0x100..=0x1FF).contains(&poly) {
        Ok(())
    } else {
        warn!("rejected {poly:#05x}: not a degree-8 polynomial");
        Err(FieldError::InvalidPolynomial(poly))
    }
}

impl fmt::Debug for FieldTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldTable")
            .field("poly", &format_args!("{:#05x}", self.poly))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carryless_mul_reduces() {
        assert_eq!(carryless_mul(0x80, 2, PRIMITIVE_POLY_11D), 0x1D);
        assert_eq!(carryless_mul(0x53, 0xCA, 0x11B), 0x01);
        assert_eq!(carryless_mul(0, 0x77, PRIMITIVE_POLY_11D), 0);
    }

    #[test]
    fn test_exp_period() {
        let table = FieldTable::build(PRIMITIVE_POLY_11D);
        assert_eq!(table.exp()[255], table.exp()[0]);
        assert_eq!(table.log()[1], 0);
    }

    #[test]
    fn test_try_build_rejects_bad_polynomials() {
        assert_eq!(FieldTable::try_build(0x1D), Err(FieldError::InvalidPolynomial(0x1D)));
        // AES polynomial is irreducible, but 2 only has order 51 there
        assert_eq!(
            FieldTable::try_build(0x11B),
            Err(FieldError::NonPrimitivePolynomial(0x11B))
        );
        assert!(FieldTable::try_build(PRIMITIVE_POLY_12D).is_ok());
    }

    #[test]
    fn test_try_shared_does_not_cache_rejected_polynomial() {
        assert_eq!(
            FieldTable::try_shared(0x1FF).unwrap_err(),
            FieldError::NonPrimitivePolynomial(0x1FF)
        );
        assert!(FieldTable::cached(0x1FF).is_none());

        let table = FieldTable::try_shared(PRIMITIVE_POLY_12D).unwrap();
        assert!(Arc::ptr_eq(&table, &FieldTable::shared(PRIMITIVE_POLY_12D)));
    }

    #[test]
    fn test_shared_returns_same_instance() {
        let a = FieldTable::shared(PRIMITIVE_POLY_11D);
        let b = FieldTable::standard();
        assert!(Arc::ptr_eq(&a, &b));
    }
}

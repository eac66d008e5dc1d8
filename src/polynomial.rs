use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul};

use crate::field::{FieldError, FieldResult, Gf256};

/// Coefficient slots are allocated in multiples of this
const GROWTH_GRANULARITY: usize = 16;

/// A polynomial over GF(2^8)
///
/// Coefficients are stored from the highest degree down: index 0 is the
/// leading coefficient and index `size - 1` is the constant term. The
/// backing buffer holds `capacity` slots, and every slot past `size` is zero.
#[derive(Clone)]
pub struct Polynomial {
    field: Gf256,
    coefficients: Vec<u8>,
    size: usize,
}

fn rounded_capacity(size: usize) -> FieldResult<usize> {
    size
        .checked_next_multiple_of(GROWTH_GRANULARITY)
        .ok_or(FieldError::AllocationFailed { requested: size })
}

impl Polynomial {
    /// Creates a zero polynomial with `size` coefficients.
    ///
    /// Fails with [`FieldError::ZeroSizePolynomial`] if `size` is zero.
    pub fn new(field: &Gf256, size: usize) -> FieldResult<Self> {
        if size == 0 {
            return Err(FieldError::ZeroSizePolynomial);
        }

        let capacity = rounded_capacity(size)?;
        let mut coefficients = Vec::new();
        coefficients
            .try_reserve_exact(capacity)
            .map_err(|_| FieldError::AllocationFailed { requested: capacity })?;
        coefficients.resize(capacity, 0);

        Ok(Self {
            field: field.clone(),
            coefficients,
            size,
        })
    }

    /// Creates a polynomial from coefficients given highest degree first.
    pub fn from_coefficients(field: &Gf256, coefficients: &[u8]) -> FieldResult<Self> {
        let mut poly = Self::new(field, coefficients.len())?;
        poly.coefficients[..coefficients.len()].copy_from_slice(coefficients);
        Ok(poly)
    }

    // Infallible constructor for the operator impls; `coefficients` is non-empty.
    // A `Vec<u8>` never exceeds `isize::MAX` bytes, so rounding cannot overflow.
    fn from_vec(field: &Gf256, mut coefficients: Vec<u8>) -> Self {
        let size = coefficients.len();
        coefficients.resize(size.next_multiple_of(GROWTH_GRANULARITY), 0);
        Self {
            field: field.clone(),
            coefficients,
            size,
        }
    }

    pub fn field(&self) -> &Gf256 {
        &self.field
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn capacity(&self) -> usize {
        self.coefficients.len()
    }

    /// Sets the logical size to `new_size`.
    ///
    /// The buffer only grows when `new_size` exceeds the capacity; existing
    /// coefficients keep their indices and new slots read as zero. Shrinking
    /// clears the dropped coefficients.
    pub fn resize(&mut self, new_size: usize) -> FieldResult<()> {
        if new_size == 0 {
            return Err(FieldError::ZeroSizePolynomial);
        }

        if new_size > self.capacity() {
            let capacity = rounded_capacity(new_size)?;
            self.coefficients
                .try_reserve_exact(capacity - self.coefficients.len())
                .map_err(|_| FieldError::AllocationFailed { requested: capacity })?;
            self.coefficients.resize(capacity, 0);
        } else if new_size < self.size {
            self.coefficients[new_size..self.size].fill(0);
        }

        self.size = new_size;
        Ok(())
    }

    /// The `size` live coefficients, highest degree first
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients[..self.size]
    }

    pub fn coefficients_mut(&mut self) -> &mut [u8] {
        &mut self.coefficients[..self.size]
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.coefficients().get(index).copied()
    }

    /// Returns the degree of the polynomial, ignoring leading zeros
    pub fn degree(&self) -> usize {
        self.coefficients()
            .iter()
            .position(|&c| c != 0)
            .map_or(0, |lead| self.size - 1 - lead)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients().iter().all(|&c| c == 0)
    }

    /// Evaluates the polynomial at `x` using Horner's method
    pub fn eval(&self, x: u8) -> u8 {
        let coefficients = self.coefficients();
        coefficients[1..]
            .iter()
            .fold(coefficients[0], |y, &c| self.field.mul(y, x) ^ c)
    }

    /// Multiplies every coefficient by `c` in place.
    pub fn scale(&mut self, c: u8) {
        let field = self.field.clone();
        for coeff in self.coefficients_mut() {
            *coeff = field.mul(*coeff, c);
        }
    }
}

impl Index<usize> for Polynomial {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        assert!(
            index < self.size,
            "coefficient index {index} out of range for polynomial of size {}",
            self.size
        );
        &self.coefficients[index]
    }
}

impl IndexMut<usize> for Polynomial {
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        assert!(
            index < self.size,
            "coefficient index {index} out of range for polynomial of size {}",
            self.size
        );
        &mut self.coefficients[index]
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.coefficients() == other.coefficients()
    }
}

impl Eq for Polynomial {}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("field", &self.field)
            .field("coefficients", &self.coefficients())
            .finish()
    }
}

fn assert_same_field(x0: &Polynomial, x1: &Polynomial) {
    assert_eq!(
        x0.field, x1.field,
        "polynomials must be defined over the same field"
    );
}

/// XORs `src` into the low-degree end of `out`
fn xor_aligned(out: &mut [u8], src: &[u8]) {
    let offset = out.len() - src.len();
    for (o, &s) in out[offset..].iter_mut().zip(src) {
        *o ^= s;
    }
}

fn convolve(field: &Gf256, out: &mut [u8], x0: &[u8], x1: &[u8]) {
    for (i, &b) in x1.iter().enumerate() {
        if b == 0 {
            continue;
        }
        for (j, &a) in x0.iter().enumerate() {
            out[i + j] ^= field.mul(a, b);
        }
    }
}

/// Adds two polynomials into `result`.
///
/// The operands are aligned on their constant terms, so the shorter one is
/// padded with zeros on the high-degree side. `result` ends up with
/// `max(x0.size(), x1.size())` coefficients.
pub fn poly_add(result: &mut Polynomial, x0: &Polynomial, x1: &Polynomial) -> FieldResult<()> {
    assert_same_field(x0, x1);
    assert_same_field(result, x0);

    let size = x0.size.max(x1.size);
    result.resize(size)?;

    let out = result.coefficients_mut();
    out.fill(0);
    xor_aligned(out, x0.coefficients());
    xor_aligned(out, x1.coefficients());
    Ok(())
}

/// Multiplies two polynomials into `result`.
///
/// `result` ends up with `x0.size() + x1.size() - 1` coefficients.
pub fn poly_mul(result: &mut Polynomial, x0: &Polynomial, x1: &Polynomial) -> FieldResult<()> {
    assert_same_field(x0, x1);
    assert_same_field(result, x0);

    result.resize(x0.size + x1.size - 1)?;

    let field = x0.field.clone();
    let out = result.coefficients_mut();
    out.fill(0);
    convolve(&field, out, x0.coefficients(), x1.coefficients());
    Ok(())
}

/// Sum of two polynomials with the same semantics as [`poly_add`].
///
/// The result buffer is allocated like any `Vec`, so running out of memory
/// aborts instead of returning [`FieldError::AllocationFailed`]; use
/// [`poly_add`] when that must be handled.
impl<'a> Add for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, other: Self) -> Self::Output {
        assert_same_field(self, other);

        let mut out = vec![0u8; self.size.max(other.size)];
        xor_aligned(&mut out, self.coefficients());
        xor_aligned(&mut out, other.coefficients());
        Polynomial::from_vec(&self.field, out)
    }
}

/// Product of two polynomials with the same semantics as [`poly_mul`].
///
/// Allocation failure aborts, as for `Add`; use [`poly_mul`] to handle it.
impl<'a> Mul for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Self) -> Self::Output {
        assert_same_field(self, other);

        let mut out = vec![0u8; self.size + other.size - 1];
        convolve(&self.field, &mut out, self.coefficients(), other.coefficients());
        Polynomial::from_vec(&self.field, out)
    }
}

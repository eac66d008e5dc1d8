use num_traits::{One, Zero};
use proptest::prelude::*;
use rsfield::field::{carryless_mul, FieldError, PRIMITIVE_POLY_11D, PRIMITIVE_POLY_12D};
use rsfield::{Element, Field, Gf256};

prop_compose! {
    fn arb_nonzero()(value in 1u8..=255) -> u8 {
        value
    }
}

proptest! {
    #[test]
    fn test_field_addition_properties(a in any::<u8>(), b in any::<u8>()) {
        let gf = Gf256::standard();

        prop_assert_eq!(gf.add(a, b), a ^ b);
        prop_assert_eq!(gf.sub(a, b), gf.add(a, b));

        // Self-inverse: (a + b) + b = a
        prop_assert_eq!(gf.add(gf.add(a, b), b), a);
    }

    #[test]
    fn test_field_multiplication_properties(
        a in any::<u8>(),
        b in any::<u8>(),
        c in any::<u8>()
    ) {
        let gf = Gf256::standard();

        // Commutativity
        prop_assert_eq!(gf.mul(a, b), gf.mul(b, a));

        // Identity and annihilator
        prop_assert_eq!(gf.mul(a, 1), a);
        prop_assert_eq!(gf.mul(a, 0), 0);

        // Associativity
        prop_assert_eq!(gf.mul(gf.mul(a, b), c), gf.mul(a, gf.mul(b, c)));

        // Distributivity
        prop_assert_eq!(gf.mul(a, b ^ c), gf.mul(a, b) ^ gf.mul(a, c));
    }

    #[test]
    fn test_field_inverse_properties(a in arb_nonzero()) {
        let gf = Gf256::standard();

        prop_assert_eq!(gf.mul(a, gf.inverse(a)), 1);
        prop_assert_eq!(gf.checked_inverse(a), Ok(gf.inverse(a)));
    }

    #[test]
    fn test_field_division_properties(a in any::<u8>(), b in arb_nonzero()) {
        let gf = Gf256::standard();

        let q = gf.div(a, b).unwrap();
        prop_assert_eq!(gf.mul(q, b), a);
    }

    #[test]
    fn test_field_exponentiation_properties(
        a in arb_nonzero(),
        b in 0u32..600,
        c in 0u32..600
    ) {
        let gf = Gf256::standard();

        prop_assert_eq!(gf.pow(a, 0), 1);
        prop_assert_eq!(gf.pow(a, 1), a);
        prop_assert_eq!(gf.pow(a, 254), gf.inverse(a));

        // a^(b+c) = a^b * a^c
        prop_assert_eq!(gf.pow(a, b + c), gf.mul(gf.pow(a, b), gf.pow(a, c)));
    }

    #[test]
    fn test_element_matches_scalar_ops(a in any::<u8>(), b in any::<u8>()) {
        let gf = Gf256::standard();
        let (ea, eb) = (Element(a), Element(b));

        prop_assert_eq!((ea + eb).value(), gf.add(a, b));
        prop_assert_eq!((ea * eb).value(), gf.mul(a, b));
        if b != 0 {
            prop_assert_eq!((ea / eb).value(), gf.div(a, b).unwrap());
        }
    }
}

#[test]
fn test_table_mul_agrees_with_carryless_mul() {
    for poly in [PRIMITIVE_POLY_11D, PRIMITIVE_POLY_12D] {
        let gf = Gf256::new(poly);
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(gf.mul(a, b), carryless_mul(a, b, poly), "{a} * {b} under {poly:#x}");
            }
        }
    }
}

#[test]
fn test_division_by_zero_is_distinct() {
    let gf = Gf256::standard();
    for a in 1..=255u8 {
        assert_eq!(gf.div(a, 0), Err(FieldError::DivisionByZero));
    }
    assert_eq!(gf.div(0, 0), Ok(0));
    assert_eq!(gf.div(0, 9), Ok(0));
}

#[test]
fn test_field_edge_cases() {
    let zero = Element::zero();
    let one = Element::one();
    let a = Element(0x8E);

    assert_eq!(a + zero, a);
    assert_eq!(a * zero, zero);
    assert_eq!(a * one, a);
    assert_eq!(a * a.inverse().unwrap(), one);
    assert_eq!(a.square(), a * a);
    assert_eq!(a.pow(255), one);
}

#[test]
fn test_fields_with_different_polynomials_differ() {
    let standard = Gf256::new(PRIMITIVE_POLY_11D);
    let other = Gf256::new(PRIMITIVE_POLY_12D);

    assert_eq!(standard.mul(0x80, 2), 0x1D);
    assert_eq!(other.mul(0x80, 2), 0x2D);
}

//! Parameters of the SECG Koblitz curve K-409 (sect409k1)
//!
//! The curve `y² + xy = x³ + 1` over GF(2^409) with the reduction trinomial
//! `x^409 + x^87 + 1`, the SEC 2 base point, and the order of the base-point
//! subgroup.

use crate::ec::{AffinePoint, LopezDahabCurve, NonSupersingularCurve};
use crate::ff::{poly_from_exponents, F2m};
use num_bigint::BigUint;

/// Power of the K-409 base field GF(2^409).
pub const POWER: u64 = 409;

// SEC 2 base point, big-endian hex
const G_X: &[u8] =
    b"060f05f658f49c1ad3ab1890f7184210efd0987e307c84c27accfb8f9f67cc2c460189eb5aaaa62ee222eb1b35540cfe9023746";
const G_Y: &[u8] =
    b"1e369050b7c4e42acba1dacbf04299c3460782f918ea427e6325165e9ea10e3da5f6c42e9c55215aa9ca27a5863ec48d8e0286b";

// Order of the base-point subgroup
const ORDER: &[u8] =
    b"7ffffffffffffffffffffffffffffffffffffffffffffffffffe5f83b2d4ea20400ec4557d5ed3e3e7ca5b4b5c83b8e01e5fcf";

/// Reduction trinomial `x^409 + x^87 + 1` of the K-409 base field.
pub fn reduction_poly() -> BigUint {
    poly_from_exponents(&[409, 87, 0])
}

fn parse_hex(digits: &[u8]) -> BigUint {
    BigUint::parse_bytes(digits, 16).expect("K-409 constants are valid hex")
}

/// An element of the K-409 base field.
pub fn field_element(n: BigUint) -> F2m {
    F2m::with_generator(n, POWER, reduction_poly()).expect("K-409 parameters are valid")
}

/// The standard base point G of the K-409 curve.
pub fn base_point() -> AffinePoint {
    AffinePoint::new(field_element(parse_hex(G_X)), field_element(parse_hex(G_Y)))
}

/// The order of the K-409 base-point subgroup.
pub fn order() -> BigUint {
    parse_hex(ORDER)
}

/// The fully configured K-409 curve in affine coordinates.
pub fn curve() -> NonSupersingularCurve {
    let a = field_element(BigUint::from(0u32));
    let b = field_element(BigUint::from(1u32));
    let mut c = NonSupersingularCurve::new(a, b).expect("K-409 parameters are valid");
    c.set_base_point(base_point());
    c.set_order(order());
    c
}

/// The fully configured K-409 curve in López–Dahab coordinates.
pub fn lopez_dahab_curve() -> LopezDahabCurve {
    let a = field_element(BigUint::from(0u32));
    let b = field_element(BigUint::from(1u32));
    let mut c = LopezDahabCurve::new(a, b).expect("K-409 parameters are valid");
    c.set_base_point(base_point());
    c.set_order(order());
    c
}

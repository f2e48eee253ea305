use super::*;
use crate::error::Error;
use crate::ff::F2m;
use num_bigint::BigUint;

fn hex(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 16).unwrap()
}

fn k409_point(x: &str, y: &str) -> AffinePoint {
    AffinePoint::new(k409::field_element(hex(x)), k409::field_element(hex(y)))
}

// Test vectors on K-409: P, Q, P + Q and 2P
const P_X: &str = "bb211afe3cd3b8dd09d7eebe164ec4c7545644f8fc77b8717a68780275415f2164dbdfa68c68c9b31da7f6cd6bcc6ca3fe24ea";
const P_Y: &str = "1ee223ed628c39a048205b69bb9c39d772479507a409188400690932e36527dde84c85dbef10a7097a0026083786881fe778049";
const Q_X: &str = "171b03b1ba0e13d12269bae50ba74a124934b3c0f40da1ee2191154b391e95a9159cdf54cd76bd9cf37fdee5fc16a3b186a0078";
const Q_Y: &str = "1dfefc3b383f261f3c53e651aa97748ec837e0e5c90af39e249707a726ad6f449c6488d55e50089a60000cc89053051486e7aa3";
const P_PLUS_Q_X: &str = "18def7e87e321eae941cab93855a99d2cfcfcf453b9acee13a0286ce064eb5dec735043badd55145fa60cf30578462c564ca966";
const P_PLUS_Q_Y: &str = "1ee927c846f6f215ce2f659153d68efcabf0f116618e3c395519787171e9314d092b01dafeea3503817ed7537649964636481a8";
const P_DOUBLE_X: &str = "1574f7c0c67af8ae69ea928f7c29be520a729a3bca47cfbc5f2f3d748a959a4238697361029233b82c36e58dd141d84dab87b42";
const P_DOUBLE_Y: &str = "1e26bdee445c0955ee91c4fca385016db6d03f852a4cb1bf0e4f68f38cd6580ff22b2b9b47efe6c99af7483027e45af9adf981";

#[test]
fn test_k409_addition() {
    let e = k409::curve();
    let p = k409_point(P_X, P_Y);
    let q = k409_point(Q_X, Q_Y);

    let pq = e.add(&p, &q).unwrap();
    assert_eq!(pq, k409_point(P_PLUS_Q_X, P_PLUS_Q_Y));
}

#[test]
fn test_k409_double() {
    let e = k409::curve();
    let p = k409_point(P_X, P_Y);

    let p2 = e.double(&p).unwrap();
    assert_eq!(p2, k409_point(P_DOUBLE_X, P_DOUBLE_Y));
}

#[test]
fn test_k409_addition_commutes() {
    let e = k409::curve();
    let p = k409_point(P_X, P_Y);
    let q = k409_point(Q_X, Q_Y);

    assert_eq!(e.add(&p, &q).unwrap(), e.add(&q, &p).unwrap());
}

#[test]
fn test_add_identity() {
    let e = k409::curve();
    let p = k409_point(P_X, P_Y);
    let inf = AffinePoint::infinity();

    assert_eq!(e.add(&p, &inf).unwrap(), p);
    assert_eq!(e.add(&inf, &p).unwrap(), p);
    assert_eq!(e.add(&inf, &inf).unwrap(), inf);
}

#[test]
fn test_mutual_inverses() {
    let e = k409::curve();
    let p = k409_point(P_X, P_Y);
    let (x, y) = p.xy().unwrap();

    // The inverse of (x, y) is (x, x + y)
    let neg = AffinePoint::new(x.clone(), x.add(y).unwrap());
    assert!(matches!(e.contains(&neg), Ok(true)));
    assert_eq!(e.add(&p, &neg).unwrap(), AffinePoint::Infinity);
}

#[test]
fn test_scalar_mul_small_multiples() {
    let e = k409::curve();
    let p = k409_point(P_X, P_Y);

    assert_eq!(
        e.scalar_mul(&BigUint::from(0u32), &p).unwrap(),
        AffinePoint::Infinity
    );
    assert_eq!(e.scalar_mul(&BigUint::from(1u32), &p).unwrap(), p);
    assert_eq!(
        e.scalar_mul(&BigUint::from(2u32), &p).unwrap(),
        e.double(&p).unwrap()
    );
    let p2 = e.double(&p).unwrap();
    assert_eq!(
        e.scalar_mul(&BigUint::from(3u32), &p).unwrap(),
        e.add(&p2, &p).unwrap()
    );
}

#[test]
fn test_order_times_base_is_identity() {
    let e = k409::curve();
    let g = e.base_point().unwrap().clone();
    assert!(matches!(e.contains(&g), Ok(true)));

    let product = e.scalar_mul(&k409::order(), &g).unwrap();
    assert_eq!(product, AffinePoint::Infinity);
}

#[test]
fn test_contains_rejects_off_curve_point() {
    let e = k409::curve();
    let p = k409_point(P_X, P_Y);
    assert!(matches!(e.contains(&p), Ok(true)));

    // Perturbing y leaves the curve
    let (x, y) = p.xy().unwrap();
    let off = AffinePoint::new(x.clone(), y.add(&y.one()).unwrap());
    assert!(matches!(e.contains(&off), Ok(false)));

    let err = e.add(&p, &off).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidPoint {
            context: "non-supersingular add"
        }
    );
}

#[test]
fn test_double_at_zero_x_fails() {
    let e = k409::curve();
    // (0, 1) satisfies y² + xy = x³ + 1 but has a vertical tangent
    let p = AffinePoint::new(
        k409::field_element(BigUint::from(0u32)),
        k409::field_element(BigUint::from(1u32)),
    );
    assert!(matches!(e.contains(&p), Ok(true)));
    assert_eq!(
        e.double(&p).unwrap_err(),
        Error::DivisionByZero {
            context: "non-supersingular doubling"
        }
    );
}

// Small-field fixtures over GF(2^4): y² + xy = x³ + 1 holds for
// (8, 7), (6, 0), (10, 12), (1, 0), (0, 1), with 2·(8,7) = (6,0),
// (8,7) + (6,0) = (10,12) and (8,7) + (0,1) = (15,7).
fn gf16_curve(a: u64) -> NonSupersingularCurve {
    NonSupersingularCurve::new(F2m::from_u64(a, 4).unwrap(), F2m::from_u64(1, 4).unwrap()).unwrap()
}

fn gf16_point(x: u64, y: u64) -> AffinePoint {
    AffinePoint::new(F2m::from_u64(x, 4).unwrap(), F2m::from_u64(y, 4).unwrap())
}

#[test]
fn test_small_curve_golden_values() {
    let e = gf16_curve(0);
    assert_eq!(e.double(&gf16_point(8, 7)).unwrap(), gf16_point(6, 0));
    assert_eq!(
        e.add(&gf16_point(8, 7), &gf16_point(6, 0)).unwrap(),
        gf16_point(10, 12)
    );
    assert_eq!(
        e.add(&gf16_point(8, 7), &gf16_point(0, 1)).unwrap(),
        gf16_point(15, 7)
    );
    assert_eq!(e.double(&gf16_point(6, 0)).unwrap(), gf16_point(1, 0));
    assert_eq!(e.double(&gf16_point(1, 0)).unwrap(), gf16_point(0, 1));
}

#[test]
fn test_small_curve_a1_golden_values() {
    // y² + xy = x³ + x² + 1 with a = 1
    let e = gf16_curve(1);
    assert_eq!(e.double(&gf16_point(1, 6)).unwrap(), gf16_point(0, 1));
    assert_eq!(
        e.add(&gf16_point(1, 6), &gf16_point(0, 1)).unwrap(),
        gf16_point(1, 7)
    );
}

fn gf16_ld_curve(a: u64) -> LopezDahabCurve {
    LopezDahabCurve::new(F2m::from_u64(a, 4).unwrap(), F2m::from_u64(1, 4).unwrap()).unwrap()
}

#[test]
fn test_ld_small_curve_matches_affine() {
    let affine = gf16_curve(0);
    let ld = gf16_ld_curve(0);

    let p = gf16_point(8, 7);
    let double = ld.double(&ld.lift(&p)).unwrap();
    assert!(!double.z().is_zero());
    assert_eq!(
        double.to_affine().unwrap(),
        affine.double(&p).unwrap()
    );

    // Mixed addition with a projective accumulator of Z != 1
    let sum = ld.add(&double, &p).unwrap();
    assert!(!sum.z().is_zero());
    assert_eq!(
        sum.to_affine().unwrap(),
        affine.add(&affine.double(&p).unwrap(), &p).unwrap()
    );
}

#[test]
fn test_ld_small_curve_a1_matches_affine() {
    let affine = gf16_curve(1);
    let ld = gf16_ld_curve(1);

    let p = gf16_point(1, 6);
    assert_eq!(
        ld.double(&ld.lift(&p)).unwrap().to_affine().unwrap(),
        affine.double(&p).unwrap()
    );
    assert_eq!(
        ld.add(&ld.lift(&p), &gf16_point(0, 1))
            .unwrap()
            .to_affine()
            .unwrap(),
        affine.add(&p, &gf16_point(0, 1)).unwrap()
    );
}

#[test]
fn test_ld_identity_cases() {
    let ld = k409::lopez_dahab_curve();
    let p = k409_point(P_X, P_Y);

    let identity = ld.identity();
    assert!(identity.is_infinity());
    assert!(ld.double(&identity).unwrap().is_infinity());

    // Infinity plus Q lifts Q; P plus infinity is P
    assert_eq!(ld.add(&identity, &p).unwrap(), ld.lift(&p));
    let lifted = ld.lift(&p);
    assert_eq!(ld.add(&lifted, &AffinePoint::infinity()).unwrap(), lifted);
}

#[test]
fn test_ld_degenerate_branches() {
    let ld = k409::lopez_dahab_curve();
    let p = k409_point(P_X, P_Y);
    let (x, y) = p.xy().unwrap();

    // Coincident operands fall through to doubling
    assert_eq!(
        ld.add(&ld.lift(&p), &p).unwrap(),
        ld.double(&ld.lift(&p)).unwrap()
    );

    // Mutual inverses collapse to the fixed infinity triple
    let neg = AffinePoint::new(x.clone(), x.add(y).unwrap());
    assert!(ld.add(&ld.lift(&p), &neg).unwrap().is_infinity());
}

#[test]
fn test_ld_golden_vectors_via_affine_conversion() {
    let ld = k409::lopez_dahab_curve();
    let p = k409_point(P_X, P_Y);
    let q = k409_point(Q_X, Q_Y);

    let double = ld.double(&ld.lift(&p)).unwrap();
    assert_eq!(
        double.to_affine().unwrap(),
        k409_point(P_DOUBLE_X, P_DOUBLE_Y)
    );

    let sum = ld.add(&ld.lift(&p), &q).unwrap();
    assert_eq!(sum.to_affine().unwrap(), k409_point(P_PLUS_Q_X, P_PLUS_Q_Y));
}

#[test]
fn test_ld_scalar_mul_matches_affine() {
    let affine = k409::curve();
    let ld = k409::lopez_dahab_curve();
    let p = k409_point(P_X, P_Y);

    for k in [2u64, 3, 5, 0xf42354] {
        let k = BigUint::from(k);
        let projective = ld.scalar_mul(&k, &p).unwrap();
        assert_eq!(
            projective.to_affine().unwrap(),
            affine.scalar_mul(&k, &p).unwrap(),
            "k = {}",
            k
        );
    }

    let g = ld.base_point().unwrap().clone();
    assert!(ld.scalar_mul(&k409::order(), &g).unwrap().is_infinity());
}

#[test]
fn test_ld_equality_against_affine_requires_unit_z() {
    let ld = k409::lopez_dahab_curve();
    let p = k409_point(P_X, P_Y);

    assert!(ld.lift(&p).eq_affine(&p));
    assert!(ld.identity().eq_affine(&AffinePoint::infinity()));

    // The double has the right affine value but Z != 1
    let double = ld.double(&ld.lift(&p)).unwrap();
    let double_affine = double.to_affine().unwrap();
    assert!(!double.eq_affine(&double_affine));
    assert!(ld.lift(&double_affine).eq_affine(&double_affine));
}

#[test]
fn test_ld_rejects_unsupported_a() {
    let a = F2m::from_u64(2, 4).unwrap();
    let b = F2m::from_u64(1, 4).unwrap();
    assert!(matches!(
        LopezDahabCurve::new(a, b),
        Err(Error::Parameter { .. })
    ));
}

// Supersingular fixtures over GF(2^4): on y² + y = x³ + 1 the points
// (0, 6), (0, 7), (1, 0), (1, 1) and (6, 0) are hand-checked, with
// 2·(0,6) = (0,7), (0,6) + (1,0) = (6,0) and 2·(1,0) = (1,1).
fn supersingular_gf16() -> SupersingularCurve {
    SupersingularCurve::new(
        F2m::from_u64(0, 4).unwrap(),
        F2m::from_u64(1, 4).unwrap(),
        F2m::from_u64(1, 4).unwrap(),
    )
    .unwrap()
}

#[test]
fn test_supersingular_golden_values() {
    let e = supersingular_gf16();
    for (x, y) in [(0, 6), (0, 7), (1, 0), (1, 1), (6, 0)] {
        assert!(
            matches!(e.contains(&gf16_point(x, y)), Ok(true)),
            "({}, {})",
            x,
            y
        );
    }

    assert_eq!(e.double(&gf16_point(0, 6)).unwrap(), gf16_point(0, 7));
    assert_eq!(e.double(&gf16_point(1, 0)).unwrap(), gf16_point(1, 1));
    assert_eq!(
        e.add(&gf16_point(0, 6), &gf16_point(1, 0)).unwrap(),
        gf16_point(6, 0)
    );
}

#[test]
fn test_supersingular_group_structure() {
    let e = supersingular_gf16();
    let p = gf16_point(0, 6);

    // The inverse of (x, y) is (x, y + c); P has order three
    assert_eq!(
        e.add(&p, &gf16_point(0, 7)).unwrap(),
        AffinePoint::Infinity
    );
    assert_eq!(
        e.scalar_mul(&BigUint::from(2u32), &p).unwrap(),
        e.double(&p).unwrap()
    );
    assert_eq!(
        e.scalar_mul(&BigUint::from(3u32), &p).unwrap(),
        AffinePoint::Infinity
    );
    assert_eq!(e.scalar_mul(&BigUint::from(4u32), &p).unwrap(), p);

    // Identity handling and coincident operands
    assert_eq!(e.add(&p, &AffinePoint::infinity()).unwrap(), p);
    assert_eq!(e.add(&p, &p).unwrap(), e.double(&p).unwrap());
}

#[test]
fn test_supersingular_rejects_off_curve_addend() {
    let e = supersingular_gf16();
    let off = gf16_point(2, 2);
    assert!(matches!(e.contains(&off), Ok(false)));
    assert_eq!(
        e.add(&gf16_point(0, 6), &off).unwrap_err(),
        Error::InvalidPoint {
            context: "supersingular add"
        }
    );
}

#[test]
fn test_supersingular_degenerate_c_fails_doubling() {
    let e = SupersingularCurve::new(
        F2m::from_u64(0, 4).unwrap(),
        F2m::from_u64(1, 4).unwrap(),
        F2m::from_u64(0, 4).unwrap(),
    )
    .unwrap();
    assert_eq!(
        e.double(&gf16_point(0, 1)).unwrap_err(),
        Error::DivisionByZero {
            context: "supersingular doubling"
        }
    );
}

#[test]
fn test_point_display() {
    let p = gf16_point(8, 7);
    assert_eq!(p.to_string(), "(0x8,0x7)");
    assert_eq!(AffinePoint::infinity().to_string(), "infinity");
}

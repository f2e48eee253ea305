//! Non-supersingular curves `y² + xy = x³ + ax² + b` in López–Dahab
//! projective coordinates
//!
//! The performance variant of the same curve family: the accumulator stays
//! projective and addends are affine (mixed addition), so no group operation
//! needs a field inversion. Only the final conversion back to affine pays
//! one.

use crate::ec::{AffinePoint, Curve, LdPoint};
use crate::error::{validate, Result};
use crate::ff::F2m;
use num_bigint::BigUint;

/// Non-supersingular binary curve `y² + xy = x³ + ax² + b`, group law in
/// López–Dahab coordinates.
///
/// The recurrences cover the standard normalization `a ∈ {0, 1}` (every
/// non-supersingular curve class has such a representative); other
/// coefficients are rejected at construction.
#[derive(Clone, Debug)]
pub struct LopezDahabCurve {
    a: F2m,
    b: F2m,
    base: Option<AffinePoint>,
    order: Option<BigUint>,
}

impl LopezDahabCurve {
    /// Create a curve from its coefficients, which must inhabit one field;
    /// `a` must be 0 or 1.
    pub fn new(a: F2m, b: F2m) -> Result<Self> {
        validate::parameter(
            a.same_field(&b),
            "curve coefficients",
            "coefficients must belong to one field",
        )?;
        validate::parameter(
            a.is_zero() || a.is_one(),
            "curve coefficient a",
            "the Lopez-Dahab recurrences require a to be 0 or 1",
        )?;
        Ok(LopezDahabCurve {
            a,
            b,
            base: None,
            order: None,
        })
    }

    /// Coefficient `a` of the curve equation
    pub fn a(&self) -> &F2m {
        &self.a
    }

    /// Coefficient `b` of the curve equation
    pub fn b(&self) -> &F2m {
        &self.b
    }

    /// Configure the base point. One-time setup; requires exclusive access.
    pub fn set_base_point(&mut self, p: AffinePoint) {
        self.base = Some(p);
    }

    /// Configure the group order. One-time setup; requires exclusive access.
    pub fn set_order(&mut self, n: BigUint) {
        self.order = Some(n);
    }

    /// Lift an affine point into projective form: `Z = 1`, or the fixed
    /// infinity triple for the point at infinity.
    pub fn lift(&self, q: &AffinePoint) -> LdPoint {
        match q.xy() {
            None => self.identity(),
            Some((x, y)) => LdPoint::new(x.clone(), y.clone(), x.one()),
        }
    }
}

impl Curve for LopezDahabCurve {
    type Point = LdPoint;

    fn identity(&self) -> LdPoint {
        LdPoint::new(self.a.one(), self.a.zero(), self.a.zero())
    }

    fn base_point(&self) -> Option<&AffinePoint> {
        self.base.as_ref()
    }

    fn order(&self) -> Option<&BigUint> {
        self.order.as_ref()
    }

    /// Doubling without inversion:
    /// `Z₃ = X²Z²`, `X₃ = X⁴ + bZ⁴`, `Y₃ = bZ⁴·Z₃ + X₃·(aZ₃ + Y² + bZ⁴)`.
    fn double(&self, p: &LdPoint) -> Result<LdPoint> {
        if p.is_infinity() {
            return Ok(self.identity());
        }
        let t1 = p.z().square();
        let t2 = p.x().square();
        let z3 = t1.mul(&t2)?;
        let mut x3 = t2.square();
        let t1 = t1.square();
        let t2 = t1.mul(&self.b)?;
        x3 = x3.add(&t2)?;
        let mut t1 = p.y().square();
        if self.a.is_one() {
            t1 = t1.add(&z3)?;
        }
        t1 = t1.add(&t2)?;
        let mut y3 = x3.mul(&t1)?;
        let t1 = t2.mul(&z3)?;
        y3 = y3.add(&t1)?;
        Ok(LdPoint::new(x3, y3, z3))
    }

    /// Mixed addition: projective `P` plus affine `Q`, no inversion.
    ///
    /// With `B = X + x₂Z`, `C = ZB` and `A = Y + y₂Z²`:
    /// `Z₃ = C²`, `X₃ = A² + C(A + B² + aC)`,
    /// `Y₃ = CA·(x₂Z₃ + X₃) + Z₃·(X₃ + y₂Z₃)`.
    fn add(&self, p: &LdPoint, q: &AffinePoint) -> Result<LdPoint> {
        let (qx, qy) = match q.xy() {
            None => return Ok(p.clone()),
            Some(xy) => xy,
        };
        if p.is_infinity() {
            return Ok(LdPoint::new(qx.clone(), qy.clone(), qx.one()));
        }
        let t1 = p.z().mul(qx)?;
        let t2 = p.z().square();
        let x3 = p.x().add(&t1)?;
        let t1 = p.z().mul(&x3)?;
        let t3 = t2.mul(qy)?;
        let y3 = p.y().add(&t3)?;
        if x3.is_zero() {
            if y3.is_zero() {
                // The operands coincide: double Q lifted to Z = 1
                return self.double(&self.lift(q));
            }
            // Mutual inverses
            return Ok(self.identity());
        }
        let z3 = t1.square();
        let t3 = t1.mul(&y3)?;
        let t1 = if self.a.is_one() { t1.add(&t2)? } else { t1 };
        let t2 = x3.square();
        let x3 = t2.mul(&t1)?;
        let t2 = y3.square();
        let x3 = x3.add(&t2)?;
        let x3 = x3.add(&t3)?;
        let t2 = qx.mul(&z3)?;
        let t2 = t2.add(&x3)?;
        let y3 = t3.mul(&t2)?;
        let t2 = qy.mul(&z3)?;
        let t2 = t2.add(&x3)?;
        let t3 = z3.mul(&t2)?;
        let y3 = y3.add(&t3)?;
        Ok(LdPoint::new(x3, y3, z3))
    }
}

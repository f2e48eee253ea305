//! Supersingular curves `y² + cy = x³ + ax² + b` in affine coordinates

use crate::ec::{AffinePoint, Curve};
use crate::error::{validate, Error, Result};
use crate::ff::F2m;
use num_bigint::BigUint;

/// Supersingular binary curve `y² + cy = x³ + ax² + b`.
///
/// The inverse of a point `(x, y)` on this shape is `(x, y + c)`. Doubling is
/// undefined when `c = 0`; such a degenerate configuration is accepted at
/// construction but every doubling on it fails.
#[derive(Clone, Debug)]
pub struct SupersingularCurve {
    a: F2m,
    b: F2m,
    c: F2m,
    base: Option<AffinePoint>,
    order: Option<BigUint>,
}

impl SupersingularCurve {
    /// Create a curve from its coefficients, which must inhabit one field.
    pub fn new(a: F2m, b: F2m, c: F2m) -> Result<Self> {
        validate::parameter(
            a.same_field(&b) && a.same_field(&c),
            "curve coefficients",
            "coefficients must belong to one field",
        )?;
        Ok(SupersingularCurve {
            a,
            b,
            c,
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

    /// Coefficient `c` of the curve equation
    pub fn c(&self) -> &F2m {
        &self.c
    }

    /// Configure the base point. One-time setup; requires exclusive access.
    pub fn set_base_point(&mut self, p: AffinePoint) {
        self.base = Some(p);
    }

    /// Configure the group order. One-time setup; requires exclusive access.
    pub fn set_order(&mut self, n: BigUint) {
        self.order = Some(n);
    }

    /// Curve membership: whether `p` satisfies `y² + cy = x³ + ax² + b`.
    /// The point at infinity belongs to the group.
    pub fn contains(&self, p: &AffinePoint) -> Result<bool> {
        let (x, y) = match p.xy() {
            None => return Ok(true),
            Some(xy) => xy,
        };
        let left = y.square().add(&self.c.mul(y)?)?;
        let x_sq = x.square();
        let right = x_sq.mul(x)?.add(&self.a.mul(&x_sq)?)?.add(&self.b)?;
        Ok(left == right)
    }
}

impl Curve for SupersingularCurve {
    type Point = AffinePoint;

    fn identity(&self) -> AffinePoint {
        AffinePoint::Infinity
    }

    fn base_point(&self) -> Option<&AffinePoint> {
        self.base.as_ref()
    }

    fn order(&self) -> Option<&BigUint> {
        self.order.as_ref()
    }

    fn double(&self, p: &AffinePoint) -> Result<AffinePoint> {
        if self.c.is_zero() {
            // Degenerate curve parameter; the tangent construction breaks down
            return Err(Error::DivisionByZero {
                context: "supersingular doubling",
            });
        }
        let (x, y) = match p.xy() {
            None => return Ok(p.clone()),
            Some(xy) => xy,
        };
        let t0 = x.square().add(&self.a)?.mul(&self.c.inverse()?)?;
        let x3 = t0.square();
        let y3 = t0.mul(&x.add(&x3)?)?.add(y)?.add(&self.c)?;
        Ok(AffinePoint::new(x3, y3))
    }

    fn add(&self, p: &AffinePoint, q: &AffinePoint) -> Result<AffinePoint> {
        let (qx, qy) = match q.xy() {
            None => return Ok(p.clone()),
            Some(xy) => xy,
        };
        let (px, py) = match p.xy() {
            None => return Ok(q.clone()),
            Some(xy) => xy,
        };
        validate::on_curve(self.contains(q)?, "supersingular add")?;
        if p == q {
            return self.double(p);
        }
        let x_sum = px.add(qx)?;
        if x_sum.is_zero() {
            // Same x-coordinate but different y: mutual inverses
            return Ok(AffinePoint::Infinity);
        }
        let lambda = py.add(qy)?.mul(&x_sum.inverse()?)?;
        let x3 = lambda.square().add(&x_sum)?;
        let y3 = lambda.mul(&px.add(&x3)?)?.add(py)?.add(&self.c)?;
        let r = AffinePoint::new(x3, y3);
        debug_assert!(matches!(self.contains(&r), Ok(true)));
        Ok(r)
    }
}

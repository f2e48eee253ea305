//! Non-supersingular curves `y² + xy = x³ + ax² + b` in affine coordinates

use crate::ec::{AffinePoint, Curve};
use crate::error::{validate, Error, Result};
use crate::ff::F2m;
use num_bigint::BigUint;

/// Non-supersingular binary curve `y² + xy = x³ + ax² + b`.
///
/// Coefficients are fixed at construction; the base point and group order are
/// set once during setup and the curve is shared read-only afterwards.
#[derive(Clone, Debug)]
pub struct NonSupersingularCurve {
    a: F2m,
    b: F2m,
    base: Option<AffinePoint>,
    order: Option<BigUint>,
}

impl NonSupersingularCurve {
    /// Create a curve from its coefficients, which must inhabit one field.
    pub fn new(a: F2m, b: F2m) -> Result<Self> {
        validate::parameter(
            a.same_field(&b),
            "curve coefficients",
            "coefficients must belong to one field",
        )?;
        Ok(NonSupersingularCurve {
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

    /// Curve membership: whether `p` satisfies `y² + xy = x³ + ax² + b`.
    /// The point at infinity belongs to the group.
    pub fn contains(&self, p: &AffinePoint) -> Result<bool> {
        let (x, y) = match p.xy() {
            None => return Ok(true),
            Some(xy) => xy,
        };
        let left = y.square().add(&x.mul(y)?)?;
        let x_sq = x.square();
        let right = x_sq.mul(x)?.add(&self.a.mul(&x_sq)?)?.add(&self.b)?;
        Ok(left == right)
    }
}

impl Curve for NonSupersingularCurve {
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
        let (x, y) = match p.xy() {
            None => return Ok(p.clone()),
            Some(xy) => xy,
        };
        if x.is_zero() {
            // Vertical tangent at an order-2 point; the slope is undefined
            return Err(Error::DivisionByZero {
                context: "non-supersingular doubling",
            });
        }
        let lambda = x.add(&y.mul(&x.inverse()?)?)?;
        let x3 = lambda.square().add(&lambda)?.add(&self.a)?;
        let y3 = x.square().add(&x3)?.add(&x3.mul(&lambda)?)?;
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
        validate::on_curve(self.contains(q)?, "non-supersingular add")?;
        if p == q {
            return self.double(p);
        }
        let x_sum = px.add(qx)?;
        if x_sum.is_zero() {
            // Same x-coordinate but different y: mutual inverses
            return Ok(AffinePoint::Infinity);
        }
        let lambda = py.add(qy)?.mul(&x_sum.inverse()?)?;
        let x3 = lambda.square().add(&lambda)?.add(&x_sum)?.add(&self.a)?;
        let y3 = lambda.mul(&px.add(&x3)?)?.add(&x3)?.add(py)?;
        let r = AffinePoint::new(x3, y3);
        debug_assert!(matches!(self.contains(&r), Ok(true)));
        Ok(r)
    }
}

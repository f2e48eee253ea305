//! Curve point representations
//!
//! Plain data carriers: equality, infinity detection, display, and the
//! projective-to-affine conversion. The group law itself lives in the curve
//! types.

use crate::error::{Error, Result};
use crate::ff::F2m;
use std::fmt;

/// Affine curve point: a coordinate pair or the point at infinity.
///
/// Infinity is an explicit case of the sum type, so no coordinate access can
/// accidentally read the identity element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AffinePoint {
    /// The point at infinity, identity of the curve group
    Infinity,
    /// An ordinary point with both coordinates present
    Finite {
        /// x-coordinate
        x: F2m,
        /// y-coordinate
        y: F2m,
    },
}

impl AffinePoint {
    /// Create a finite point from its coordinates.
    pub fn new(x: F2m, y: F2m) -> Self {
        AffinePoint::Finite { x, y }
    }

    /// The point at infinity.
    pub fn infinity() -> Self {
        AffinePoint::Infinity
    }

    /// Whether this point is the identity element.
    pub fn is_infinity(&self) -> bool {
        matches!(self, AffinePoint::Infinity)
    }

    /// Both coordinates, or `None` for the point at infinity.
    pub fn xy(&self) -> Option<(&F2m, &F2m)> {
        match self {
            AffinePoint::Infinity => None,
            AffinePoint::Finite { x, y } => Some((x, y)),
        }
    }
}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AffinePoint::Infinity => write!(f, "infinity"),
            AffinePoint::Finite { x, y } => write!(f, "({:#x},{:#x})", x.n(), y.n()),
        }
    }
}

/// Point in López–Dahab projective coordinates.
///
/// Represents the affine point `(X/Z, Y/Z²)`; the fixed triple `(1, 0, 0)`
/// denotes infinity. This form exists so the projective group law can run
/// without a field inversion per operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LdPoint {
    x: F2m,
    y: F2m,
    z: F2m,
}

impl LdPoint {
    /// Create a point from its projective coordinates.
    pub fn new(x: F2m, y: F2m, z: F2m) -> Self {
        LdPoint { x, y, z }
    }

    /// X-coordinate
    pub fn x(&self) -> &F2m {
        &self.x
    }

    /// Y-coordinate
    pub fn y(&self) -> &F2m {
        &self.y
    }

    /// Z-coordinate
    pub fn z(&self) -> &F2m {
        &self.z
    }

    /// Whether this is the fixed infinity representative `(1, 0, 0)`.
    pub fn is_infinity(&self) -> bool {
        self.x.is_one() && self.y.is_zero() && self.z.is_zero()
    }

    /// Equality against an affine point: requires `Z == 1` and matching
    /// coordinates, or infinity on both sides.
    pub fn eq_affine(&self, q: &AffinePoint) -> bool {
        match q {
            AffinePoint::Infinity => self.is_infinity(),
            AffinePoint::Finite { x, y } => self.z.is_one() && self.x == *x && self.y == *y,
        }
    }

    /// Convert back to affine coordinates, at the cost of one field
    /// inversion. A `Z == 0` triple other than the fixed infinity has no
    /// affine counterpart and is rejected.
    pub fn to_affine(&self) -> Result<AffinePoint> {
        if self.is_infinity() {
            return Ok(AffinePoint::Infinity);
        }
        if self.z.is_zero() {
            return Err(Error::DivisionByZero {
                context: "LdPoint conversion to affine",
            });
        }
        let z_inv = self.z.inverse()?;
        let x = self.x.mul(&z_inv)?;
        let y = self.y.mul(&z_inv.square())?;
        Ok(AffinePoint::new(x, y))
    }
}

impl fmt::Display for LdPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

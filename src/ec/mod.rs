//! Elliptic curves over binary fields
//!
//! Three group-law implementations share the [`Curve`] contract: the affine
//! non-supersingular form `y² + xy = x³ + ax² + b`, the same curve family in
//! López–Dahab projective coordinates, and the affine supersingular form
//! `y² + cy = x³ + ax² + b`. Scalar multiplication is one generic
//! double-and-add driver on top of the contract.

mod point;

pub mod k409;
pub mod lopez_dahab;
pub mod nonsupersingular;
pub mod supersingular;

pub use lopez_dahab::LopezDahabCurve;
pub use nonsupersingular::NonSupersingularCurve;
pub use point::{AffinePoint, LdPoint};
pub use supersingular::SupersingularCurve;

use crate::error::Result;
use num_bigint::BigUint;

mod sealed {
    /// Sealed trait to prevent trait implementation outside the crate
    pub trait Sealed {}

    impl Sealed for super::NonSupersingularCurve {}
    impl Sealed for super::LopezDahabCurve {}
    impl Sealed for super::SupersingularCurve {}
}

/// Contract shared by the three group-law implementations.
///
/// `Point` is the accumulator representation of the variant; addends are
/// always affine, which is exactly the mixed addition the projective variant
/// wants and a no-op distinction for the affine ones. The trait is sealed:
/// the set of curve shapes is closed.
pub trait Curve: sealed::Sealed {
    /// Point representation this variant accumulates into
    type Point: Clone;

    /// The identity element in this variant's representation.
    fn identity(&self) -> Self::Point;

    /// Compute `2P`.
    fn double(&self, p: &Self::Point) -> Result<Self::Point>;

    /// Compute `P + Q` for an affine addend `Q`.
    fn add(&self, p: &Self::Point, q: &AffinePoint) -> Result<Self::Point>;

    /// Base point configured on this curve, if any.
    fn base_point(&self) -> Option<&AffinePoint>;

    /// Group order configured on this curve, if any.
    fn order(&self) -> Option<&BigUint>;

    /// Compute `kP` by double-and-add over the bits of `k`, most significant
    /// first. `k = 0` yields the identity.
    fn scalar_mul(&self, k: &BigUint, p: &AffinePoint) -> Result<Self::Point> {
        let mut acc = self.identity();
        for i in (0..k.bits()).rev() {
            acc = self.double(&acc)?;
            if k.bit(i) {
                acc = self.add(&acc, p)?;
            }
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests;

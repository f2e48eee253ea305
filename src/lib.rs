//! Arithmetic over binary fields GF(2^m), the group law of elliptic curves
//! defined over them, and a point ElGamal cipher on top.
//!
//! The crate is layered strictly bottom-up: field elements feed points,
//! points feed the three curve group-law variants (affine non-supersingular,
//! López–Dahab projective, affine supersingular), curve operations feed the
//! generic double-and-add scalar multiplication, and the cipher consumes only
//! the curve contract.
//!
//! All values are immutable; a curve is configured once (coefficients, base
//! point, group order) and is safe to share across threads read-only for the
//! lifetime of the process.
//!
//! ```
//! use char2::ec::{k409, Curve};
//! use char2::elgamal::ElGamal;
//! use num_bigint::BigUint;
//!
//! let curve = k409::curve();
//! let cipher = ElGamal::new(&curve);
//!
//! let private_key = BigUint::from(0xf42354u32);
//! let public_key = curve
//!     .scalar_mul(&private_key, curve.base_point().unwrap())
//!     .unwrap();
//!
//! let msg = curve.base_point().unwrap().clone();
//! let (c1, c2) = cipher.encrypt_seeded(&msg, &public_key, 7).unwrap();
//! assert_eq!(cipher.decrypt(&private_key, &c1, &c2).unwrap(), msg);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Binary field arithmetic
pub mod ff;
pub use ff::F2m;

// Elliptic curve group law
pub mod ec;
pub use ec::{
    AffinePoint, Curve, LdPoint, LopezDahabCurve, NonSupersingularCurve, SupersingularCurve,
};

// Point cipher
pub mod elgamal;
pub use elgamal::ElGamal;

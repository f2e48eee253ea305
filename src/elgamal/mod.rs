//! ElGamal encryption over elliptic-curve points
//!
//! The cipher is built purely from the curve contract: `add`, `scalar_mul`,
//! and a configured base point and group order. A message is a curve point;
//! encryption blinds it with an ephemeral multiple of the recipient's public
//! key, decryption strips the blinding using the private scalar.

use crate::ec::{AffinePoint, Curve};
use crate::error::{validate, Error, Result};
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// ElGamal point cipher bound to one configured curve.
///
/// Holds a shared reference to the curve and is otherwise stateless, so one
/// context can serve concurrent encrypt/decrypt calls.
#[derive(Clone, Debug)]
pub struct ElGamal<'a, C> {
    curve: &'a C,
}

impl<'a, C: Curve<Point = AffinePoint>> ElGamal<'a, C> {
    /// Create a cipher context over a curve.
    ///
    /// The curve must have its base point and group order configured before
    /// any cipher call; a missing configuration is reported per operation.
    pub fn new(curve: &'a C) -> Self {
        ElGamal { curve }
    }

    fn base_point(&self) -> Result<&AffinePoint> {
        self.curve
            .base_point()
            .ok_or(Error::param("ElGamal curve", "no base point configured"))
    }

    fn order(&self) -> Result<&BigUint> {
        self.curve
            .order()
            .ok_or(Error::param("ElGamal curve", "no group order configured"))
    }

    /// Encrypt a message point under a public key.
    ///
    /// Draws the ephemeral scalar `k` uniformly from `[1, order]` and returns
    /// `(kG, msg + k·publicKey)`. The caller guarantees that `public_key` is
    /// the private-key multiple of the base point; a mismatched pair is not
    /// detected and decrypts to a wrong point.
    pub fn encrypt<R: CryptoRng + RngCore>(
        &self,
        msg: &AffinePoint,
        public_key: &AffinePoint,
        rng: &mut R,
    ) -> Result<(AffinePoint, AffinePoint)> {
        let g = self.base_point()?;
        let order = self.order()?;
        let k = rng.gen_biguint_range(&BigUint::one(), &(order + 1u32));
        let c1 = self.curve.scalar_mul(&k, g)?;
        let blind = self.curve.scalar_mul(&k, public_key)?;
        let c2 = self.curve.add(&blind, msg)?;
        Ok((c1, c2))
    }

    /// Encrypt with a deterministic ephemeral scalar derived from `seed`.
    ///
    /// Identical seeds yield identical ciphertexts, which makes encryption
    /// reproducible for testing and auditing.
    pub fn encrypt_seeded(
        &self,
        msg: &AffinePoint,
        public_key: &AffinePoint,
        seed: u64,
    ) -> Result<(AffinePoint, AffinePoint)> {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.encrypt(msg, public_key, &mut rng)
    }

    /// Decrypt a ciphertext pair with the private key.
    ///
    /// Returns `c2 + (order − private_key)·c1`; since the base point has the
    /// configured order, `(order − private_key)·c1` is the inverse of the
    /// blinding point added during encryption.
    pub fn decrypt(
        &self,
        private_key: &BigUint,
        c1: &AffinePoint,
        c2: &AffinePoint,
    ) -> Result<AffinePoint> {
        let order = self.order()?;
        validate::parameter(
            !private_key.is_zero() && private_key < order,
            "ElGamal private key",
            "private key must lie in [1, order - 1]",
        )?;
        let unblind = self.curve.scalar_mul(&(order - private_key), c1)?;
        self.curve.add(&unblind, c2)
    }

    /// Generate a key pair: a private scalar drawn uniformly from
    /// `[1, order − 1]` and the matching public point.
    pub fn generate_keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(BigUint, AffinePoint)> {
        let g = self.base_point()?;
        let order = self.order()?;
        let private_key = rng.gen_biguint_range(&BigUint::one(), order);
        let public_key = self.curve.scalar_mul(&private_key, g)?;
        Ok((private_key, public_key))
    }
}

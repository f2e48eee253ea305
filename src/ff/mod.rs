//! Arithmetic in binary fields GF(2^m)
//!
//! Elements are polynomials over GF(2) of degree below the field power `m`,
//! stored as the coefficient bits of a [`BigUint`]: bit `i` is the coefficient
//! of `x^i`. Every element carries the reduction polynomial of its field, so
//! two elements are combinable only when both the power and the polynomial
//! match; anything else is reported as an error rather than coerced.
//!
//! ```
//! use char2::ff::F2m;
//!
//! let a = F2m::from_u64(4, 7).unwrap();
//! let b = F2m::from_u64(3, 7).unwrap();
//! assert_eq!(a.add(&b).unwrap(), F2m::from_u64(7, 7).unwrap());
//! assert_eq!(a.mul(&b).unwrap(), F2m::from_u64(12, 7).unwrap());
//! ```

use crate::error::{validate, Error, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;
use std::mem;

/// Default reduction polynomials for field powers 1 through 21.
///
/// Conway polynomials C_{2,m}, transcribed coefficient-for-coefficient from
/// Lübeck's tables (<http://www.math.rwth-aachen.de/~Frank.Luebeck/data/ConwayPol>).
/// Callers working in larger fields must supply their own polynomial through
/// [`F2m::with_generator`].
const DEFAULT_REDUCTION_POLYS: [u64; 21] = [
    0b11,
    0b111,
    0b1011,
    0b10011,
    0b100101,
    0b1011011,
    0b10000011,
    0b100011101,
    0b1000010001,
    0b10001101111,
    0b100000000101,
    0b1000011101011,
    0b10000000011011,
    0b100000010101001,
    0b1000000000110101,
    0b10000000000101101,
    0b100000000000001001,
    0b1000001010000000011,
    0b10000000000000100111,
    0b100000000011011110011,
    0b1000000000000001100101,
];

fn default_generator(m: u64) -> Result<BigUint> {
    if m == 0 || m > DEFAULT_REDUCTION_POLYS.len() as u64 {
        return Err(Error::UnknownPrimitivePolynomial { power: m });
    }
    Ok(BigUint::from(DEFAULT_REDUCTION_POLYS[(m - 1) as usize]))
}

/// Build a polynomial from the exponents of its nonzero terms.
///
/// `poly_from_exponents(&[409, 87, 0])` is the trinomial `x^409 + x^87 + 1`.
pub fn poly_from_exponents(exponents: &[u64]) -> BigUint {
    let mut p = BigUint::zero();
    for &e in exponents {
        p.set_bit(e, true);
    }
    p
}

/// Carry-less product of two GF(2) polynomials, right-to-left comb method.
/// The result is unreduced and may reach degree `2m - 2`.
fn mul_without_reduction(x: &BigUint, y: &BigUint) -> BigUint {
    let mut acc = BigUint::zero();
    let mut shifted = x.clone();
    for i in 0..y.bits() {
        if y.bit(i) {
            acc ^= &shifted;
        }
        shifted <<= 1u64;
    }
    acc
}

/// Polynomial long division over GF(2): returns `(quotient, remainder)` with
/// `f = quotient * v + remainder` and `degree(remainder) < degree(v)`.
fn full_division(f: &BigUint, v: &BigUint) -> (BigUint, BigUint) {
    let v_bits = v.bits();
    debug_assert!(v_bits > 0, "division by the zero polynomial");
    let mut quotient = BigUint::zero();
    let mut remainder = f.clone();
    let mut i = remainder.bits();
    while i >= v_bits {
        if remainder.bit(i - 1) {
            let shift = i - v_bits;
            quotient.set_bit(shift, true);
            remainder ^= v << shift;
        }
        i -= 1;
    }
    (quotient, remainder)
}

/// Element of the binary field GF(2^m)
///
/// Immutable value type; every operation returns a new element. The invariant
/// `degree(n) < m` holds after construction and after every operation, since
/// constructors reduce their input modulo the field's polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct F2m {
    /// Coefficient bits of the represented polynomial
    n: BigUint,
    /// Power of the field
    m: u64,
    /// Reduction polynomial of the field, of degree `m`
    generator: BigUint,
}

impl F2m {
    /// Create an element of GF(2^m) using the built-in polynomial table.
    ///
    /// Fails with [`Error::UnknownPrimitivePolynomial`] when `m` has no table
    /// entry; fields beyond power 21 need [`F2m::with_generator`].
    pub fn new(n: BigUint, m: u64) -> Result<Self> {
        let generator = default_generator(m)?;
        Ok(Self::reduced(n, m, generator))
    }

    /// Create an element from a small literal, using the built-in table.
    pub fn from_u64(n: u64, m: u64) -> Result<Self> {
        Self::new(BigUint::from(n), m)
    }

    /// Create an element of GF(2^m) with an explicit reduction polynomial.
    ///
    /// The polynomial must have degree exactly `m`. Irreducibility is the
    /// caller's responsibility; a reducible polynomial is detected and
    /// reported the first time an inversion runs into it.
    pub fn with_generator(n: BigUint, m: u64, generator: BigUint) -> Result<Self> {
        validate::parameter(m > 0, "F2m power", "field power must be positive")?;
        validate::parameter(
            generator.bits() == m + 1,
            "F2m generator",
            "reduction polynomial degree must equal the field power",
        )?;
        Ok(Self::reduced(n, m, generator))
    }

    fn reduced(n: BigUint, m: u64, generator: BigUint) -> Self {
        let n = if n.bits() > m {
            full_division(&n, &generator).1
        } else {
            n
        };
        F2m { n, m, generator }
    }

    fn lift(&self, n: BigUint) -> Self {
        Self::reduced(n, self.m, self.generator.clone())
    }

    fn check_compatible(&self, rhs: &Self, operation: &'static str) -> Result<()> {
        if !self.same_field(rhs) {
            return Err(Error::IncompatibleBaseOperation { operation });
        }
        Ok(())
    }

    /// Whether both elements inhabit the same field: equal power and equal
    /// reduction polynomial.
    pub fn same_field(&self, rhs: &Self) -> bool {
        self.m == rhs.m && self.generator == rhs.generator
    }

    /// Coefficient bits of this element
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Power of this element's field
    pub fn power(&self) -> u64 {
        self.m
    }

    /// Reduction polynomial of this element's field
    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// The additive identity of this element's field
    pub fn zero(&self) -> Self {
        self.lift(BigUint::zero())
    }

    /// The multiplicative identity of this element's field
    pub fn one(&self) -> Self {
        self.lift(BigUint::one())
    }

    /// Whether this element is the additive identity
    pub fn is_zero(&self) -> bool {
        self.n.is_zero()
    }

    /// Whether this element is the multiplicative identity
    pub fn is_one(&self) -> bool {
        self.n.is_one()
    }

    /// Number of significant coefficient bits: the index of the highest set
    /// bit plus one. The degree of the zero element is 0.
    pub fn degree(&self) -> u64 {
        self.n.bits()
    }

    /// Field addition: XOR of the coefficient bits.
    ///
    /// Self-inverse (`a + a = 0`) and never raises the degree, so no
    /// reduction is involved.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_compatible(rhs, "F2m add")?;
        Ok(F2m {
            n: &self.n ^ &rhs.n,
            m: self.m,
            generator: self.generator.clone(),
        })
    }

    /// Field subtraction; identical to [`F2m::add`] in characteristic two.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.add(rhs)
    }

    /// Field multiplication: carry-less comb product followed by long
    /// division by the reduction polynomial, keeping the remainder.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.check_compatible(rhs, "F2m mul")?;
        let product = mul_without_reduction(&self.n, &rhs.n);
        let (_, remainder) = full_division(&product, &self.generator);
        Ok(F2m {
            n: remainder,
            m: self.m,
            generator: self.generator.clone(),
        })
    }

    /// Squaring, a frequent special case of [`F2m::mul`].
    pub fn square(&self) -> Self {
        let product = mul_without_reduction(&self.n, &self.n);
        let (_, remainder) = full_division(&product, &self.generator);
        F2m {
            n: remainder,
            m: self.m,
            generator: self.generator.clone(),
        }
    }

    /// Multiplicative inverse by the extended Euclidean algorithm over
    /// GF(2) polynomials.
    ///
    /// Fails with a division-by-zero error for the zero element.
    pub fn inverse(&self) -> Result<Self> {
        if self.n.is_zero() {
            return Err(Error::DivisionByZero {
                context: "F2m inverse",
            });
        }
        let mut u = self.n.clone();
        let mut v = self.generator.clone();
        let mut g1 = BigUint::one();
        let mut g2 = BigUint::zero();
        while !u.is_one() {
            let mut j = u.bits() as i64 - v.bits() as i64;
            if j < 0 {
                mem::swap(&mut u, &mut v);
                mem::swap(&mut g1, &mut g2);
                j = -j;
            }
            u ^= &v << (j as u64);
            g1 ^= &g2 << (j as u64);
            if u.is_zero() {
                return Err(Error::param(
                    "F2m generator",
                    "reduction polynomial is not irreducible",
                ));
            }
        }
        Ok(self.lift(g1))
    }

    /// Multiplicative inverse by the binary (division-free) algorithm.
    ///
    /// Alternate to [`F2m::inverse`]; agrees with it on every input, which
    /// makes the pair useful for cross-checking.
    pub fn binary_inverse(&self) -> Result<Self> {
        if self.n.is_zero() {
            return Err(Error::DivisionByZero {
                context: "F2m binary inverse",
            });
        }
        let mut u = self.n.clone();
        let mut v = self.generator.clone();
        let mut g1 = BigUint::one();
        let mut g2 = BigUint::zero();
        while !u.is_one() && !v.is_one() {
            while !u.bit(0) {
                u >>= 1u64;
                if g1.bit(0) {
                    g1 ^= &self.generator;
                }
                g1 >>= 1u64;
            }
            while !v.bit(0) {
                v >>= 1u64;
                if g2.bit(0) {
                    g2 ^= &self.generator;
                }
                g2 >>= 1u64;
            }
            if u.bits() > v.bits() {
                u ^= &v;
                g1 ^= &g2;
            } else {
                v ^= &u;
                g2 ^= &g1;
            }
            if u.is_zero() || v.is_zero() {
                return Err(Error::param(
                    "F2m generator",
                    "reduction polynomial is not irreducible",
                ));
            }
        }
        let n = if u.is_one() { g1 } else { g2 };
        Ok(self.lift(n))
    }
}

impl PartialEq<u64> for F2m {
    /// Comparison against a raw integer compares only the coefficient bits.
    fn eq(&self, other: &u64) -> bool {
        self.n == BigUint::from(*other)
    }
}

impl PartialEq<BigUint> for F2m {
    fn eq(&self, other: &BigUint) -> bool {
        self.n == *other
    }
}

impl fmt::Display for F2m {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F[2^{}]({:#x})", self.m, self.n)
    }
}

//! Data structures and algorithms implementations related to
//! transreal numbers: the rationals extended with `+∞`, `-∞` and nullity `Φ`.
//!
//! # References:
//! - James Anderson, Norbert Völker, Andrew Adams, "Perspex Machine VIII: axioms of transreal arithmetic"
//!

mod arith;
mod cmp;
mod convert;
mod fmt;
mod root;

#[cfg(feature = "serde")]
pub use convert::TransrealParts;
pub use root::PRECISION;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// A transreal number represented as `numer / denom`.
///
/// The fraction is always kept in canonical form: the denominator is non-negative
/// and shares no common factor with the numerator. A zero denominator encodes the
/// non-finite values, `1/0` is infinity, `-1/0` is negative infinity and `0/0` is
/// nullity.
///
/// Values also carry an `approximate` flag recording that the fraction may differ
/// from the true mathematical value (e.g. an irrational root truncated to
/// [PRECISION] digits). The flag is not part of equality, and it's never set on
/// the non-finite values.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "TransrealParts", into = "TransrealParts")
)]
pub struct Transreal {
    numer: BigInt,
    denom: BigInt, // non-negative, zero for infinities and nullity
    approximate: bool, // false when denom is zero
}

impl Transreal {
    #[inline]
    pub(crate) const fn new_raw(numer: BigInt, denom: BigInt, approximate: bool) -> Self {
        Transreal {
            numer,
            denom,
            approximate,
        }
    }

    // Simplify the fraction into canonical form
    fn reduce(&mut self) {
        // keep denom non-negative
        if self.denom.is_negative() {
            self.numer = -core::mem::take(&mut self.numer);
            self.denom = -core::mem::take(&mut self.denom);
        }

        // gcd(n, 0) = |n|, so this also clamps the non-finite numerators to -1, 0, 1
        let g = self.numer.gcd(&self.denom);
        if g > BigInt::one() {
            self.numer = &self.numer / &g;
            self.denom = &self.denom / g;
        }

        if self.denom.is_zero() {
            self.approximate = false;
        }
    }

    /// Create an exact transreal number `numer / denom`. The denominator can be zero.
    #[inline]
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(numer: N, denom: D) -> Self {
        Self::with_approximation(numer, denom, false)
    }

    /// Create a transreal number `numer / denom` with the given approximation flag.
    /// The flag is dropped if the result is infinite or nullity.
    #[inline]
    pub fn with_approximation<N: Into<BigInt>, D: Into<BigInt>>(
        numer: N,
        denom: D,
        approximate: bool,
    ) -> Self {
        let mut ret = Transreal::new_raw(numer.into(), denom.into(), approximate);
        ret.reduce();
        ret
    }

    /// Positive infinity `1/0`
    #[inline]
    pub fn infinity() -> Self {
        Transreal::new_raw(BigInt::one(), BigInt::zero(), false)
    }

    /// Negative infinity `-1/0`
    #[inline]
    pub fn neg_infinity() -> Self {
        Transreal::new_raw(-BigInt::one(), BigInt::zero(), false)
    }

    /// Nullity `0/0`, the value outside of the number line that absorbs every operation
    #[inline]
    pub fn nullity() -> Self {
        Transreal::new_raw(BigInt::zero(), BigInt::zero(), false)
    }

    /// An approximation of π to 24 decimal places
    pub fn pi() -> Self {
        Transreal::with_approximation(
            3_141_592_653_589_793_238_462_643u128,
            10u128.pow(24),
            true,
        )
    }

    /// Get the numerator. Negative values have a negative numerator
    #[inline]
    pub const fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Get the denominator, which is never negative
    #[inline]
    pub const fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Deconstruct into `(numer, denom)`
    #[inline]
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    #[inline]
    pub fn is_approximate(&self) -> bool {
        self.approximate
    }

    #[inline]
    pub fn is_nullity(&self) -> bool {
        self.denom.is_zero() && self.numer.is_zero()
    }

    /// Determine if the number is positive or negative infinity
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.denom.is_zero() && !self.numer.is_zero()
    }

    /// Determine if the number is neither infinite nor nullity
    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.denom.is_zero()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Test if the number is positive, infinity included
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    /// Test if the number is negative, negative infinity included
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    // Mark the number as approximated if `approximate` is true, keeping
    // non-finite values exact
    #[inline]
    pub(crate) fn approximated_if(mut self, approximate: bool) -> Self {
        if approximate && self.is_finite() {
            self.approximate = true;
        }
        self
    }

    /// Rounds towards minus infinity. Infinities and nullity are returned unchanged.
    pub fn floor(&self) -> Self {
        if self.denom.is_zero() || self.denom.is_one() {
            return self.clone();
        }
        Transreal::new_raw(
            self.numer.div_floor(&self.denom),
            BigInt::one(),
            self.approximate,
        )
    }

    /// Truncate the number to `decimal_places` digits after the decimal point,
    /// rounding towards minus infinity.
    pub fn round(&self, decimal_places: u32) -> Self {
        let scale = Transreal::from(BigInt::from(10).pow(decimal_places));
        (self * &scale).floor() / scale
    }

    /// Returns `1`, `0` or `-1` by the sign of the number, or nullity for nullity.
    pub fn sign(&self) -> Self {
        if self.is_nullity() {
            Transreal::nullity()
        } else {
            Transreal::from(self.numer.signum())
        }
    }

    /// Absolute value. Nullity stays nullity.
    pub fn abs(&self) -> Self {
        if self.numer.is_negative() {
            -self
        } else {
            self.clone()
        }
    }
}

impl Zero for Transreal {
    #[inline]
    fn zero() -> Self {
        Transreal::new_raw(BigInt::zero(), BigInt::one(), false)
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero() && !self.denom.is_zero()
    }
}

impl One for Transreal {
    #[inline]
    fn one() -> Self {
        Transreal::new_raw(BigInt::one(), BigInt::one(), false)
    }
    #[inline]
    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

impl Default for Transreal {
    #[inline]
    fn default() -> Self {
        Transreal::zero()
    }
}

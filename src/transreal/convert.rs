use super::Transreal;
use crate::traits::Approximation;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::{BigRational, Ratio};
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

macro_rules! from_integer {
    ($($int:ty),*) => {$(
        impl From<$int> for Transreal {
            #[inline]
            fn from(v: $int) -> Self {
                Transreal::new_raw(BigInt::from(v), BigInt::one(), false)
            }
        }
    )*};
}

from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Transreal {
    #[inline]
    fn from(v: BigInt) -> Self {
        Transreal::new_raw(v, BigInt::one(), false)
    }
}

impl From<&Transreal> for Transreal {
    #[inline]
    fn from(v: &Transreal) -> Self {
        v.clone()
    }
}

/// Floats are converted exactly (every finite float is a dyadic rational), so the
/// result is not marked approximated. Infinite floats map to the transreal
/// infinities and NaN maps to nullity.
impl From<f64> for Transreal {
    fn from(v: f64) -> Self {
        if v.is_nan() {
            return Transreal::nullity();
        }
        if v.is_infinite() {
            return if v > 0. {
                Transreal::infinity()
            } else {
                Transreal::neg_infinity()
            };
        }

        match BigRational::from_float(v) {
            Some(ratio) => Transreal::from(ratio),
            None => Transreal::nullity(),
        }
    }
}

impl From<f32> for Transreal {
    #[inline]
    fn from(v: f32) -> Self {
        Transreal::from(v as f64)
    }
}

impl<T: Into<BigInt>> From<Ratio<T>> for Transreal {
    #[inline]
    fn from(v: Ratio<T>) -> Self {
        let (numer, denom): (T, T) = v.into();
        Transreal::new(numer, denom)
    }
}

impl Transreal {
    /// Convert to a rational number, the result is [None] if the number is not finite.
    pub fn to_rational(&self) -> Option<Approximation<BigRational>> {
        if self.denom.is_zero() {
            return None;
        }
        let ratio = BigRational::new_raw(self.numer.clone(), self.denom.clone());
        Some(Approximation::new(ratio, self.approximate))
    }

    // integral part rounded towards minus infinity
    fn to_integer(&self) -> Option<BigInt> {
        if self.denom.is_zero() {
            None
        } else {
            Some(self.numer.div_floor(&self.denom))
        }
    }
}

impl ToPrimitive for Transreal {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_integer()?.to_i64()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_integer()?.to_u64()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        self.to_integer()?.to_i128()
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        self.to_integer()?.to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        match (self.denom.is_zero(), self.numer.is_zero()) {
            (true, true) => Some(f64::NAN),
            (true, false) => Some(if self.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            (false, _) => BigRational::new_raw(self.numer.clone(), self.denom.clone()).to_f64(),
        }
    }
}

impl FromPrimitive for Transreal {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(Transreal::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(Transreal::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        Some(Transreal::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Some(Transreal::from(n))
    }

    #[inline]
    fn from_f64(n: f64) -> Option<Self> {
        Some(Transreal::from(n))
    }
}

/// Serialized form of a [Transreal], the fraction is normalized again on deserialization.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TransrealParts {
    pub numerator: BigInt,
    pub denominator: BigInt,
    #[serde(default)]
    pub approximate: bool,
}

#[cfg(feature = "serde")]
impl From<TransrealParts> for Transreal {
    fn from(parts: TransrealParts) -> Self {
        Transreal::with_approximation(parts.numerator, parts.denominator, parts.approximate)
    }
}

#[cfg(feature = "serde")]
impl From<Transreal> for TransrealParts {
    fn from(t: Transreal) -> Self {
        let approximate = t.approximate;
        let (numerator, denominator) = t.into_parts();
        TransrealParts {
            numerator,
            denominator,
            approximate,
        }
    }
}

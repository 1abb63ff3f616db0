use super::Transreal;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use num_bigint::BigInt;

// Equality is structural on the canonical fraction, so nullity equals itself
// and the approximation flag is ignored.
impl PartialEq for Transreal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.numer == other.numer && self.denom == other.denom
    }
}

impl Eq for Transreal {}

impl Hash for Transreal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numer.hash(state);
        self.denom.hash(state);
    }
}

/// Transreal numbers are totally ordered with `-∞ < x < ∞` for every finite `x`,
/// except that nullity is unordered against every other value. Nullity compares
/// equal to itself, so `Φ <= Φ` holds while `Φ < x` and `Φ > x` are both false.
impl PartialOrd for Transreal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_nullity(), other.is_nullity()) {
            (true, true) => Some(Ordering::Equal),
            (true, false) | (false, true) => None,
            (false, false) => {
                if self.denom == other.denom {
                    // this also covers comparison between infinities
                    Some(self.numer.cmp(&other.numer))
                } else {
                    let lhs = &self.numer * &other.denom;
                    let rhs = &other.numer * &self.denom;
                    Some(lhs.cmp(&rhs))
                }
            }
        }
    }
}

macro_rules! scalar_cmp {
    ($($scalar:ty),*) => {$(
        impl PartialEq<$scalar> for Transreal {
            #[inline]
            fn eq(&self, other: &$scalar) -> bool {
                *self == Transreal::from(other.clone())
            }
        }
        impl PartialEq<Transreal> for $scalar {
            #[inline]
            fn eq(&self, other: &Transreal) -> bool {
                Transreal::from(self.clone()) == *other
            }
        }
        impl PartialOrd<$scalar> for Transreal {
            #[inline]
            fn partial_cmp(&self, other: &$scalar) -> Option<Ordering> {
                self.partial_cmp(&Transreal::from(other.clone()))
            }
        }
        impl PartialOrd<Transreal> for $scalar {
            #[inline]
            fn partial_cmp(&self, other: &Transreal) -> Option<Ordering> {
                Transreal::from(self.clone()).partial_cmp(other)
            }
        }
    )*};
}

scalar_cmp!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, BigInt);

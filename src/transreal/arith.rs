//! Arithmetic operations on transreal numbers.
//!
//! Only addition, multiplication and exponentiation are implemented directly,
//! the other operations derive from them: `-a = a * -1`, `a - b = a + (-b)`,
//! `a / b = a * b^-1`.

use super::Transreal;
use core::iter::{Product, Sum};
use core::ops::*;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Inv, Num, One, Signed, Zero};

use crate::TransrealError;

impl Transreal {
    fn add_ref(&self, rhs: &Transreal) -> Transreal {
        let approximate = self.approximate || rhs.approximate;

        // nullity absorbs everything, this also makes ∞ + (-∞) = Φ below
        if self.is_nullity() || rhs.is_nullity() {
            return Transreal::nullity();
        }

        if self.denom == rhs.denom {
            // also covers two infinities, where -1 + 1 = 0 gives 0/0
            return Transreal::with_approximation(
                &self.numer + &rhs.numer,
                self.denom.clone(),
                approximate,
            );
        }

        Transreal::with_approximation(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
            approximate,
        )
    }

    fn mul_ref(&self, rhs: &Transreal) -> Transreal {
        Transreal::with_approximation(
            &self.numer * &rhs.numer,
            &self.denom * &rhs.denom,
            self.approximate || rhs.approximate,
        )
    }

    #[inline]
    fn neg_ref(&self) -> Transreal {
        self.mul_ref(&Transreal::from(-1))
    }

    #[inline]
    fn sub_ref(&self, rhs: &Transreal) -> Transreal {
        self.add_ref(&rhs.neg_ref())
    }

    #[inline]
    fn div_ref(&self, rhs: &Transreal) -> Transreal {
        self.mul_ref(&rhs.recip())
    }

    #[inline]
    fn rem_ref(&self, rhs: &Transreal) -> Transreal {
        self.mod_floor(rhs)
    }

    // Swap numerator and denominator, keeping the approximation flag
    fn swapped(&self) -> Transreal {
        Transreal::with_approximation(self.denom.clone(), self.numer.clone(), self.approximate)
    }

    /// Returns the reciprocal `self^-1`. The reciprocal of zero is infinity,
    /// and the reciprocal of both infinities is zero.
    #[inline]
    pub fn recip(&self) -> Transreal {
        self.pow(-1)
    }

    /// Raise the number to a transreal power.
    ///
    /// Fractional exponents are evaluated through [Transreal::root], so the
    /// result may be approximated. Notable special cases are `0^0 = Φ`,
    /// `x^∞ = 0` for `|x| < 1`, `(±1)^∞ = Φ` and `x^Φ = Φ`.
    pub fn pow<E: Into<Transreal>>(&self, exponent: E) -> Transreal {
        let exponent = exponent.into();

        if exponent.is_negative() {
            // x^-e = (1/x)^e, this covers -∞ as well
            return self.swapped().pow(-exponent);
        }

        if exponent.is_zero() {
            return if self.is_zero() || self.is_nullity() {
                Transreal::nullity()
            } else {
                Transreal::one()
            };
        }

        if exponent < Transreal::one() {
            let (numer, denom) = (exponent.numer.clone(), exponent.denom.clone());
            return self
                .pow(numer)
                .root(denom)
                .approximated_if(exponent.approximate);
        }

        if exponent.is_one() {
            return self.clone();
        }

        if exponent.is_nullity() {
            return Transreal::nullity();
        }

        if exponent.is_infinite() {
            if self.is_nullity() {
                return Transreal::nullity();
            }
            let magnitude = self.abs();
            return if magnitude < Transreal::one() {
                Transreal::zero()
            } else if magnitude.is_one() {
                Transreal::nullity()
            } else {
                Transreal::infinity()
            };
        }

        if exponent.is_integer() {
            let e = exponent.numer.magnitude();
            return Transreal::with_approximation(
                num_traits::Pow::pow(&self.numer, e),
                num_traits::Pow::pow(&self.denom, e),
                self.approximate || exponent.approximate,
            );
        }

        // split into whole and fractional parts: x^(w + f/d) = x^w * x^(f/d)
        let (whole, fraction) = exponent.numer.div_rem(&exponent.denom);
        let fraction =
            Transreal::with_approximation(fraction, exponent.denom.clone(), exponent.approximate);
        self.pow(whole) * self.pow(fraction)
    }

    /// Computes `self^exponent mod modulus` (floor modulo)
    #[inline]
    pub fn pow_mod<E: Into<Transreal>, M: Into<Transreal>>(
        &self,
        exponent: E,
        modulus: M,
    ) -> Transreal {
        self.pow(exponent).mod_floor(modulus)
    }

    /// Floor division `⌊self / rhs⌋`
    #[inline]
    pub fn div_floor<T: Into<Transreal>>(&self, rhs: T) -> Transreal {
        self.div_ref(&rhs.into()).floor()
    }

    /// Floor modulo, defined as `self - rhs * ⌊self / rhs⌋`
    #[inline]
    pub fn mod_floor<T: Into<Transreal>>(&self, rhs: T) -> Transreal {
        self.div_mod_floor(rhs).1
    }

    /// Returns `(⌊self / rhs⌋, self - rhs * ⌊self / rhs⌋)`
    pub fn div_mod_floor<T: Into<Transreal>>(&self, rhs: T) -> (Transreal, Transreal) {
        let rhs = rhs.into();
        let quotient = self.div_floor(&rhs);
        let remainder = self - &rhs * &quotient;
        (quotient, remainder)
    }
}

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $inner:ident) => {
        impl<'a, 'b> $imp<&'b Transreal> for &'a Transreal {
            type Output = Transreal;
            #[inline]
            fn $method(self, rhs: &'b Transreal) -> Transreal {
                self.$inner(rhs)
            }
        }
        impl<'b> $imp<&'b Transreal> for Transreal {
            type Output = Transreal;
            #[inline]
            fn $method(self, rhs: &'b Transreal) -> Transreal {
                (&self).$inner(rhs)
            }
        }
        impl<'a> $imp<Transreal> for &'a Transreal {
            type Output = Transreal;
            #[inline]
            fn $method(self, rhs: Transreal) -> Transreal {
                self.$inner(&rhs)
            }
        }
        impl $imp<Transreal> for Transreal {
            type Output = Transreal;
            #[inline]
            fn $method(self, rhs: Transreal) -> Transreal {
                (&self).$inner(&rhs)
            }
        }
    };
}

forward_binop!(impl Add, add, add_ref);
forward_binop!(impl Sub, sub, sub_ref);
forward_binop!(impl Mul, mul, mul_ref);
forward_binop!(impl Div, div, div_ref);
forward_binop!(impl Rem, rem, rem_ref);

// Operations with plain numbers on either side
macro_rules! scalar_binop {
    (impl $imp:ident, $method:ident, $inner:ident; $($scalar:ty),*) => {$(
        impl $imp<$scalar> for Transreal {
            type Output = Transreal;
            #[inline]
            fn $method(self, rhs: $scalar) -> Transreal {
                self.$inner(&Transreal::from(rhs))
            }
        }
        impl<'a> $imp<$scalar> for &'a Transreal {
            type Output = Transreal;
            #[inline]
            fn $method(self, rhs: $scalar) -> Transreal {
                self.$inner(&Transreal::from(rhs))
            }
        }
        impl $imp<Transreal> for $scalar {
            type Output = Transreal;
            #[inline]
            fn $method(self, rhs: Transreal) -> Transreal {
                Transreal::from(self).$inner(&rhs)
            }
        }
        impl<'a> $imp<&'a Transreal> for $scalar {
            type Output = Transreal;
            #[inline]
            fn $method(self, rhs: &'a Transreal) -> Transreal {
                Transreal::from(self).$inner(rhs)
            }
        }
    )*};
}

macro_rules! scalar_binops {
    ($($scalar:ty),*) => {
        scalar_binop!(impl Add, add, add_ref; $($scalar),*);
        scalar_binop!(impl Sub, sub, sub_ref; $($scalar),*);
        scalar_binop!(impl Mul, mul, mul_ref; $($scalar),*);
        scalar_binop!(impl Div, div, div_ref; $($scalar),*);
        scalar_binop!(impl Rem, rem, rem_ref; $($scalar),*);
    };
}

scalar_binops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, BigInt);

macro_rules! assign_op {
    (impl $imp:ident, $method:ident, $op:ident, $op_method:ident) => {
        impl<T> $imp<T> for Transreal
        where
            for<'a> &'a Transreal: $op<T, Output = Transreal>,
        {
            #[inline]
            fn $method(&mut self, rhs: T) {
                *self = $op::$op_method(&*self, rhs);
            }
        }
    };
}

assign_op!(impl AddAssign, add_assign, Add, add);
assign_op!(impl SubAssign, sub_assign, Sub, sub);
assign_op!(impl MulAssign, mul_assign, Mul, mul);
assign_op!(impl DivAssign, div_assign, Div, div);
assign_op!(impl RemAssign, rem_assign, Rem, rem);

impl Neg for Transreal {
    type Output = Transreal;
    #[inline]
    fn neg(self) -> Transreal {
        self.neg_ref()
    }
}

impl<'a> Neg for &'a Transreal {
    type Output = Transreal;
    #[inline]
    fn neg(self) -> Transreal {
        self.neg_ref()
    }
}

impl<T: Into<Transreal>> num_traits::Pow<T> for Transreal {
    type Output = Transreal;
    #[inline]
    fn pow(self, rhs: T) -> Transreal {
        Transreal::pow(&self, rhs)
    }
}

impl<'a, T: Into<Transreal>> num_traits::Pow<T> for &'a Transreal {
    type Output = Transreal;
    #[inline]
    fn pow(self, rhs: T) -> Transreal {
        Transreal::pow(self, rhs)
    }
}

impl Inv for Transreal {
    type Output = Transreal;
    #[inline]
    fn inv(self) -> Transreal {
        self.recip()
    }
}

impl<'a> Inv for &'a Transreal {
    type Output = Transreal;
    #[inline]
    fn inv(self) -> Transreal {
        self.recip()
    }
}

impl Sum for Transreal {
    fn sum<I: Iterator<Item = Transreal>>(iter: I) -> Self {
        iter.fold(Transreal::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Transreal> for Transreal {
    fn sum<I: Iterator<Item = &'a Transreal>>(iter: I) -> Self {
        iter.fold(Transreal::zero(), |acc, x| acc + x)
    }
}

impl Product for Transreal {
    fn product<I: Iterator<Item = Transreal>>(iter: I) -> Self {
        iter.fold(Transreal::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Transreal> for Transreal {
    fn product<I: Iterator<Item = &'a Transreal>>(iter: I) -> Self {
        iter.fold(Transreal::one(), |acc, x| acc * x)
    }
}

impl Num for Transreal {
    type FromStrRadixErr = TransrealError;

    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<Self, TransrealError> {
        super::fmt::parse_radix(s, radix)
    }
}

impl Signed for Transreal {
    #[inline]
    fn abs(&self) -> Self {
        Transreal::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Transreal::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> Self {
        self.sign()
    }

    #[inline]
    fn is_positive(&self) -> bool {
        Transreal::is_positive(self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        Transreal::is_negative(self)
    }
}

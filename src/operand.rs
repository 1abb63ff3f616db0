//! Dynamically typed operands and the fallible form of the transreal operations.
//!
//! The operator traits on [Transreal] only accept statically known numeric types.
//! When the operand type is only known at runtime (an interpreter value, etc.),
//! wrap it in an [Operand] and use [apply]. A binary operation first lets a
//! transreal left operand coerce the right one, then lets a transreal right
//! operand coerce the left one, and fails only if neither works.

use crate::{Transreal, TransrealError};
use core::convert::TryFrom;
use log::debug;
use num_bigint::BigInt;
use num_traits::One;

/// A value that may be offered to transreal arithmetic
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Integer(BigInt),
    Float(f64),
    Transreal(Transreal),
    /// Text is never numeric, even when it spells a number
    Text(String),
}

impl Operand {
    /// Name of the operand kind, as used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Integer(_) => "int",
            Operand::Float(_) => "float",
            Operand::Transreal(_) => "transreal",
            Operand::Text(_) => "str",
        }
    }
}

macro_rules! operand_from {
    ($variant:ident: $($t:ty),*) => {$(
        impl From<$t> for Operand {
            #[inline]
            fn from(v: $t) -> Self {
                Operand::$variant(v.into())
            }
        }
    )*};
}

operand_from!(Integer: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);
operand_from!(Float: f32, f64);
operand_from!(Transreal: Transreal, &Transreal);
operand_from!(Text: &str, String);

impl TryFrom<Operand> for Transreal {
    type Error = TransrealError;

    fn try_from(operand: Operand) -> Result<Self, Self::Error> {
        match operand {
            Operand::Integer(i) => Ok(Transreal::from(i)),
            Operand::Float(v) => Ok(Transreal::from(v)),
            Operand::Transreal(t) => Ok(t),
            Operand::Text(s) => Err(TransrealError::invalid(format!(
                "cannot convert 'str' {:?} to a transreal number",
                s
            ))),
        }
    }
}

/// Binary operations available through [apply]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Floor division
    FloorDiv,
    /// Floor modulo
    Rem,
    Pow,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::FloorDiv => "//",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "**",
        }
    }

    /// Evaluate the operation on two transreal numbers
    pub fn eval(self, lhs: &Transreal, rhs: &Transreal) -> Transreal {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::FloorDiv => lhs.div_floor(rhs),
            BinaryOp::Rem => lhs % rhs,
            BinaryOp::Pow => lhs.pow(rhs),
        }
    }
}

fn unsupported(name: &str, lhs: &str, rhs: &str) -> TransrealError {
    TransrealError::invalid(format!(
        "unsupported operand type(s) for {}: '{}' and '{}'",
        name, lhs, rhs
    ))
}

fn dispatch<T, F>(name: &str, lhs: Operand, rhs: Operand, f: F) -> Result<T, TransrealError>
where
    F: FnOnce(&Transreal, &Transreal) -> T,
{
    match (lhs, rhs) {
        (Operand::Transreal(l), rhs) => {
            let rhs_name = rhs.type_name();
            match Transreal::try_from(rhs) {
                Ok(r) => Ok(f(&l, &r)),
                Err(_) => Err(unsupported(name, "transreal", rhs_name)),
            }
        }
        (lhs, Operand::Transreal(r)) => {
            let lhs_name = lhs.type_name();
            debug!("reflected {} for '{}' and 'transreal'", name, lhs_name);
            match Transreal::try_from(lhs) {
                Ok(l) => Ok(f(&l, &r)),
                Err(_) => Err(unsupported(name, lhs_name, "transreal")),
            }
        }
        (lhs, rhs) => Err(unsupported(name, lhs.type_name(), rhs.type_name())),
    }
}

/// Apply a binary operation where at least one side is expected to be a transreal number.
///
/// # Examples
///
/// ```
/// use num_transreal::{apply, BinaryOp, Transreal};
///
/// let half = Transreal::new(1, 2);
/// assert_eq!(apply(BinaryOp::Add, &half, 0.5).unwrap(), Transreal::new(1, 1));
/// assert_eq!(apply(BinaryOp::Div, 1, &half).unwrap(), Transreal::from(2));
/// assert!(apply(BinaryOp::Add, "1/2", &half).is_err());
/// ```
pub fn apply<L: Into<Operand>, R: Into<Operand>>(
    op: BinaryOp,
    lhs: L,
    rhs: R,
) -> Result<Transreal, TransrealError> {
    dispatch(op.symbol(), lhs.into(), rhs.into(), |l, r| op.eval(l, r))
}

/// Fallible form of [Transreal::div_mod_floor] with the same dispatch rules as [apply]
pub fn apply_divmod<L: Into<Operand>, R: Into<Operand>>(
    lhs: L,
    rhs: R,
) -> Result<(Transreal, Transreal), TransrealError> {
    dispatch("divmod()", lhs.into(), rhs.into(), |l, r| l.div_mod_floor(r))
}

impl Transreal {
    /// Create a transreal number from dynamically typed parts.
    ///
    /// Integers build the fraction directly and a float numerator is converted
    /// exactly before dividing by an integer denominator. If either part is
    /// already a transreal number the result is `numerator / denominator`
    /// (or the numerator itself for a unit denominator). Text and non-integer
    /// denominators are rejected.
    pub fn try_new<N: Into<Operand>, D: Into<Operand>>(
        numerator: N,
        denominator: D,
    ) -> Result<Self, TransrealError> {
        match (numerator.into(), denominator.into()) {
            (Operand::Integer(n), Operand::Integer(d)) => Ok(Transreal::new(n, d)),
            (Operand::Float(v), Operand::Integer(d)) => {
                let value = Transreal::from(v);
                Ok(if d.is_one() { value } else { value / d })
            }
            (n @ Operand::Text(_), _) => Transreal::try_from(n),
            (n, d) if matches!(n, Operand::Transreal(_)) || matches!(d, Operand::Transreal(_)) => {
                let n = Transreal::try_from(n)?;
                let d = Transreal::try_from(d)?;
                Ok(if d.is_one() { n } else { n / d })
            }
            (_, d) => Err(TransrealError::invalid(format!(
                "the denominator must be an integer, not '{}'",
                d.type_name()
            ))),
        }
    }

    /// Fallible form of [Transreal::pow_mod]
    pub fn try_pow_mod<E: Into<Operand>, M: Into<Operand>>(
        &self,
        exponent: E,
        modulus: M,
    ) -> Result<Transreal, TransrealError> {
        let exponent = Transreal::try_from(exponent.into())?;
        let modulus = Transreal::try_from(modulus.into())?;
        Ok(self.pow_mod(exponent, modulus))
    }

    /// Compare with a dynamic operand, `false` if it's not convertible
    pub fn eq_operand<T: Into<Operand>>(&self, other: T) -> bool {
        Transreal::try_from(other.into()).map_or(false, |other| *self == other)
    }

    fn try_compare<T, F>(&self, other: T, name: &str, cmp: F) -> Result<bool, TransrealError>
    where
        T: Into<Operand>,
        F: FnOnce(&Transreal, &Transreal) -> bool,
    {
        dispatch(name, Operand::Transreal(self.clone()), other.into(), cmp)
    }

    pub fn try_gt<T: Into<Operand>>(&self, other: T) -> Result<bool, TransrealError> {
        self.try_compare(other, ">", |a, b| a > b)
    }

    pub fn try_lt<T: Into<Operand>>(&self, other: T) -> Result<bool, TransrealError> {
        self.try_compare(other, "<", |a, b| a < b)
    }

    pub fn try_ge<T: Into<Operand>>(&self, other: T) -> Result<bool, TransrealError> {
        self.try_compare(other, ">=", |a, b| a >= b)
    }

    pub fn try_le<T: Into<Operand>>(&self, other: T) -> Result<bool, TransrealError> {
        self.try_compare(other, "<=", |a, b| a <= b)
    }
}

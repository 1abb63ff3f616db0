use super::Transreal;
use crate::TransrealError;
use core::fmt;
use core::str::FromStr;
use num_bigint::BigInt;
use num_traits::{Num, One, Zero};

impl fmt::Display for Transreal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.approximate {
            write!(f, "~")?;
        }

        match (self.denom.is_zero(), self.denom.is_one()) {
            (true, _) => {
                if self.numer.is_zero() {
                    write!(f, "nullity")
                } else if self.is_negative() {
                    write!(f, "-infinity")
                } else {
                    write!(f, "infinity")
                }
            }
            (false, true) => write!(f, "{}", self.numer),
            (false, false) => write!(f, "{}/{}", self.numer, self.denom),
        }
    }
}

impl FromStr for Transreal {
    type Err = TransrealError;

    /// Parse the textual form produced by [Display][fmt::Display], which is
    /// an integer, a fraction `n/d`, `infinity`, `-infinity` or `nullity`,
    /// optionally prefixed by `~` for approximated values.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_radix(s, 10)
    }
}

fn parse_error(s: &str) -> TransrealError {
    TransrealError::invalid(format!("cannot parse {:?} as a transreal number", s))
}

fn parse_integer(digits: &str, radix: u32, origin: &str) -> Result<BigInt, TransrealError> {
    BigInt::from_str_radix(digits, radix).map_err(|_| parse_error(origin))
}

pub(super) fn parse_radix(s: &str, radix: u32) -> Result<Transreal, TransrealError> {
    let text = s.trim();
    let (approximate, text) = match text.strip_prefix('~') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let value = match text {
        "infinity" | "+infinity" => Transreal::infinity(),
        "-infinity" => Transreal::neg_infinity(),
        "nullity" => Transreal::nullity(),
        _ => {
            if let Some((numer, denom)) = text.split_once('/') {
                Transreal::new(
                    parse_integer(numer, radix, s)?,
                    parse_integer(denom, radix, s)?,
                )
            } else {
                Transreal::from(parse_integer(text, radix, s)?)
            }
        }
    };
    Ok(value.approximated_if(approximate))
}

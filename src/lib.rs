//! Transreal arithmetic based on `num`: exact fractions extended with
//! positive and negative infinity and nullity, where division by zero is
//! always defined.

mod error;
pub mod operand;
pub mod traits;
mod transreal;

#[cfg(test)]
mod axioms;
#[cfg(test)]
mod proptests;

pub use error::TransrealError;
pub use operand::{apply, apply_divmod, BinaryOp, Operand};
pub use traits::Approximation;
#[cfg(feature = "serde")]
pub use transreal::TransrealParts;
pub use transreal::{Transreal, PRECISION};

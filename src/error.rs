use thiserror::Error;

/// Failure raised when a value cannot take part in transreal arithmetic.
///
/// Arithmetic itself never fails: division by zero, `0^0` or `∞ - ∞` all
/// have defined results. The only recoverable failure is an operand that
/// cannot be coerced into a [Transreal][crate::Transreal].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransrealError {
    #[error("invalid operand: {0}")]
    InvalidOperand(String),
}

impl TransrealError {
    #[inline]
    pub(crate) fn invalid<S: Into<String>>(reason: S) -> Self {
        TransrealError::InvalidOperand(reason.into())
    }
}

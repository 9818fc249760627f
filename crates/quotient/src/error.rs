//! Error types for fraction construction and arithmetic.

use thiserror::Error;

/// Errors raised while parsing or computing with fractions.
///
/// Operations that are well defined but have no exact rational answer
/// (`2^(1/2)`, `log_2(3)`) are not errors; they return `Ok(None)`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FractionError {
    /// The input does not have a recognized shape.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A zero denominator, or a division/reciprocal of zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An argument that must be an integer was not.
    #[error("parameters must be integer")]
    NonIntegerParameter,
}

impl FractionError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameter(reason.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FractionError>;

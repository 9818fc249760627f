//! Accepted construction inputs.
//!
//! Every public operation that takes a second operand accepts
//! `impl Into<FractionInput>`, so integers, floats, strings, pairs and
//! existing fractions can be passed directly.

use quotient_integers::Integer;

use crate::Fraction;

/// One component of a numerator/denominator pair.
///
/// Components must denote integers; `1.5` or `"2/3"` as a component raises
/// [`FractionError::NonIntegerParameter`](crate::FractionError::NonIntegerParameter).
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// An exact integer.
    Int(Integer),
    /// A float with no fractional part.
    Float(f64),
    /// A string that parses to an integer.
    Text(String),
}

/// A structured `{numerator, denominator, sign?}` record.
///
/// The represented value is `sign * numerator / denominator`, with the signs
/// of all three multiplied together.
#[derive(Clone, Debug, PartialEq)]
pub struct Parts {
    /// Numerator component.
    pub numerator: Scalar,
    /// Denominator component.
    pub denominator: Scalar,
    /// Optional extra sign; only its signum is used.
    pub sign: Option<i8>,
}

impl Parts {
    /// Creates a record without an explicit sign.
    pub fn new(numerator: impl Into<Scalar>, denominator: impl Into<Scalar>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
            sign: None,
        }
    }

    /// Attaches an explicit sign.
    #[must_use]
    pub fn with_sign(mut self, sign: i8) -> Self {
        self.sign = Some(sign);
        self
    }
}

/// The closed set of values a [`Fraction`] can be built from.
#[derive(Clone, Debug, PartialEq)]
pub enum FractionInput {
    /// An exact integer.
    Int(Integer),
    /// A float, converted exactly when integral and by best rational
    /// approximation otherwise.
    Float(f64),
    /// A decimal, repeating decimal, `n/d`, `n:d` or mixed `i n/d` string.
    Text(String),
    /// A numerator/denominator pair, from the two-argument or `[n, d]` form.
    Pair(Scalar, Scalar),
    /// A structured record.
    Parts(Parts),
    /// An already canonical fraction.
    Value(Fraction),
}

macro_rules! integer_inputs {
    ($($t:ty),*) => {$(
        impl From<$t> for Scalar {
            fn from(value: $t) -> Self {
                Scalar::Int(Integer::from(value))
            }
        }

        impl From<$t> for FractionInput {
            fn from(value: $t) -> Self {
                FractionInput::Int(Integer::from(value))
            }
        }
    )*};
}

integer_inputs!(i32, i64, u32, u64, Integer);

impl From<&Integer> for Scalar {
    fn from(value: &Integer) -> Self {
        Scalar::Int(value.clone())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<&Integer> for FractionInput {
    fn from(value: &Integer) -> Self {
        FractionInput::Int(value.clone())
    }
}

impl From<f64> for FractionInput {
    fn from(value: f64) -> Self {
        FractionInput::Float(value)
    }
}

impl From<&str> for FractionInput {
    fn from(value: &str) -> Self {
        FractionInput::Text(value.to_owned())
    }
}

impl From<String> for FractionInput {
    fn from(value: String) -> Self {
        FractionInput::Text(value)
    }
}

impl From<&String> for FractionInput {
    fn from(value: &String) -> Self {
        FractionInput::Text(value.clone())
    }
}

impl<A: Into<Scalar>, B: Into<Scalar>> From<(A, B)> for FractionInput {
    fn from((numerator, denominator): (A, B)) -> Self {
        FractionInput::Pair(numerator.into(), denominator.into())
    }
}

impl<T: Into<Scalar>> From<[T; 2]> for FractionInput {
    fn from([numerator, denominator]: [T; 2]) -> Self {
        FractionInput::Pair(numerator.into(), denominator.into())
    }
}

impl From<Parts> for FractionInput {
    fn from(value: Parts) -> Self {
        FractionInput::Parts(value)
    }
}

impl From<Fraction> for FractionInput {
    fn from(value: Fraction) -> Self {
        FractionInput::Value(value)
    }
}

impl From<&Fraction> for FractionInput {
    fn from(value: &Fraction) -> Self {
        FractionInput::Value(value.clone())
    }
}

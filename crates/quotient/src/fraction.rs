//! The canonical rational value.

use num_traits::{One, Zero};
use quotient_integers::Integer;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{FractionError, Result};
use crate::input::{FractionInput, Parts, Scalar};

/// An exact rational number `sign * numerator / denominator`.
///
/// Always in canonical form:
/// - `denominator >= 1` and `numerator >= 0`
/// - `gcd(numerator, denominator) = 1`
/// - `sign` is `-1`, `0` or `1`, and is `0` exactly when the value is zero,
///   in which case the denominator is `1`
///
/// Values are immutable. Every operation returns a new fraction, so a
/// `Fraction` can be shared freely between threads.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    sign: i8,
    numerator: Integer,
    denominator: Integer,
}

impl Fraction {
    /// Builds a fraction that is already canonical.
    pub(crate) fn from_canonical(sign: i8, numerator: Integer, denominator: Integer) -> Self {
        debug_assert!(denominator.signum() > 0);
        debug_assert!(!numerator.is_negative());
        debug_assert!(numerator.gcd(&denominator).is_one());
        debug_assert_eq!(sign == 0, numerator.is_zero());
        Self {
            sign,
            numerator,
            denominator,
        }
    }

    /// Reduction step: divides out the gcd and folds the sign.
    ///
    /// `numerator` and `denominator` may carry their own signs; they are
    /// multiplied into `sign`.
    pub(crate) fn reduce(sign: i8, numerator: Integer, denominator: Integer) -> Result<Self> {
        if denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Self::normalized(sign, numerator, denominator))
    }

    /// Reduction for a denominator already known to be non-zero.
    pub(crate) fn normalized(sign: i8, numerator: Integer, denominator: Integer) -> Self {
        debug_assert!(!denominator.is_zero());
        let sign = sign.signum() * numerator.signum() * denominator.signum();
        if sign == 0 {
            return Self::zero();
        }
        let numerator = numerator.abs();
        let denominator = denominator.abs();
        let g = numerator.gcd(&denominator);
        Self::from_canonical(sign, numerator / &g, denominator / &g)
    }

    /// Reduces a signed numerator over a signed denominator.
    pub(crate) fn from_signed(numerator: Integer, denominator: Integer) -> Result<Self> {
        Self::reduce(1, numerator, denominator)
    }

    /// Creates an integer-valued fraction.
    #[must_use]
    pub fn from_integer(value: Integer) -> Self {
        Self::from_canonical(value.signum(), value.abs(), Integer::one())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn sign(&self) -> i8 {
        self.sign
    }

    /// The non-negative numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// The positive denominator.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Numerator with the sign applied.
    #[must_use]
    pub fn signed_numerator(&self) -> Integer {
        if self.sign < 0 {
            -&self.numerator
        } else {
            self.numerator.clone()
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign < 0
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        self.is_integer().then(|| self.signed_numerator())
    }

    /// Three-way comparison by cross multiplication.
    pub(crate) fn cmp_value(&self, other: &Self) -> Ordering {
        if self.sign != other.sign {
            return self.sign.cmp(&other.sign);
        }
        let lhs = self.signed_numerator() * &other.denominator;
        let rhs = other.signed_numerator() * &self.denominator;
        lhs.cmp(&rhs)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from_canonical(0, Integer::zero(), Integer::one())
    }

    fn is_zero(&self) -> bool {
        self.sign == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::from_canonical(1, Integer::one(), Integer::one())
    }

    fn is_one(&self) -> bool {
        self.sign > 0 && self.numerator.is_one() && self.denominator.is_one()
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.sign < 0 { "-" } else { "" };
        write!(f, "Fraction({sign}{}/{})", self.numerator, self.denominator)
    }
}

/// Repeating-decimal notation, e.g. `3.(142857)`.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(value: f64) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<Integer> for Fraction {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self::from_integer(Integer::new(value))
    }
}

/// Wire form: exactly `sign`, `numerator`, `denominator`, in that order.
/// The integers are decimal strings so no precision is lost.
#[derive(Serialize, Deserialize)]
#[serde(rename = "Fraction")]
struct FractionRepr {
    sign: i8,
    numerator: String,
    denominator: String,
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        FractionRepr {
            sign: self.sign,
            numerator: self.numerator.to_string(),
            denominator: self.denominator.to_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let repr = FractionRepr::deserialize(deserializer)?;
        let parts = Parts {
            numerator: Scalar::Text(repr.numerator),
            denominator: Scalar::Text(repr.denominator),
            sign: Some(repr.sign),
        };
        Self::parse(FractionInput::Parts(parts)).map_err(serde::de::Error::custom)
    }
}

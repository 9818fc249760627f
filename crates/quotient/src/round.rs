//! Rounding and comparison.
//!
//! Rounding to `k` places works on the exact value scaled by `10^k`; no
//! floating point is involved. Halves round toward positive infinity:
//! `round(10.5) = 11`, `round(-10.5) = -10`, `round(-0.5) = 0`.

use num_traits::Zero;
use quotient_integers::Integer;
use std::cmp::Ordering;

use crate::error::{FractionError, Result};
use crate::input::FractionInput;
use crate::Fraction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rounding {
    Floor,
    Ceil,
    HalfUp,
}

impl Rounding {
    /// Rounds `n / d` (with `d > 0`) to an integer.
    fn apply(self, n: &Integer, d: &Integer) -> Integer {
        match self {
            Rounding::Floor => n.div_floor(d),
            Rounding::Ceil => n.div_ceil(d),
            // floor(n/d + 1/2) = floor((2n + d) / 2d)
            Rounding::HalfUp => {
                let two = Integer::new(2);
                (&two * n + d).div_floor(&(&two * d))
            }
        }
    }
}

impl Fraction {
    /// Rounds to the nearest multiple of `10^-places` in the given mode.
    /// Negative `places` round to tens, hundreds, and so on.
    fn round_places(&self, places: i64, mode: Rounding) -> Result<Self> {
        let exp = u32::try_from(places.unsigned_abs())
            .map_err(|_| FractionError::invalid("place count out of range"))?;
        let scale = Integer::ten_pow(exp);
        let n = self.signed_numerator();

        if places >= 0 {
            let q = mode.apply(&(n * &scale), self.denominator());
            Self::from_signed(q, scale)
        } else {
            let q = mode.apply(&n, &(self.denominator() * &scale));
            Ok(Self::from_integer(q * scale))
        }
    }

    fn round_by_input(&self, places: impl Into<FractionInput>, mode: Rounding) -> Result<Self> {
        let places = Self::parse(places)?
            .to_integer()
            .ok_or(FractionError::NonIntegerParameter)?;
        let places = places
            .to_i64()
            .ok_or_else(|| FractionError::invalid("place count out of range"))?;
        self.round_places(places, mode)
    }

    /// Smallest multiple of `10^-places` not below `self`.
    ///
    /// # Errors
    ///
    /// Only for place counts too large to scale by.
    pub fn ceil(&self, places: u32) -> Result<Self> {
        self.round_places(i64::from(places), Rounding::Ceil)
    }

    /// Largest multiple of `10^-places` not above `self`.
    ///
    /// # Errors
    ///
    /// Only for place counts too large to scale by.
    pub fn floor(&self, places: u32) -> Result<Self> {
        self.round_places(i64::from(places), Rounding::Floor)
    }

    /// Nearest multiple of `10^-places`, halves toward positive infinity.
    ///
    /// # Errors
    ///
    /// Only for place counts too large to scale by.
    pub fn round(&self, places: u32) -> Result<Self> {
        self.round_places(i64::from(places), Rounding::HalfUp)
    }

    /// [`Fraction::ceil`] with the place count given as any input.
    ///
    /// # Errors
    ///
    /// [`FractionError::NonIntegerParameter`] if `places` is not an integer.
    pub fn ceil_by(&self, places: impl Into<FractionInput>) -> Result<Self> {
        self.round_by_input(places, Rounding::Ceil)
    }

    /// [`Fraction::floor`] with the place count given as any input.
    ///
    /// # Errors
    ///
    /// [`FractionError::NonIntegerParameter`] if `places` is not an integer.
    pub fn floor_by(&self, places: impl Into<FractionInput>) -> Result<Self> {
        self.round_by_input(places, Rounding::Floor)
    }

    /// [`Fraction::round`] with the place count given as any input.
    ///
    /// # Errors
    ///
    /// [`FractionError::NonIntegerParameter`] if `places` is not an integer.
    pub fn round_by(&self, places: impl Into<FractionInput>) -> Result<Self> {
        self.round_by_input(places, Rounding::HalfUp)
    }

    /// Rounds the quotient `self / step` half toward positive infinity and
    /// multiplies back, giving the nearest multiple of `step`.
    ///
    /// # Errors
    ///
    /// [`FractionError::DivisionByZero`] if `step` is zero.
    pub fn round_to(&self, step: impl Into<FractionInput>) -> Result<Self> {
        let step = Self::parse(step)?;
        let quotient = self.div(&step)?;
        let k = Rounding::HalfUp.apply(&quotient.signed_numerator(), quotient.denominator());
        Ok(Self::from_integer(k).product(&step))
    }

    /// Compares with any input.
    ///
    /// # Errors
    ///
    /// Fails only if `other` cannot be parsed.
    pub fn compare(&self, other: impl Into<FractionInput>) -> Result<Ordering> {
        Ok(self.cmp_value(&Self::parse(other)?))
    }

    /// `self == other`.
    ///
    /// # Errors
    ///
    /// Fails only if `other` cannot be parsed.
    pub fn equals(&self, other: impl Into<FractionInput>) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// `self < other`.
    ///
    /// # Errors
    ///
    /// Fails only if `other` cannot be parsed.
    pub fn lt(&self, other: impl Into<FractionInput>) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// `self <= other`.
    ///
    /// # Errors
    ///
    /// Fails only if `other` cannot be parsed.
    pub fn lte(&self, other: impl Into<FractionInput>) -> Result<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// `self > other`.
    ///
    /// # Errors
    ///
    /// Fails only if `other` cannot be parsed.
    pub fn gt(&self, other: impl Into<FractionInput>) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// `self >= other`.
    ///
    /// # Errors
    ///
    /// Fails only if `other` cannot be parsed.
    pub fn gte(&self, other: impl Into<FractionInput>) -> Result<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// True if `self` is an integer multiple of `other`; false for zero `other`.
    ///
    /// # Errors
    ///
    /// Fails only if `other` cannot be parsed.
    pub fn divisible(&self, other: impl Into<FractionInput>) -> Result<bool> {
        let other = Self::parse(other)?;
        if other.is_zero() {
            return Ok(false);
        }
        let lhs = self.numerator() * other.denominator();
        let rhs = other.numerator() * self.denominator();
        Ok((lhs % rhs).is_zero())
    }
}

//! Arbitrary precision integers.
//!
//! This module wraps `dashu::Integer` with the exact operations the
//! fraction engine is built on: gcd/lcm, floor and ceiling division,
//! integer powers and exact integer roots.

use dashu::base::error::ParseError;
use dashu::base::{Abs, BitTest, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

/// An arbitrary precision integer.
///
/// Division and remainder truncate toward zero, matching the primitive
/// integer types. Use [`Integer::div_floor`] and [`Integer::div_ceil`] for
/// the rounding variants.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Creates an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns `10^exp`.
    #[must_use]
    pub fn ten_pow(exp: u32) -> Self {
        Self::new(10).pow(exp)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the number of bits needed to represent the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Computes the greatest common divisor. The result is never negative.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Computes the least common multiple. Zero if either side is zero.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        Self(&self.0 / &g.0 * &other.0).abs()
    }

    /// Quotient rounded toward negative infinity.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn div_floor(&self, other: &Self) -> Self {
        let q = &self.0 / &other.0;
        let r = &self.0 - &q * &other.0;
        if !r.is_zero() && DashuSigned::is_negative(&r) != other.is_negative() {
            Self(q - IBig::ONE)
        } else {
            Self(q)
        }
    }

    /// Quotient rounded toward positive infinity.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn div_ceil(&self, other: &Self) -> Self {
        -(-self).div_floor(other)
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Attempts to convert to a u32.
    #[must_use]
    pub fn to_u32(&self) -> Option<u32> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Largest integer `r` with `r^n <= self`, for non-negative `self` and `n >= 1`.
    ///
    /// Newton iteration started above the root, so the sequence decreases
    /// monotonically onto the floor root.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or `self` is negative.
    #[must_use]
    pub fn floor_root(&self, n: u32) -> Self {
        assert!(n > 0, "zeroth root is undefined");
        assert!(!self.is_negative(), "floor_root of a negative integer");
        if n == 1 || self.is_zero() || self.is_one() {
            return self.clone();
        }

        let n_usize = n as usize;
        let start_bits = (self.bit_len() + n_usize - 1) / n_usize;
        let mut x = Self::new(2).pow(start_bits as u32);
        let n_big = Self::from(n);
        let n_minus_one = Self::from(n - 1);

        loop {
            let y = (&n_minus_one * &x + self / &x.pow(n - 1)) / n_big.clone();
            if y >= x {
                return x;
            }
            x = y;
        }
    }

    /// Exact `n`-th root, if `self` is a perfect `n`-th power.
    ///
    /// Negative values only have a real root for odd `n`.
    #[must_use]
    pub fn exact_root(&self, n: u32) -> Option<Self> {
        if n == 0 {
            return None;
        }
        if self.is_negative() {
            if n % 2 == 0 {
                return None;
            }
            return self.abs().exact_root(n).map(|r| -r);
        }
        let root = self.floor_root(n);
        (root.pow(n) == *self).then_some(root)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

/// Implements a binary operator for owned, mixed and borrowed operands by
/// forwarding to the `IBig` implementation.
macro_rules! forward_binop {
    ($($Trait:ident :: $method:ident),* $(,)?) => {$(
        impl $Trait for Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                Integer(self.0.$method(rhs.0))
            }
        }

        impl $Trait<&Integer> for Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer(self.0.$method(&rhs.0))
            }
        }

        impl $Trait for &Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer((&self.0).$method(&rhs.0))
            }
        }
    )*};
}

forward_binop!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<u32> for Integer {
    fn from(value: u32) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

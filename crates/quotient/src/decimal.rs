//! Decimal rendering with a parenthesized repeating group.
//!
//! For `n/d` the repeating part has length `t`, the multiplicative order of
//! 10 modulo `d` with its factors of 2 and 5 removed, and starts at the
//! smallest `s` with `10^s ≡ 10^(s+t) (mod d)`.
//!
//! The order is found by a linear search bounded by
//! [`FractionConfig::max_cycle_len`]. Denominators whose period exceeds the
//! bound are rendered as truncated digits instead. Computing the order from
//! a factorization of the group order would remove the bound.

use num_traits::{One, Zero};
use quotient_integers::{mod_pow, multiplicative_order, Integer};
use tracing::trace;

use crate::config::FractionConfig;
use crate::Fraction;

/// Shape of the fractional expansion of `1/d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Period {
    /// `d` has no prime factors besides 2 and 5.
    Terminating,
    /// `start` non-repeating digits, then a cycle of `len` digits.
    Repeating { start: usize, len: u64 },
    /// The cycle is longer than the search bound.
    Unknown,
}

pub(crate) fn period(denominator: &Integer, max_cycle_len: u64) -> Period {
    let mut coprime = denominator.clone();
    for p in [Integer::new(2), Integer::new(5)] {
        while (&coprime % &p).is_zero() {
            coprime = coprime / &p;
        }
    }
    if coprime.is_one() {
        return Period::Terminating;
    }

    match multiplicative_order(&Integer::new(10), &coprime, max_cycle_len) {
        Some(len) => Period::Repeating {
            start: cycle_start(denominator, len),
            len,
        },
        None => Period::Unknown,
    }
}

/// Smallest `s` with `10^s ≡ 10^(s+len) (mod d)`.
///
/// `s = max(v2(d), v5(d))`, which never exceeds the bit length of `d`.
fn cycle_start(denominator: &Integer, len: u64) -> usize {
    let ten = Integer::new(10);
    let limit = denominator.bit_len();
    let mut lo = Integer::one() % denominator.clone();
    let mut hi = mod_pow(&ten, len, denominator);
    for s in 0..limit {
        if lo == hi {
            return s;
        }
        lo = &(&lo * &ten) % denominator;
        hi = &(&hi * &ten) % denominator;
    }
    limit
}

/// Long division state over the magnitude of a fraction.
struct LongDivision<'a> {
    remainder: Integer,
    denominator: &'a Integer,
    ten: Integer,
}

impl LongDivision<'_> {
    fn next_digit(&mut self) -> Integer {
        let scaled = &self.remainder * &self.ten;
        let digit = &scaled / self.denominator;
        self.remainder = scaled % self.denominator;
        digit
    }

    fn push_digits(&mut self, out: &mut String, count: u64) {
        for _ in 0..count {
            out.push_str(&self.next_digit().to_string());
        }
    }
}

impl Fraction {
    /// Repeating-decimal notation with default limits, e.g. `"3.(142857)"`,
    /// `"-0.5"`, `"4"`.
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        self.to_decimal_string_with(&FractionConfig::default())
    }

    /// Repeating-decimal notation.
    ///
    /// If the period is longer than `config.max_cycle_len`, the first
    /// `config.decimal_places` digits are printed without a group.
    #[must_use]
    pub fn to_decimal_string_with(&self, config: &FractionConfig) -> String {
        let denominator = self.denominator();
        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&(self.numerator() / denominator).to_string());

        let mut division = LongDivision {
            remainder: self.numerator() % denominator,
            denominator,
            ten: Integer::new(10),
        };
        if division.remainder.is_zero() {
            return out;
        }
        out.push('.');

        match period(denominator, config.max_cycle_len) {
            Period::Terminating => {
                while !division.remainder.is_zero() {
                    division.push_digits(&mut out, 1);
                }
            }
            Period::Repeating { start, len } => {
                division.push_digits(&mut out, start as u64);
                out.push('(');
                division.push_digits(&mut out, len);
                out.push(')');
            }
            Period::Unknown => {
                trace!(
                    %denominator,
                    max_cycle_len = config.max_cycle_len,
                    "period not found, truncating"
                );
                for _ in 0..config.decimal_places {
                    if division.remainder.is_zero() {
                        break;
                    }
                    division.push_digits(&mut out, 1);
                }
            }
        }
        out
    }

    /// Plain decimal digits truncated (not rounded) after `places`
    /// fractional digits, without a repeating group. Trailing zeros are not
    /// padded: `1/2` gives `"0.5"` for any `places >= 1`.
    #[must_use]
    pub fn to_decimal(&self, places: u32) -> String {
        let denominator = self.denominator();
        let mut body = (self.numerator() / denominator).to_string();
        let mut division = LongDivision {
            remainder: self.numerator() % denominator,
            denominator,
            ten: Integer::new(10),
        };

        if places > 0 && !division.remainder.is_zero() {
            body.push('.');
            for _ in 0..places {
                if division.remainder.is_zero() {
                    break;
                }
                division.push_digits(&mut body, 1);
            }
        }

        let truncated_to_zero = body.chars().all(|c| c == '0' || c == '.');
        if self.is_negative() && !truncated_to_zero {
            body.insert(0, '-');
        }
        body
    }
}

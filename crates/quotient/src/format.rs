//! Fraction, mixed-number and LaTeX strings, plus the lossy float view.

use num_traits::Zero;
use quotient_integers::Integer;
use std::fmt::Write;

use crate::Fraction;

/// Bits of quotient kept when converting to `f64`; comfortably above the
/// 53-bit mantissa so the final rounding happens once.
const F64_QUOTIENT_BITS: i64 = 64;

impl Fraction {
    /// Splits off the whole part when a mixed form is requested and the
    /// value is at least one in magnitude.
    fn mixed_parts(&self, mixed: bool) -> (Option<Integer>, Integer) {
        let whole = self.numerator() / self.denominator();
        if mixed && !whole.is_zero() {
            (Some(whole), self.numerator() % self.denominator())
        } else {
            (None, self.numerator().clone())
        }
    }

    /// `"n/d"`, or `"w n/d"` when `mixed` is set; integers print without a
    /// denominator. Negative values carry a leading `-`.
    ///
    /// `-7/4` renders as `"-7/4"` or, mixed, `"-1 3/4"`.
    #[must_use]
    pub fn to_fraction(&self, mixed: bool) -> String {
        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        if self.is_integer() {
            let _ = write!(out, "{}", self.numerator());
            return out;
        }
        let (whole, numerator) = self.mixed_parts(mixed);
        if let Some(whole) = whole {
            let _ = write!(out, "{whole} ");
        }
        let _ = write!(out, "{numerator}/{}", self.denominator());
        out
    }

    /// LaTeX form: `\frac{n}{d}`, mixed as `w\frac{n}{d}`.
    #[must_use]
    pub fn to_latex(&self, mixed: bool) -> String {
        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        if self.is_integer() {
            let _ = write!(out, "{}", self.numerator());
            return out;
        }
        let (whole, numerator) = self.mixed_parts(mixed);
        if let Some(whole) = whole {
            let _ = write!(out, "{whole}");
        }
        let _ = write!(out, "\\frac{{{numerator}}}{{{}}}", self.denominator());
        out
    }

    /// Nearest `f64`, for interoperability only.
    ///
    /// Computed from an integer quotient scaled to about 64 significant
    /// bits, so numerators and denominators far outside the `f64` range
    /// still give a finite result when the value itself is in range.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }

        let n_bits = self.numerator().bit_len() as i64;
        let d_bits = self.denominator().bit_len() as i64;
        let shift = F64_QUOTIENT_BITS + d_bits - n_bits;

        let two = Integer::new(2);
        let quotient = if shift >= 0 {
            (self.numerator() * &two.pow(shift as u32)) / self.denominator().clone()
        } else {
            self.numerator() / &(self.denominator() * &two.pow((-shift) as u32))
        };

        let mantissa: f64 = quotient.to_string().parse().unwrap_or(f64::NAN);
        let magnitude = scale_by_power_of_two(mantissa, -shift);
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// `value * 2^exp`, split into steps so intermediate powers stay finite.
fn scale_by_power_of_two(mut value: f64, mut exp: i64) -> f64 {
    const STEP: i64 = 1000;
    while exp > STEP {
        value *= 2f64.powi(STEP as i32);
        exp -= STEP;
    }
    while exp < -STEP {
        value *= 2f64.powi(-STEP as i32);
        exp += STEP;
    }
    value * 2f64.powi(exp as i32)
}

//! # quotient
//!
//! Exact rational numbers over arbitrary precision integers.
//!
//! A [`Fraction`] is always stored in lowest terms with a separate sign.
//! It can be built from integers, floats, numerator/denominator pairs and
//! strings such as `"-3/4"`, `"1 2/3"`, `"0.1(6)"` or `"0.'3'"`.
//!
//! ## Features
//!
//! - **Exact arithmetic**: add, sub, mul, div, truncated mod, gcd, lcm
//! - **Rational powers and logarithms**: `Ok(None)` when the result is irrational
//! - **Repeating decimals**: parsed and rendered with a parenthesized period
//! - **Continued fractions**: expansion and best approximation within a tolerance
//! - **Rounding**: floor, ceil and half-up to decimal places or to a multiple
//!
//! ## Quick Start
//!
//! ```rust
//! use quotient::Fraction;
//!
//! let x = Fraction::parse("1/3")?;
//! let y = x.add("0.1(6)")?;
//! assert_eq!(y.to_fraction(false), "1/2");
//! assert_eq!(Fraction::parse("22/7")?.to_string(), "3.(142857)");
//! # Ok::<(), quotient::FractionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::should_implement_trait)]

mod arith;
pub mod config;
pub mod continued;
mod decimal;
pub mod error;
mod format;
pub mod fraction;
pub mod input;
mod ops;
mod parse;
mod round;

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests;

pub use config::FractionConfig;
pub use continued::ContinuedFraction;
pub use error::{FractionError, Result};
pub use fraction::Fraction;
pub use input::{FractionInput, Parts, Scalar};
pub use quotient_integers as integers;
pub use quotient_integers::Integer;

//! # quotient-integers
//!
//! Arbitrary precision integer core for the quotient fraction engine.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`) with exact powers and roots
//! - Modular exponentiation and multiplicative order (`ModIntDyn`)
//! - Trial-division prime factorization
//!
//! All functions are pure; nothing here keeps state between calls.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod factor;
pub mod integer;
pub mod modular;

#[cfg(test)]
mod proptests;

pub use factor::{factorize, Factorization};
pub use integer::Integer;
pub use modular::{mod_pow, multiplicative_order, ModIntDyn};

//! Modular arithmetic over a runtime modulus.
//!
//! Decimal period detection needs `10^t mod d` for arbitrary denominators,
//! so the modulus is an [`Integer`] rather than a compile-time constant.

use num_traits::{One, Zero};
use std::fmt;

use crate::Integer;

/// A modular integer with a runtime-determined modulus.
///
/// The stored value is always in `0..modulus`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ModIntDyn {
    value: Integer,
    modulus: Integer,
}

impl ModIntDyn {
    /// Creates a new modular integer, reducing `value` into `0..modulus`.
    ///
    /// # Panics
    ///
    /// Panics if modulus is not positive.
    #[must_use]
    pub fn new(value: Integer, modulus: Integer) -> Self {
        assert!(modulus.signum() > 0, "modulus must be positive");
        let r = &value % &modulus;
        let value = if r.is_negative() { r + &modulus } else { r };
        Self { value, modulus }
    }

    /// Returns the value.
    #[must_use]
    pub fn value(&self) -> &Integer {
        &self.value
    }

    /// Returns the modulus.
    #[must_use]
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    /// Multiplies two residues sharing a modulus.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.modulus, other.modulus);
        Self {
            value: &(&self.value * &other.value) % &self.modulus,
            modulus: self.modulus.clone(),
        }
    }

    /// Computes self^exp using binary exponentiation.
    #[must_use]
    pub fn pow(&self, mut exp: u64) -> Self {
        let mut base = self.clone();
        let mut result = Self::new(Integer::one(), self.modulus.clone());

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }

        result
    }
}

impl fmt::Debug for ModIntDyn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

impl fmt::Display for ModIntDyn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Computes `base^exp mod modulus`.
///
/// # Panics
///
/// Panics if modulus is not positive.
#[must_use]
pub fn mod_pow(base: &Integer, exp: u64, modulus: &Integer) -> Integer {
    ModIntDyn::new(base.clone(), modulus.clone())
        .pow(exp)
        .value
}

/// Smallest `t >= 1` with `base^t ≡ 1 (mod modulus)`, searching at most `limit` steps.
///
/// Returns `None` when `base` is not a unit modulo `modulus` or the order
/// exceeds `limit`. The search is linear in the order.
#[must_use]
pub fn multiplicative_order(base: &Integer, modulus: &Integer, limit: u64) -> Option<u64> {
    if modulus.signum() <= 0 {
        return None;
    }
    if modulus.is_one() {
        return Some(1);
    }
    if !base.gcd(modulus).is_one() {
        return None;
    }

    let step = ModIntDyn::new(base.clone(), modulus.clone());
    let mut acc = step.clone();
    for t in 1..=limit {
        if acc.value.is_one() {
            return Some(t);
        }
        if acc.value.is_zero() {
            return None;
        }
        acc = acc.mul(&step);
    }
    None
}

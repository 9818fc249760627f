//! Engine limits.

use num_traits::One;
use quotient_integers::Integer;

use crate::Fraction;

/// Limits for the operations that approximate or search.
#[derive(Clone, Debug)]
pub struct FractionConfig {
    /// Largest denominator the float-to-fraction mediant walk may produce.
    pub max_float_denominator: u64,
    /// Longest repeating decimal period the renderer searches for.
    ///
    /// The period of `1/d` can be as long as `d - 1`, so denominators with a
    /// larger multiplicative order of 10 fall back to truncated digits.
    pub max_cycle_len: u64,
    /// Tolerance used by [`Fraction::simplify_with`].
    pub simplify_epsilon: Fraction,
    /// Digits printed when no period is found within `max_cycle_len`.
    pub decimal_places: u32,
}

impl Default for FractionConfig {
    fn default() -> Self {
        Self {
            max_float_denominator: 10_000_000,
            max_cycle_len: 2_000,
            simplify_epsilon: Fraction::from_canonical(1, Integer::one(), Integer::new(1000)),
            decimal_places: 15,
        }
    }
}

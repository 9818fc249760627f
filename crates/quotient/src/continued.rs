//! Continued fractions and best rational approximation.

use num_traits::{One, Zero};
use quotient_integers::Integer;
use smallvec::SmallVec;

use crate::config::FractionConfig;
use crate::error::Result;
use crate::input::FractionInput;
use crate::Fraction;

/// Partial quotients of a continued fraction expansion.
pub type ContinuedFraction = SmallVec<[Integer; 8]>;

impl Fraction {
    /// Expands into `[a0; a1, ..., an]` with `a0 = floor(self)` and
    /// `a1..an > 0`. Finite for every rational; zero gives `[0]`.
    ///
    /// `415/93 → [4, 2, 6, 7]`, `-415/93 → [-5, 1, 1, 6, 7]`.
    #[must_use]
    pub fn to_continued(&self) -> ContinuedFraction {
        let mut terms = ContinuedFraction::new();
        let mut n = self.signed_numerator();
        let mut d = self.denominator().clone();
        loop {
            let a = n.div_floor(&d);
            let r = &n - &(&a * &d);
            terms.push(a);
            if r.is_zero() {
                return terms;
            }
            n = d;
            d = r;
        }
    }

    /// Successive convergents `h_k / k_k` of the expansion of `self`.
    fn convergents(&self) -> impl Iterator<Item = Fraction> {
        let terms = self.to_continued();
        let (mut h_prev, mut h) = (Integer::zero(), Integer::one());
        let (mut k_prev, mut k) = (Integer::one(), Integer::zero());
        terms.into_iter().map(move |a| {
            let h_next = &(&a * &h) + &h_prev;
            let k_next = &(&a * &k) + &k_prev;
            h_prev = std::mem::replace(&mut h, h_next);
            k_prev = std::mem::replace(&mut k, k_next);
            Fraction::normalized(1, h.clone(), k.clone())
        })
    }

    /// First convergent of `|self|` within `epsilon`, with the sign restored.
    fn within(&self, epsilon: &Fraction) -> Self {
        let magnitude = self.abs();
        let best = magnitude
            .convergents()
            .find(|c| c.sum(&magnitude, true).abs() <= *epsilon)
            .unwrap_or(magnitude);
        if self.is_negative() {
            best.negated()
        } else {
            best
        }
    }

    /// The first continued-fraction convergent within `epsilon` of `self`.
    ///
    /// The expansion is taken of `|self|` and the sign restored afterwards.
    /// The final convergent is `self`, so a result always exists.
    ///
    /// # Errors
    ///
    /// Fails only if `epsilon` cannot be parsed.
    pub fn simplify(&self, epsilon: impl Into<FractionInput>) -> Result<Self> {
        Ok(self.within(&Self::parse(epsilon)?.abs()))
    }

    /// [`Fraction::simplify`] with the configured default tolerance.
    #[must_use]
    pub fn simplify_with(&self, config: &FractionConfig) -> Self {
        self.within(&config.simplify_epsilon.abs())
    }
}

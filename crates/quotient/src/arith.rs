//! The arithmetic engine.
//!
//! Binary operations normalize their operand, compute over exact integers
//! and reduce the result. `pow` and `log` return `Ok(None)` when the answer
//! exists but is not rational.
//!
//! `add`, `sub` and `mul` are named methods that take any [`FractionInput`]
//! and return a `Result`; `neg` borrows its receiver. The `std::ops` impls
//! in `ops` cover `Fraction` operands only. With `std::ops::Add` in scope, `a.add(b)`
//! on an owned `a` resolves to the trait method.

use num_traits::{One, Zero};
use quotient_integers::{factorize, Integer};
use rustc_hash::FxHashMap;

use crate::error::{FractionError, Result};
use crate::input::FractionInput;
use crate::Fraction;

impl Fraction {
    /// `s1*n1*d2 ± s2*n2*d1` over `d1*d2`.
    pub(crate) fn sum(&self, other: &Self, subtract: bool) -> Self {
        let rhs = other.signed_numerator() * self.denominator();
        let lhs = self.signed_numerator() * other.denominator();
        let numerator = if subtract { lhs - rhs } else { lhs + rhs };
        Self::normalized(1, numerator, self.denominator() * other.denominator())
    }

    pub(crate) fn product(&self, other: &Self) -> Self {
        Self::normalized(
            self.sign() * other.sign(),
            self.numerator() * other.numerator(),
            self.denominator() * other.denominator(),
        )
    }

    pub(crate) fn negated(&self) -> Self {
        Self::from_canonical(
            -self.sign(),
            self.numerator().clone(),
            self.denominator().clone(),
        )
    }

    /// Adds two rational numbers.
    ///
    /// # Errors
    ///
    /// Fails only if `other` cannot be parsed.
    pub fn add(&self, other: impl Into<FractionInput>) -> Result<Self> {
        Ok(self.sum(&Self::parse(other)?, false))
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Fails only if `other` cannot be parsed.
    pub fn sub(&self, other: impl Into<FractionInput>) -> Result<Self> {
        Ok(self.sum(&Self::parse(other)?, true))
    }

    /// Multiplies two rational numbers.
    ///
    /// # Errors
    ///
    /// Fails only if `other` cannot be parsed.
    pub fn mul(&self, other: impl Into<FractionInput>) -> Result<Self> {
        Ok(self.product(&Self::parse(other)?))
    }

    /// Divides `self` by `other`.
    ///
    /// # Errors
    ///
    /// [`FractionError::DivisionByZero`] if `other` is zero.
    pub fn div(&self, other: impl Into<FractionInput>) -> Result<Self> {
        let other = Self::parse(other)?;
        Self::reduce(
            self.sign() * other.sign(),
            self.numerator() * other.denominator(),
            self.denominator() * other.numerator(),
        )
    }

    /// Truncated remainder, as `fmod` computes it.
    ///
    /// The result has the sign of `self` and magnitude below `|other|`:
    /// `9 mod -2 = 1`, `-9 mod -2 = -1`, `-187 mod 12 = -7`.
    ///
    /// # Errors
    ///
    /// [`FractionError::DivisionByZero`] if `other` is zero.
    pub fn modulo(&self, other: impl Into<FractionInput>) -> Result<Self> {
        let other = Self::parse(other)?;
        if other.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        // a/b = (c/d) q + r  =>  r = ((d a) mod (c b)) / (b d)
        let remainder =
            (other.denominator() * self.numerator()) % (other.numerator() * self.denominator());
        Self::reduce(
            self.sign(),
            remainder,
            self.denominator() * other.denominator(),
        )
    }

    /// Swaps numerator and denominator, keeping the sign.
    ///
    /// # Errors
    ///
    /// [`FractionError::DivisionByZero`] if `self` is zero.
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Self::from_canonical(
            self.sign(),
            self.denominator().clone(),
            self.numerator().clone(),
        ))
    }

    /// Alias of [`Fraction::inverse`].
    ///
    /// # Errors
    ///
    /// [`FractionError::DivisionByZero`] if `self` is zero.
    pub fn reciprocal(&self) -> Result<Self> {
        self.inverse()
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_canonical(
            self.sign().abs(),
            self.numerator().clone(),
            self.denominator().clone(),
        )
    }

    /// Negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.negated()
    }

    /// Rational gcd: `gcd(n1, n2) / lcm(d1, d2)`, never negative.
    ///
    /// # Errors
    ///
    /// Fails only if `other` cannot be parsed.
    pub fn gcd(&self, other: impl Into<FractionInput>) -> Result<Self> {
        let other = Self::parse(other)?;
        Self::reduce(
            1,
            self.numerator().gcd(other.numerator()),
            self.denominator().lcm(other.denominator()),
        )
    }

    /// Rational lcm: `lcm(n1, n2) / gcd(d1, d2)`; zero if either side is zero.
    ///
    /// # Errors
    ///
    /// Fails only if `other` cannot be parsed.
    pub fn lcm(&self, other: impl Into<FractionInput>) -> Result<Self> {
        let other = Self::parse(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }
        Self::reduce(
            1,
            self.numerator().lcm(other.numerator()),
            self.denominator().gcd(other.denominator()),
        )
    }

    /// Raises `self` to a rational power.
    ///
    /// Integer exponents always succeed. For `p/q` with `q > 1` the result
    /// is `Some` only if both the numerator and denominator of `self^p` are
    /// perfect `q`-th powers; otherwise `Ok(None)`. `(-8)^(1/3) = -2`, but
    /// an even root of a negative value has no rational result.
    ///
    /// # Errors
    ///
    /// [`FractionError::DivisionByZero`] for zero raised to a negative power,
    /// and [`FractionError::InvalidParameter`] if an exponent part does not
    /// fit in 32 bits.
    pub fn pow(&self, exponent: impl Into<FractionInput>) -> Result<Option<Self>> {
        let exponent = Self::parse(exponent)?;

        if exponent.is_zero() || self.is_one() {
            return Ok(Some(Self::one()));
        }
        if self.is_zero() {
            return if exponent.is_negative() {
                Err(FractionError::DivisionByZero)
            } else {
                Ok(Some(Self::zero()))
            };
        }

        // |self| = 1 only needs the parity of the exponent, which may be huge.
        if self.numerator().is_one() && self.denominator().is_one() {
            let two = Integer::new(2);
            let p_even = (exponent.numerator() % &two).is_zero();
            let q_even = (exponent.denominator() % &two).is_zero();
            return Ok(match (p_even, q_even) {
                (true, _) => Some(Self::one()),
                (false, true) => None,
                (false, false) => Some(self.clone()),
            });
        }

        let p = exponent
            .numerator()
            .to_u32()
            .ok_or_else(|| FractionError::invalid("exponent numerator too large"))?;
        let q = exponent
            .denominator()
            .to_u32()
            .ok_or_else(|| FractionError::invalid("exponent denominator too large"))?;

        let sign = if p % 2 == 0 { 1 } else { self.sign() };
        if sign < 0 && q % 2 == 0 {
            return Ok(None);
        }

        // gcd(p, q) = 1, so n^p is a perfect q-th power iff n is. Taking the
        // root before the power keeps intermediate values small.
        let (Some(num_root), Some(den_root)) = (
            self.numerator().exact_root(q),
            self.denominator().exact_root(q),
        ) else {
            return Ok(None);
        };

        let (numerator, denominator) = (num_root.pow(p), den_root.pow(p));
        let (numerator, denominator) = if exponent.is_negative() {
            (denominator, numerator)
        } else {
            (numerator, denominator)
        };
        Self::reduce(sign, numerator, denominator).map(Some)
    }

    /// Rational logarithm: the `e` with `base^e = self`, if it is rational.
    ///
    /// Only the base is factored. `self` is divided by the base's primes, and
    /// `e` exists iff nothing else remains and every prime's exponent in
    /// `self` is the same rational multiple of its exponent in `base`.
    /// Non-positive operands and base `1` give `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Fails only if `base` cannot be parsed.
    pub fn log(&self, base: impl Into<FractionInput>) -> Result<Option<Self>> {
        let base = Self::parse(base)?;
        if self.sign() <= 0 || base.sign() <= 0 {
            return Ok(None);
        }

        let base_exps = exponent_vector(&base);
        let mut numerator = self.numerator().clone();
        let mut denominator = self.denominator().clone();

        let mut ratio: Option<(i64, i64)> = None;
        for (prime, &b) in &base_exps {
            let v = strip_prime(&mut numerator, prime) - strip_prime(&mut denominator, prime);
            let candidate = reduced_ratio(v, b);
            match ratio {
                None => ratio = Some(candidate),
                Some(r) if r != candidate => return Ok(None),
                Some(_) => {}
            }
        }

        if !numerator.is_one() || !denominator.is_one() {
            return Ok(None);
        }
        Ok(ratio.map(|(n, d)| Self::normalized(1, Integer::new(n), Integer::new(d))))
    }
}

/// Prime exponents of the numerator minus those of the denominator.
fn exponent_vector(value: &Fraction) -> FxHashMap<Integer, i64> {
    let mut exps = FxHashMap::default();
    for (prime, e) in factorize(value.numerator()) {
        *exps.entry(prime).or_insert(0) += i64::from(e);
    }
    for (prime, e) in factorize(value.denominator()) {
        *exps.entry(prime).or_insert(0) -= i64::from(e);
    }
    exps
}

/// Divides every factor `prime` out of `n` and returns how many there were.
fn strip_prime(n: &mut Integer, prime: &Integer) -> i64 {
    let mut count = 0;
    while !n.is_zero() && (&*n % prime).is_zero() {
        *n = &*n / prime;
        count += 1;
    }
    count
}

/// `n/d` in lowest terms with `d > 0`; `d` must be non-zero.
fn reduced_ratio(n: i64, d: i64) -> (i64, i64) {
    let g = gcd_i64(n.unsigned_abs(), d.unsigned_abs()) as i64;
    let (n, d) = (n / g, d / g);
    if d < 0 {
        (-n, -d)
    } else {
        (n, d)
    }
}

fn gcd_i64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

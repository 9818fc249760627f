//! Input normalization.
//!
//! Turns any [`FractionInput`] into an unreduced sign/numerator/denominator
//! triple. Parsing is a pure function of its input; nothing is cached or
//! reused between calls.

use num_traits::{One, Zero};
use quotient_integers::Integer;
use tracing::trace;

use crate::config::FractionConfig;
use crate::error::{FractionError, Result};
use crate::input::{FractionInput, Parts, Scalar};
use crate::Fraction;

/// Unreduced parse result. `numerator` and `denominator` are magnitudes;
/// the denominator may still be zero here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Parsed {
    pub sign: i8,
    pub numerator: Integer,
    pub denominator: Integer,
}

impl Parsed {
    fn from_signed(numerator: Integer, denominator: Integer) -> Self {
        Self {
            sign: numerator.signum() * denominator.signum(),
            numerator: numerator.abs(),
            denominator: denominator.abs(),
        }
    }

    fn integer(value: Integer) -> Self {
        Self::from_signed(value, Integer::one())
    }
}

/// Normalizes one input variant.
pub(crate) fn normalize(input: FractionInput, config: &FractionConfig) -> Result<Parsed> {
    match input {
        FractionInput::Int(value) => Ok(Parsed::integer(value)),
        FractionInput::Float(value) => parse_float(value, config.max_float_denominator),
        FractionInput::Text(text) => parse_str(&text),
        FractionInput::Pair(numerator, denominator) => Ok(Parsed::from_signed(
            integral(numerator)?,
            integral(denominator)?,
        )),
        FractionInput::Parts(Parts {
            numerator,
            denominator,
            sign,
        }) => {
            let mut parsed = Parsed::from_signed(integral(numerator)?, integral(denominator)?);
            if let Some(s) = sign {
                parsed.sign *= s.signum();
            }
            Ok(parsed)
        }
        FractionInput::Value(value) => Ok(Parsed {
            sign: value.sign(),
            numerator: value.numerator().clone(),
            denominator: value.denominator().clone(),
        }),
    }
}

/// Resolves a pair component to an integer.
fn integral(scalar: Scalar) -> Result<Integer> {
    match scalar {
        Scalar::Int(value) => Ok(value),
        Scalar::Float(value) => {
            if !value.is_finite() {
                return Err(FractionError::invalid("non-finite number"));
            }
            if value.fract() != 0.0 {
                return Err(FractionError::NonIntegerParameter);
            }
            float_to_integer(value)
        }
        Scalar::Text(text) => {
            let parsed = parse_str(&text)?;
            if parsed.denominator.is_zero() {
                return Err(FractionError::DivisionByZero);
            }
            if !(&parsed.numerator % &parsed.denominator).is_zero() {
                return Err(FractionError::NonIntegerParameter);
            }
            let magnitude = parsed.numerator / parsed.denominator;
            Ok(if parsed.sign < 0 { -magnitude } else { magnitude })
        }
    }
}

/// Exact conversion of an integral, finite float.
fn float_to_integer(value: f64) -> Result<Integer> {
    format!("{value:.0}")
        .parse()
        .map_err(|_| FractionError::invalid("unrepresentable number"))
}

/// Converts a float by walking the Stern-Brocot tree over `[0, 1]`.
///
/// The integer part is split off exactly and only the fractional part is
/// walked, so the bound applies to the denominator of the result. The walk
/// stops at the first mediant that reproduces the input as an `f64`, or
/// once a denominator would pass `max_denominator`.
fn parse_float(value: f64, max_denominator: u64) -> Result<Parsed> {
    if !value.is_finite() {
        return Err(FractionError::invalid("non-finite number"));
    }
    if value.fract() == 0.0 {
        return Ok(Parsed::integer(float_to_integer(value)?));
    }

    let sign: i8 = if value < 0.0 { -1 } else { 1 };
    let x = value.abs();
    let whole = x.trunc();
    let frac = x - whole;

    let bound = max_denominator.max(1);
    let (mut a, mut b, mut c, mut d) = (0u64, 1u64, 1u64, 1u64);
    let (mut n, mut den) = (0u64, 1u64);

    while b <= bound && d <= bound {
        let mediant = (a + c) as f64 / (b + d) as f64;
        if whole + mediant == x {
            (n, den) = if b + d <= bound {
                (a + c, b + d)
            } else if d > b {
                (c, d)
            } else {
                (a, b)
            };
            break;
        }

        if frac > mediant {
            a += c;
            b += d;
        } else {
            c += a;
            d += b;
        }

        (n, den) = if b > bound { (c, d) } else { (a, b) };
    }

    if whole + n as f64 / den as f64 != x {
        trace!(value, n, den, "float approximated at denominator bound");
    }

    let denominator = Integer::from(den);
    let numerator = float_to_integer(whole)? * &denominator + Integer::from(n);
    Ok(Parsed {
        sign: if numerator.is_zero() { 0 } else { sign },
        numerator,
        denominator,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token<'a> {
    Digits(&'a str),
    Symbol(char),
}

/// Splits into maximal ASCII digit runs and single other characters.
fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if c.is_ascii_digit() {
            let end = rest
                .find(|ch: char| !ch.is_ascii_digit())
                .unwrap_or(rest.len());
            tokens.push(Token::Digits(&rest[..end]));
            rest = &rest[end..];
        } else {
            tokens.push(Token::Symbol(c));
            rest = &rest[c.len_utf8()..];
        }
    }
    tokens
}

/// Cursor over the token stream of one string.
struct Cursor<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<Token<'a>> {
        self.tokens.get(self.pos + offset).copied()
    }

    fn eat(&mut self, symbol: char) -> bool {
        if self.peek() == Some(Token::Symbol(symbol)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn digits(&mut self) -> Option<&'a str> {
        match self.peek() {
            Some(Token::Digits(d)) => {
                self.pos += 1;
                Some(d)
            }
            _ => None,
        }
    }

    fn expect_digits(&mut self) -> Result<&'a str> {
        self.digits()
            .ok_or_else(|| FractionError::invalid("expected digits"))
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

fn to_integer(digits: &str) -> Result<Integer> {
    digits
        .parse()
        .map_err(|_| FractionError::invalid(format!("bad digits {digits:?}")))
}

fn digit_count(digits: &str) -> Result<u32> {
    u32::try_from(digits.len()).map_err(|_| FractionError::invalid("too many digits"))
}

/// Parses the string forms:
///
/// - `123`, `-123`, `+123`
/// - `1.25`, `.25`, `1.`, with an optional repeating group `1.2(34)` or `1.2'34'`
/// - `3/4`, `3:4`
/// - `1 3/4` (mixed number)
///
/// `_` and `,` digit separators and surrounding whitespace are ignored.
pub(crate) fn parse_str(text: &str) -> Result<Parsed> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|&c| c != '_' && c != ',')
        .collect();
    if cleaned.is_empty() {
        return Err(FractionError::invalid("empty string"));
    }

    let mut cursor = Cursor {
        tokens: tokenize(&cleaned),
        pos: 0,
    };

    let sign: i8 = if cursor.eat('-') {
        -1
    } else {
        cursor.eat('+');
        1
    };

    let parsed = match (cursor.peek(), cursor.peek_at(1), cursor.peek_at(3)) {
        (Some(Token::Digits(_)), Some(Token::Symbol('/' | ':')), _) => {
            let numerator = to_integer(cursor.expect_digits()?)?;
            cursor.pos += 1;
            let denominator = to_integer(cursor.expect_digits()?)?;
            (numerator, denominator)
        }
        (Some(Token::Digits(_)), Some(Token::Symbol(' ')), Some(Token::Symbol('/'))) => {
            let whole = to_integer(cursor.expect_digits()?)?;
            cursor.pos += 1;
            let numerator = to_integer(cursor.expect_digits()?)?;
            cursor.pos += 1;
            let denominator = to_integer(cursor.expect_digits()?)?;
            (&whole * &denominator + numerator, denominator)
        }
        _ => parse_decimal(&mut cursor)?,
    };

    if !cursor.at_end() {
        return Err(FractionError::invalid(format!("unexpected trailing input in {text:?}")));
    }

    let (numerator, denominator) = parsed;
    Ok(Parsed {
        sign: if numerator.is_zero() { 0 } else { sign },
        numerator,
        denominator,
    })
}

/// `I.F(R)`: `(R + (10^q - 1)(I*10^p + F)) / (10^p (10^q - 1))`.
fn parse_decimal(cursor: &mut Cursor<'_>) -> Result<(Integer, Integer)> {
    let int_part = cursor.digits();
    if !cursor.eat('.') {
        let digits = int_part.ok_or_else(|| FractionError::invalid("expected a number"))?;
        return Ok((to_integer(digits)?, Integer::one()));
    }

    let frac_part = cursor.digits();
    let repeat = if cursor.eat('(') {
        let r = cursor.expect_digits()?;
        if !cursor.eat(')') {
            return Err(FractionError::invalid("unclosed repeating group"));
        }
        Some(r)
    } else if cursor.eat('\'') {
        let r = cursor.expect_digits()?;
        if !cursor.eat('\'') {
            return Err(FractionError::invalid("unclosed repeating group"));
        }
        Some(r)
    } else {
        None
    };

    if int_part.is_none() && frac_part.is_none() && repeat.is_none() {
        return Err(FractionError::invalid("a lone decimal point is not a number"));
    }

    let whole = int_part.map_or_else(|| Ok(Integer::zero()), to_integer)?;
    let (frac, p) = match frac_part {
        Some(f) => (to_integer(f)?, digit_count(f)?),
        None => (Integer::zero(), 0),
    };
    let shift = Integer::ten_pow(p);
    let fixed = &whole * &shift + frac;

    match repeat {
        None => Ok((fixed, shift)),
        Some(r) => {
            let nines = Integer::ten_pow(digit_count(r)?) - Integer::one();
            let numerator = to_integer(r)? + &nines * &fixed;
            Ok((numerator, shift * nines))
        }
    }
}

impl Fraction {
    /// Parses any accepted input into a canonical fraction.
    ///
    /// # Errors
    ///
    /// [`FractionError::InvalidParameter`] for malformed input,
    /// [`FractionError::DivisionByZero`] for a zero denominator and
    /// [`FractionError::NonIntegerParameter`] for a non-integral pair component.
    pub fn parse(input: impl Into<FractionInput>) -> Result<Self> {
        Self::parse_with(input, &FractionConfig::default())
    }

    /// Like [`Fraction::parse`] with explicit limits.
    ///
    /// # Errors
    ///
    /// See [`Fraction::parse`].
    pub fn parse_with(input: impl Into<FractionInput>, config: &FractionConfig) -> Result<Self> {
        match input.into() {
            FractionInput::Value(value) => Ok(value),
            other => {
                let Parsed {
                    sign,
                    numerator,
                    denominator,
                } = normalize(other, config)?;
                Self::reduce(sign, numerator, denominator)
            }
        }
    }

    /// Two-argument numerator/denominator form.
    ///
    /// # Errors
    ///
    /// See [`Fraction::parse`].
    pub fn new(numerator: impl Into<Scalar>, denominator: impl Into<Scalar>) -> Result<Self> {
        Self::parse(FractionInput::Pair(numerator.into(), denominator.into()))
    }
}

//! Prime factorization by trial division.
//!
//! Used for exact rational logarithms and roots, where the inputs are
//! numerators and denominators of user supplied fractions. Cost grows with
//! the square root of the second largest prime factor.

use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::Integer;

/// Prime-exponent pairs in increasing prime order.
pub type Factorization = SmallVec<[(Integer, u32); 8]>;

/// Factors `|n|` into primes.
///
/// Zero and one have the empty factorization.
#[must_use]
pub fn factorize(n: &Integer) -> Factorization {
    let mut factors = Factorization::new();
    let mut rest = n.abs();
    if rest.is_zero() {
        return factors;
    }

    let two = Integer::new(2);
    divide_out(&mut rest, &two, &mut factors);

    let mut p = Integer::new(3);
    while &p * &p <= rest {
        divide_out(&mut rest, &p, &mut factors);
        p = p + &two;
    }

    if !rest.is_one() {
        factors.push((rest, 1));
    }
    factors
}

fn divide_out(rest: &mut Integer, p: &Integer, factors: &mut Factorization) {
    let mut exp = 0u32;
    while (&*rest % p).is_zero() {
        *rest = &*rest / p;
        exp += 1;
    }
    if exp > 0 {
        factors.push((p.clone(), exp));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(n: i64) -> Vec<(i64, u32)> {
        factorize(&Integer::new(n))
            .into_iter()
            .map(|(p, e)| (p.to_i64().unwrap(), e))
            .collect()
    }

    #[test]
    fn test_small() {
        assert_eq!(pairs(1), vec![]);
        assert_eq!(pairs(0), vec![]);
        assert_eq!(pairs(8), vec![(2, 3)]);
        assert_eq!(pairs(360), vec![(2, 3), (3, 2), (5, 1)]);
        assert_eq!(pairs(-27), vec![(3, 3)]);
    }

    #[test]
    fn test_large_prime_tail() {
        // 2 * 1_000_003, the cofactor is prime
        assert_eq!(pairs(2_000_006), vec![(2, 1), (1_000_003, 1)]);
    }
}

//! Property-based tests for the integer core.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{factorize, mod_pow, multiplicative_order, Integer};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn gcd_times_lcm_is_product(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b) * a.lcm(&b), (&a * &b).abs());
        }

        #[test]
        fn floor_division_bounds(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let q = a.div_floor(&b);
            // q <= a/b < q + 1, checked without division
            let lo = &q * &b;
            let hi = (&q + &Integer::one()) * &b;
            if b.is_negative() {
                prop_assert!(lo >= a && a > hi);
            } else {
                prop_assert!(lo <= a && a < hi);
            }
        }

        #[test]
        fn truncated_remainder_follows_dividend(a in small_int(), b in non_zero_int()) {
            let r = Integer::new(a) % Integer::new(b);
            prop_assert!(r.abs() < Integer::new(b).abs());
            prop_assert!(r.is_zero() || r.signum() == Integer::new(a).signum());
        }

        #[test]
        fn root_of_power(base in 0i64..5000, n in 1u32..6) {
            let b = Integer::new(base);
            prop_assert_eq!(b.pow(n).exact_root(n), Some(b));
        }

        #[test]
        fn floor_root_brackets(value in 0i64..1_000_000, n in 1u32..5) {
            let v = Integer::new(value);
            let r = v.floor_root(n);
            prop_assert!(r.pow(n) <= v);
            prop_assert!((r + Integer::one()).pow(n) > v);
        }

        #[test]
        fn factorization_multiplies_back(n in 1i64..100_000) {
            let product = factorize(&Integer::new(n))
                .iter()
                .fold(Integer::one(), |acc, (p, e)| acc * p.pow(*e));
            prop_assert_eq!(product, Integer::new(n));
        }

        #[test]
        fn order_is_a_period(m in 2i64..2000) {
            let m = Integer::new(m);
            let ten = Integer::new(10);
            if let Some(t) = multiplicative_order(&ten, &m, 5000) {
                prop_assert!(mod_pow(&ten, t, &m).is_one());
            } else {
                prop_assert!(!ten.gcd(&m).is_one());
            }
        }
    }
}

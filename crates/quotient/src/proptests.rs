//! Property-based tests for fractions.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Fraction, FractionError, Integer};

    // Denominators stay small enough that every period is found.
    fn fraction() -> impl Strategy<Value = Fraction> {
        (-100_000i64..100_000i64, 1i64..500i64)
            .prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    fn non_zero_fraction() -> impl Strategy<Value = Fraction> {
        fraction().prop_filter("non-zero", |x| !x.is_zero())
    }

    // Evaluates [a0; a1, ..., an] from the innermost term outwards.
    fn evaluate(terms: &[Integer]) -> Fraction {
        let mut acc = Fraction::from_integer(terms[terms.len() - 1].clone());
        for a in terms[..terms.len() - 1].iter().rev() {
            acc = Fraction::from_integer(a.clone())
                .add(acc.inverse().unwrap())
                .unwrap();
        }
        acc
    }

    proptest! {
        #[test]
        fn pairs_reduce_to_canonical_form(n in -100_000i64..100_000i64, d in prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]) {
            let x = Fraction::new(n, d).unwrap();
            prop_assert!(x.denominator() >= &Integer::one());
            prop_assert!(!x.numerator().is_negative());
            prop_assert!(x.numerator().gcd(x.denominator()).is_one());
            prop_assert_eq!(i64::from(x.sign()), n.signum() * d.signum());
        }

        #[test]
        fn add_then_sub_is_identity(a in fraction(), b in fraction()) {
            prop_assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
        }

        #[test]
        fn mul_by_inverse_is_one(a in non_zero_fraction()) {
            prop_assert!(a.mul(a.inverse().unwrap()).unwrap().is_one());
        }

        #[test]
        fn mul_distributes_over_add(a in fraction(), b in fraction(), c in fraction()) {
            let lhs = a.mul(b.add(&c).unwrap()).unwrap();
            let rhs = a.mul(&b).unwrap().add(a.mul(&c).unwrap()).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn division_by_zero_always_errors(a in fraction()) {
            prop_assert_eq!(a.div(0), Err(FractionError::DivisionByZero));
            prop_assert_eq!(a.modulo("0/7"), Err(FractionError::DivisionByZero));
        }

        #[test]
        fn decimal_rendering_parses_back(a in fraction()) {
            prop_assert_eq!(Fraction::parse(a.to_decimal_string()).unwrap(), a);
        }

        #[test]
        fn fraction_strings_parse_back(a in fraction(), mixed in any::<bool>()) {
            prop_assert_eq!(Fraction::parse(a.to_fraction(mixed)).unwrap(), a);
        }

        #[test]
        fn truncated_modulo_bounds(a in fraction(), b in non_zero_fraction()) {
            let r = a.modulo(&b).unwrap();
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r.is_zero() || r.sign() == a.sign());
            // (a - r) / b is an integer
            prop_assert!(a.sub(&r).unwrap().div(&b).unwrap().is_integer());
        }

        #[test]
        fn rounding_stays_within_half(a in fraction()) {
            let rounded = a.round(0).unwrap();
            prop_assert!(rounded.is_integer());
            prop_assert!(a.sub(&rounded).unwrap().abs() <= Fraction::new(1, 2).unwrap());
            prop_assert!(a.floor(0).unwrap() <= a && a <= a.ceil(0).unwrap());
        }

        #[test]
        fn continued_fraction_evaluates_back(a in fraction()) {
            let terms = a.to_continued();
            prop_assert!(terms[1..].iter().all(|t| t.signum() > 0));
            prop_assert_eq!(evaluate(&terms), a);
        }

        #[test]
        fn simplify_stays_within_tolerance(a in fraction(), k in 1i64..10_000i64) {
            let eps = Fraction::new(1, k).unwrap();
            let s = a.simplify(&eps).unwrap();
            prop_assert!(s.sub(&a).unwrap().abs() <= eps);
            prop_assert!(s.denominator() <= a.denominator());
        }

        #[test]
        fn serde_round_trip(a in fraction()) {
            let json = serde_json::to_string(&a).unwrap();
            let back: Fraction = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, a);
        }
    }
}

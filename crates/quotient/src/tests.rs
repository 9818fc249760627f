//! Integration tests for quotient.

#[cfg(test)]
mod integration_tests {
    use num_traits::Zero;
    use std::io;
    use std::sync::{Arc, Mutex};

    use crate::{Fraction, FractionConfig, FractionError, Integer, Parts};

    fn f(s: &str) -> Fraction {
        Fraction::parse(s).unwrap()
    }

    fn ints(terms: &[Integer]) -> Vec<i64> {
        terms.iter().map(|t| t.to_i64().unwrap()).collect()
    }

    #[test]
    fn test_reference_scenarios() {
        assert_eq!(f("22/7").to_string(), "3.(142857)");
        assert_eq!(f("52").gcd(39).unwrap(), f("13"));
        assert_eq!(f("200").lcm(333).unwrap(), f("66600"));
        assert_eq!(f("27").pow("2/3").unwrap(), Some(f("9")));
        assert_eq!(f("2").pow(0.5).unwrap(), None);
        assert_eq!(f("8").log(2).unwrap(), Some(f("3")));
        assert_eq!(f("3").log(2).unwrap(), None);
        assert_eq!(f("27/8").log("9/4").unwrap(), Some(f("3/2")));
        assert_eq!(ints(&f("415/93").to_continued()), vec![4, 2, 6, 7]);
        assert_eq!(f("9").modulo(-2).unwrap(), f("1"));
        assert_eq!(f("-9").modulo(-2).unwrap(), f("-1"));
        assert_eq!(f("-187").modulo(12).unwrap(), f("-7"));
        assert_eq!(f("10.5").round(0).unwrap(), f("11"));
        assert_eq!(f("-10.5").round(0).unwrap(), f("-10"));
        assert_eq!(f("-0.5").round(0).unwrap(), f("0"));
    }

    #[test]
    fn test_mixed_input_arithmetic() {
        let cases: &[(&str, &str, fn(&Fraction, &str) -> Fraction, &str)] = &[
            ("99.(999999)", "66", |a, b| a.add(b).unwrap(), "166"),
            ("100", ".91", |a, b| a.sub(b).unwrap(), "99.09"),
            ("-82.124", "66.(3)", |a, b| a.div(b).unwrap(),
                "-1.238(050251256281407035175879396984924623115577889447236180904522613065326633165829145728643216080402010)"),
            ("381.(33411)", "11.119(356)", |a, b| a.modulo(b).unwrap(), "3.275(997225017295217)"),
            ("-99.12", "0.09(34)", |a, b| a.modulo(b).unwrap(), "-0.07(95)"),
            ("1/3", "1/6", |a, b| a.add(b).unwrap(), "0.5"),
            ("0.(3)", "3", |a, b| a.mul(b).unwrap(), "1"),
        ];
        for (lhs, rhs, op, expected) in cases {
            assert_eq!(op(&f(lhs), rhs).to_string(), *expected, "{lhs} op {rhs}");
        }
    }

    #[test]
    fn test_constructor_forms_agree() {
        let expected = f("-3/4");
        assert_eq!(Fraction::new(-3, 4).unwrap(), expected);
        assert_eq!(Fraction::new(3, -4).unwrap(), expected);
        assert_eq!(Fraction::parse([6, -8]).unwrap(), expected);
        assert_eq!(Fraction::parse((-6, 8)).unwrap(), expected);
        assert_eq!(Fraction::parse(-0.75).unwrap(), expected);
        assert_eq!(Fraction::parse(Parts::new(3, 4).with_sign(-1)).unwrap(), expected);
        assert_eq!(Fraction::parse(Parts::new(-3, -4).with_sign(-1)).unwrap(), expected);
        assert_eq!(Fraction::parse("-0.75").unwrap(), expected);
        assert_eq!(Fraction::parse("-6:8").unwrap(), expected);
        assert_eq!(Fraction::parse(&expected).unwrap(), expected);
        assert_eq!(Fraction::try_from(-0.75).unwrap(), expected);
        assert_eq!("-3/4".parse::<Fraction>().unwrap(), expected);
    }

    #[test]
    fn test_float_inputs_keep_integer_part() {
        assert_eq!(Fraction::parse(1_234_567.25).unwrap(), f("4938269/4"));
        assert_eq!(Fraction::parse(12_345.678).unwrap().to_string(), "12345.678");
        assert_eq!(Fraction::parse(-19.6).unwrap(), f("-98/5"));
        assert_eq!(
            Fraction::parse(1_000_000_000_000_000.5).unwrap(),
            f("1000000000000000.5")
        );
        assert_eq!(Fraction::parse("123,456.5").unwrap(), f("246913/2"));
    }

    #[test]
    fn test_record_reciprocal() {
        let x = Fraction::parse(Parts::new(3, 222).with_sign(-1)).unwrap();
        assert_eq!(x.reciprocal().unwrap().to_string(), "-74");
    }

    #[test]
    fn test_errors() {
        assert_eq!(Fraction::new(1, 0), Err(FractionError::DivisionByZero));
        assert_eq!(Fraction::parse("7/0"), Err(FractionError::DivisionByZero));
        assert_eq!(Fraction::new(1.5, 2), Err(FractionError::NonIntegerParameter));
        assert!(matches!(
            Fraction::parse("1/2/3"),
            Err(FractionError::InvalidParameter(_))
        ));
        assert!(matches!(
            Fraction::parse(f64::NAN),
            Err(FractionError::InvalidParameter(_))
        ));
        assert_eq!(
            FractionError::DivisionByZero.to_string(),
            "division by zero"
        );
        assert_eq!(
            FractionError::NonIntegerParameter.to_string(),
            "parameters must be integer"
        );
    }

    #[test]
    fn test_large_operands_stay_exact() {
        let big = Fraction::new(Integer::ten_pow(40) + Integer::new(1), Integer::ten_pow(39)).unwrap();
        let squared = big.mul(&big).unwrap();
        assert_eq!(squared.denominator(), &Integer::ten_pow(78));
        assert_eq!(
            squared.sub(&squared).unwrap(),
            Fraction::zero()
        );
        assert_eq!(big.floor(0).unwrap(), f("10"));
    }

    #[test]
    fn test_formatting() {
        let x = f("-1 3/4");
        assert_eq!(x.to_fraction(false), "-7/4");
        assert_eq!(x.to_fraction(true), "-1 3/4");
        assert_eq!(x.to_latex(false), "-\\frac{7}{4}");
        assert_eq!(x.to_decimal(1), "-1.7");
        assert_eq!(x.to_f64(), -1.75);
        assert_eq!(format!("{x}"), "-1.75");
        assert_eq!(format!("{x:?}"), "Fraction(-7/4)");
    }

    #[test]
    fn test_config_limits() {
        let config = FractionConfig {
            max_float_denominator: 10,
            ..FractionConfig::default()
        };
        let pi = Fraction::parse_with(std::f64::consts::PI - 3.0, &config).unwrap();
        assert_eq!(pi, f("1/7"));

        let coarse = FractionConfig {
            simplify_epsilon: f("1/100"),
            ..FractionConfig::default()
        };
        assert_eq!(f("3.14159265").simplify_with(&coarse), f("22/7"));
    }

    #[test]
    fn test_serialization_shape() {
        let x = f("44.3(12)");
        assert_eq!(
            serde_json::to_string(&x).unwrap(),
            r#"{"sign":1,"numerator":"14623","denominator":"330"}"#
        );

        let flipped = f("-1/2").reciprocal().unwrap();
        assert_eq!(
            serde_json::to_string(&flipped).unwrap(),
            r#"{"sign":-1,"numerator":"2","denominator":"1"}"#
        );

        assert_eq!(
            serde_json::to_string(&Fraction::zero()).unwrap(),
            r#"{"sign":0,"numerator":"0","denominator":"1"}"#
        );
    }

    #[test]
    fn test_deserialization_normalizes() {
        let x: Fraction =
            serde_json::from_str(r#"{"sign":-1,"numerator":"6","denominator":"8"}"#).unwrap();
        assert_eq!(x, f("-3/4"));

        let zero_den =
            serde_json::from_str::<Fraction>(r#"{"sign":1,"numerator":"1","denominator":"0"}"#);
        assert!(zero_den.is_err());

        let non_integer =
            serde_json::from_str::<Fraction>(r#"{"sign":1,"numerator":"1.5","denominator":"2"}"#);
        assert!(non_integer.is_err());
    }

    /// Collects formatted log lines.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_truncation_is_traced() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let config = FractionConfig {
            max_cycle_len: 5,
            decimal_places: 8,
            ..FractionConfig::default()
        };
        let (truncated, repeating) = tracing::subscriber::with_default(subscriber, || {
            (
                f("1/7").to_decimal_string_with(&config),
                f("1/3").to_decimal_string_with(&config),
            )
        });
        assert_eq!(truncated, "0.14285714");
        assert_eq!(repeating, "0.(3)");

        let log = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(log.matches("period not found, truncating").count(), 1);
        assert!(log.contains("max_cycle_len=5"));
    }

    #[test]
    fn test_shared_between_threads() {
        let x = f("1/7");
        let handles: Vec<_> = (1..=4)
            .map(|k| {
                let x = x.clone();
                std::thread::spawn(move || x.mul(k).unwrap().to_string())
            })
            .collect();
        let out: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(out, ["0.(142857)", "0.(285714)", "0.(428571)", "0.(571428)"]);
    }
}

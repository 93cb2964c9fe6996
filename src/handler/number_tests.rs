//! Tests for the integer, unit and float handlers.

use crate::store::{MemoryOptionStore, OptionStore};

use super::{
    Bounds, FloatNumberHandler, NumberHandler, OptionHandler, UnitNumberHandler, ValidationError,
    parse_unit_number,
};

fn parse(handler: impl Into<OptionHandler>, value: &str) -> Result<String, ValidationError> {
    let handler = handler.into();
    let mut store = MemoryOptionStore::new();
    handler.parse_arg(&mut store, value)?;
    Ok(store.get("foo").to_string())
}

mod bounds {
    use super::*;

    #[test]
    fn unbounded_accepts_extremes() {
        let bounds = Bounds::<i64>::unbounded();
        assert!(bounds.check(&i64::MIN).is_ok());
        assert!(bounds.check(&i64::MAX).is_ok());
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = Bounds::between(1, 100);
        assert!(bounds.check(&1).is_ok());
        assert!(bounds.check(&100).is_ok());
        assert!(matches!(
            bounds.check(&0),
            Err(ValidationError::BelowMinimum { .. })
        ));
        assert!(matches!(
            bounds.check(&101),
            Err(ValidationError::AboveMaximum { .. })
        ));
    }

    #[test]
    fn extreme_values_are_legitimate_bounds() {
        let bounds = Bounds::at_most(-1_i64);
        assert!(bounds.check(&-1).is_ok());
        assert!(bounds.check(&0).is_err());
    }

    #[test]
    fn nan_bound_is_incomparable() {
        assert!(Bounds::at_least(f64::NAN).incomparable().is_some());
        assert!(Bounds::new(Some(0.0), Some(f64::NAN)).incomparable().is_some());
        assert!(Bounds::between(0.0, f64::INFINITY).incomparable().is_none());
        assert!(Bounds::<f64>::unbounded().incomparable().is_none());
    }

    #[test]
    fn is_ordered_detects_inverted_bounds() {
        assert!(Bounds::between(1, 1).is_ordered());
        assert!(!Bounds::between(2, 1).is_ordered());
        assert!(Bounds::at_least(5).is_ordered());
    }
}

mod number_handler {
    use super::*;

    #[test]
    fn can_handle_is_exact_match() {
        let handler = OptionHandler::from(NumberHandler::new("foo"));
        assert!(handler.can_handle("foo"));
        assert!(!handler.can_handle("foobar"));
    }

    #[test]
    fn parses_zero() {
        assert_eq!(parse(NumberHandler::new("foo"), "0").unwrap(), "0");
    }

    #[test]
    fn stores_canonical_decimal() {
        assert_eq!(parse(NumberHandler::new("foo"), "007").unwrap(), "7");
        assert_eq!(parse(NumberHandler::new("foo"), "+5").unwrap(), "5");
        assert_eq!(parse(NumberHandler::new("foo"), "-12").unwrap(), "-12");
    }

    #[test]
    fn rejects_non_integers() {
        for value in ["", "abc", "1.5", " 1", "1 ", "0x10"] {
            assert!(
                matches!(
                    parse(NumberHandler::new("foo"), value),
                    Err(ValidationError::NotInteger { .. })
                ),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn out_of_range_integers_report_overflow() {
        for value in ["9223372036854775808", "-9223372036854775809"] {
            assert!(
                matches!(
                    parse(NumberHandler::new("foo"), value),
                    Err(ValidationError::Overflow { .. })
                ),
                "{value:?} should overflow"
            );
        }
        assert_eq!(
            parse(NumberHandler::new("foo"), "-9223372036854775808").unwrap(),
            "-9223372036854775808"
        );
    }

    #[test]
    fn min_only() {
        let handler = NumberHandler::with_bounds("foo", Bounds::at_least(1));
        assert_eq!(parse(handler.clone(), "1").unwrap(), "1");
        assert!(parse(handler, "0").is_err());
    }

    #[test]
    fn max_only() {
        let handler = NumberHandler::with_bounds("foo", Bounds::at_most(100));
        assert_eq!(parse(handler.clone(), "100").unwrap(), "100");
        assert_eq!(parse(handler.clone(), "-5000").unwrap(), "-5000");
        assert!(parse(handler, "101").is_err());
    }

    #[test]
    fn min_and_max() {
        let handler = NumberHandler::with_bounds("foo", Bounds::between(1, 100));
        assert_eq!(parse(handler.clone(), "1").unwrap(), "1");
        assert_eq!(parse(handler.clone(), "100").unwrap(), "100");
        assert!(parse(handler.clone(), "0").is_err());
        assert!(parse(handler, "101").is_err());
    }

    #[test]
    fn rejected_value_leaves_store_unchanged() {
        let handler = NumberHandler::with_bounds("foo", Bounds::between(1, 100));
        let mut store = MemoryOptionStore::new();
        handler.parse_arg(&mut store, "50").unwrap();

        assert!(handler.parse_arg(&mut store, "101").is_err());
        assert_eq!(store.get("foo"), "50");
    }
}

mod unit_number_handler {
    use super::*;

    #[test]
    fn can_handle_is_exact_match() {
        let handler = OptionHandler::from(UnitNumberHandler::new("foo"));
        assert!(handler.can_handle("foo"));
        assert!(!handler.can_handle("foobar"));
    }

    #[test]
    fn plain_number_is_a_byte_count() {
        assert_eq!(
            parse(UnitNumberHandler::new("foo"), "4294967296").unwrap(),
            "4294967296"
        );
    }

    #[test]
    fn mebibyte_suffix() {
        assert_eq!(
            parse(UnitNumberHandler::new("foo"), "4096M").unwrap(),
            "4294967296"
        );
    }

    #[test]
    fn kibibyte_suffix() {
        assert_eq!(
            parse(UnitNumberHandler::new("foo"), "4096K").unwrap(),
            "4194304"
        );
    }

    #[test]
    fn empty_and_bare_suffix_are_zero() {
        for value in ["", "K", "M"] {
            assert_eq!(
                parse(UnitNumberHandler::new("foo"), value).unwrap(),
                "0",
                "{value:?} should parse as zero"
            );
        }
    }

    #[test]
    fn unknown_suffix_is_rejected() {
        assert!(matches!(
            parse(UnitNumberHandler::new("foo"), "10G"),
            Err(ValidationError::UnknownUnit { suffix: 'G', .. })
        ));
        assert!(matches!(
            parse(UnitNumberHandler::new("foo"), "10k"),
            Err(ValidationError::UnknownUnit { suffix: 'k', .. })
        ));
    }

    #[test]
    fn non_numeric_body_is_rejected() {
        assert!(matches!(
            parse(UnitNumberHandler::new("foo"), "abcK"),
            Err(ValidationError::NotInteger { .. })
        ));
        assert!(matches!(
            parse(UnitNumberHandler::new("foo"), "-5"),
            Err(ValidationError::NotInteger { .. })
        ));
    }

    #[test]
    fn overflow_is_rejected() {
        let value = format!("{}M", u64::MAX);
        assert!(matches!(
            parse_unit_number(&value),
            Err(ValidationError::Overflow { .. })
        ));
    }

    #[test]
    fn digits_beyond_u64_report_overflow() {
        for value in ["18446744073709551616", "18446744073709551616K"] {
            assert!(
                matches!(
                    parse_unit_number(value),
                    Err(ValidationError::Overflow { .. })
                ),
                "{value:?} should overflow"
            );
        }
    }

    #[test]
    fn bounds_apply_to_expanded_value() {
        let handler = UnitNumberHandler::with_bounds("foo", Bounds::at_least(1024 * 1024));
        assert_eq!(parse(handler.clone(), "1M").unwrap(), "1048576");
        assert!(matches!(
            parse(handler, "1023K"),
            Err(ValidationError::BelowMinimum { .. })
        ));
    }
}

mod float_number_handler {
    use super::*;

    #[test]
    fn can_handle_is_exact_match() {
        let handler = OptionHandler::from(FloatNumberHandler::new("foo"));
        assert!(handler.can_handle("foo"));
        assert!(!handler.can_handle("foobar"));
    }

    #[test]
    fn stores_original_text() {
        assert_eq!(parse(FloatNumberHandler::new("foo"), "1.0").unwrap(), "1.0");
        assert_eq!(parse(FloatNumberHandler::new("foo"), "2.50").unwrap(), "2.50");
    }

    #[test]
    fn rejects_non_numbers() {
        for value in ["", "abc", "1.0.0", "NaN", "inf"] {
            assert!(
                matches!(
                    parse(FloatNumberHandler::new("foo"), value),
                    Err(ValidationError::NotFloat { .. })
                ),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn min_only() {
        let handler = FloatNumberHandler::with_bounds("foo", Bounds::at_least(0.0));
        assert_eq!(parse(handler.clone(), "0.0").unwrap(), "0.0");
        assert!(parse(handler, "-0.1").is_err());
    }

    #[test]
    fn max_only() {
        let handler = FloatNumberHandler::with_bounds("foo", Bounds::at_most(10.0));
        assert_eq!(parse(handler.clone(), "10.0").unwrap(), "10.0");
        assert!(parse(handler, "10.1").is_err());
    }

    #[test]
    fn min_and_max() {
        let handler = FloatNumberHandler::with_bounds("foo", Bounds::between(0.0, 10.0));
        assert_eq!(parse(handler.clone(), "0.0").unwrap(), "0.0");
        assert_eq!(parse(handler.clone(), "10.0").unwrap(), "10.0");
        assert!(matches!(
            parse(handler.clone(), "-0.1"),
            Err(ValidationError::BelowMinimum { .. })
        ));
        assert!(matches!(
            parse(handler, "10.1"),
            Err(ValidationError::AboveMaximum { .. })
        ));
    }
}

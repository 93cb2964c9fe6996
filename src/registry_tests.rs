//! Tests for the handler registry and dispatch loop.

use crate::handler::{
    BooleanHandler, Bounds, DefaultHandler, NullHandler, NumberHandler, OptionHandler,
    ValidationError,
};
use crate::prefs::{PREF_HTTP_PROXY_HOST, PREF_LOG, PREF_STDOUT_LOG, V_TRUE};
use crate::store::{MemoryOptionStore, OptionStore};

use super::{ApplyError, HandlerRegistry, OptionArg};

fn registry() -> HandlerRegistry {
    HandlerRegistry::new()
        .with(NumberHandler::with_bounds("split", Bounds::between(1, 16)))
        .with(DefaultHandler::new("dir"))
        .with(BooleanHandler::new("daemon"))
        .ignore("legacy")
}

mod lookup {
    use super::*;

    #[test]
    fn finds_exact_name_only() {
        let registry = registry();

        assert!(registry.lookup("split").is_some());
        assert!(registry.lookup("splitx").is_none());
        assert!(registry.lookup("Split").is_none());
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let registry = HandlerRegistry::new()
            .with(DefaultHandler::new("split"))
            .with(NumberHandler::new("split"));

        assert_eq!(registry.len(), 1);
        assert!(matches!(
            registry.lookup("split"),
            Some(OptionHandler::Number(_))
        ));
    }

    #[test]
    fn unnamed_null_handler_is_skipped_by_with() {
        let registry = HandlerRegistry::new().with(NullHandler);
        assert!(registry.is_empty());
    }

    #[test]
    fn iter_is_sorted_by_name() {
        let registry = registry();
        let names: Vec<_> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["daemon", "dir", "legacy", "split"]);
    }

    #[test]
    fn extend_prefers_incoming_entries() {
        let mut base = registry();
        base.extend(HandlerRegistry::new().with(DefaultHandler::new("split")));

        assert!(matches!(
            base.lookup("split"),
            Some(OptionHandler::Default(_))
        ));
        assert_eq!(base.len(), 4);
    }
}

mod apply {
    use super::*;

    #[test]
    fn routes_value_to_handler() {
        let mut store = MemoryOptionStore::new();
        registry().apply(&mut store, "split", "5").unwrap();

        assert_eq!(store.get("split"), "5");
    }

    #[test]
    fn unknown_option_is_an_error() {
        let mut store = MemoryOptionStore::new();
        let result = registry().apply(&mut store, "nope", "1");

        assert_eq!(
            result,
            Err(ApplyError::UnknownOption {
                name: "nope".to_string()
            })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn invalid_value_carries_option_and_reason() {
        let mut store = MemoryOptionStore::new();
        let err = registry().apply(&mut store, "split", "0").unwrap_err();

        assert!(matches!(
            &err,
            ApplyError::Invalid {
                option,
                source: ValidationError::BelowMinimum { .. },
            } if option == "split"
        ));
        assert_eq!(
            err.to_string(),
            "Invalid value for '--split': 0 is below the minimum of 1"
        );
    }

    #[test]
    fn ignored_option_writes_nothing() {
        let mut store = MemoryOptionStore::new();
        registry().apply(&mut store, "legacy", "whatever").unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn apply_all_stops_at_first_error() {
        let mut store = MemoryOptionStore::new();
        let args = [
            OptionArg::new("dir", "/tmp"),
            OptionArg::new("daemon", "maybe"),
            OptionArg::new("split", "4"),
        ];

        let result = registry().apply_all(&mut store, &args);

        assert!(matches!(result, Err(ApplyError::Invalid { .. })));
        assert_eq!(store.get("dir"), "/tmp");
        assert!(!store.contains("daemon"));
        assert!(!store.contains("split"));
    }

    #[test]
    fn apply_all_counts_applied_pairs() {
        let mut store = MemoryOptionStore::new();
        let args = [OptionArg::new("dir", "/tmp"), OptionArg::new("split", "4")];

        assert_eq!(registry().apply_all(&mut store, &args), Ok(2));
    }

    #[test]
    fn order_of_independent_options_does_not_matter() {
        let forward = [OptionArg::new("dir", "/tmp"), OptionArg::new("split", "4")];
        let backward = [OptionArg::new("split", "4"), OptionArg::new("dir", "/tmp")];
        let mut a = MemoryOptionStore::new();
        let mut b = MemoryOptionStore::new();

        registry().apply_all(&mut a, &forward).unwrap();
        registry().apply_all(&mut b, &backward).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn option_arg_displays_as_flag() {
        assert_eq!(OptionArg::new("split", "4").to_string(), "--split=4");
    }
}

mod builtin {
    use super::*;

    #[test]
    fn contains_derived_key_options() {
        let registry = HandlerRegistry::builtin();
        let mut store = MemoryOptionStore::new();

        registry.apply(&mut store, "log", "-").unwrap();
        registry.apply(&mut store, "http-proxy", "proxy:3128").unwrap();

        assert_eq!(store.get(PREF_STDOUT_LOG), V_TRUE);
        assert_eq!(store.get(PREF_LOG), "");
        assert_eq!(store.get(PREF_HTTP_PROXY_HOST), "proxy");
    }

    #[test]
    fn split_is_bounded() {
        let registry = HandlerRegistry::builtin();
        let mut store = MemoryOptionStore::new();

        assert!(registry.apply(&mut store, "split", "16").is_ok());
        assert!(registry.apply(&mut store, "split", "17").is_err());
        assert!(registry.apply(&mut store, "split", "0").is_err());
    }

    #[test]
    fn min_split_size_expands_units() {
        let registry = HandlerRegistry::builtin();
        let mut store = MemoryOptionStore::new();

        registry.apply(&mut store, "min-split-size", "20M").unwrap();
        assert_eq!(store.get("min-split-size"), "20971520");
    }
}

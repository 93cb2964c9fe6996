//! Tests for application execution logic.

use optval::config::{Cli, OutputFormat, TomlConfig, ValidatedConfig};
use optval::prefs::{PREF_HTTP_PROXY_ENABLED, PREF_LOG, PREF_STDOUT_LOG, V_TRUE};
use optval::registry::{ApplyError, HandlerRegistry};
use optval::store::{MemoryOptionStore, OptionStore};

use super::{RunError, build_store, execute, list_options, render};

fn config(args: &[&str], toml: Option<&str>) -> ValidatedConfig {
    let mut full_args = vec!["optval"];
    full_args.extend(args);
    let cli = Cli::parse_from_iter(full_args);
    let toml = toml.map(|t| TomlConfig::parse(t).unwrap());
    ValidatedConfig::from_raw(&cli, toml.as_ref()).unwrap()
}

mod store_building {
    use super::*;

    #[test]
    fn applies_cli_pairs() {
        let config = config(
            &["--", "--split", "4", "--log", "-", "--http-proxy=proxy:8080"],
            None,
        );

        let store = build_store(&config).unwrap();

        assert_eq!(store.get("split"), "4");
        assert_eq!(store.get(PREF_STDOUT_LOG), V_TRUE);
        assert_eq!(store.get(PREF_LOG), "");
        assert_eq!(store.get(PREF_HTTP_PROXY_ENABLED), V_TRUE);
    }

    #[test]
    fn cli_overrides_preset() {
        let config = config(&["--", "--split", "8"], Some("[preset]\nsplit = \"2\""));

        let store = build_store(&config).unwrap();

        assert_eq!(store.get("split"), "8");
    }

    #[test]
    fn preset_applies_when_cli_is_silent() {
        let config = config(&[], Some("[preset]\ndir = \"/downloads\""));

        let store = build_store(&config).unwrap();

        assert_eq!(store.get("dir"), "/downloads");
    }

    #[test]
    fn preset_and_cli_pairs_are_both_applied() {
        let config = config(
            &["--", "--split", "8"],
            Some("[preset]\ndir = \"/downloads\"\nsplit = \"2\""),
        );

        assert_eq!(config.pairs().count(), 3);
        let store = build_store(&config).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn rejected_value_stops_the_run() {
        let config = config(&["--", "--split", "4", "--daemon", "yes"], None);

        let result = build_store(&config);

        assert!(matches!(
            result,
            Err(ApplyError::Invalid { option, .. }) if option == "daemon"
        ));
    }

    #[test]
    fn unknown_option_stops_the_run() {
        let config = config(&["--", "--bogus", "1"], None);

        assert!(matches!(
            execute(&config),
            Err(RunError::Apply(ApplyError::UnknownOption { .. }))
        ));
    }
}

mod rendering {
    use super::*;

    fn sample_store() -> MemoryOptionStore {
        let mut store = MemoryOptionStore::new();
        store.put("split", "4");
        store.put("dir", "/tmp");
        store
    }

    #[test]
    fn renders_json() {
        let output = render(&sample_store(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["split"], "4");
        assert_eq!(value["dir"], "/tmp");
    }

    #[test]
    fn renders_toml() {
        let output = render(&sample_store(), OutputFormat::Toml).unwrap();
        let value: toml::Table = toml::from_str(&output).unwrap();

        assert_eq!(value.get("split").and_then(toml::Value::as_str), Some("4"));
        assert_eq!(value.get("dir").and_then(toml::Value::as_str), Some("/tmp"));
    }

    #[test]
    fn empty_store_renders_empty_object() {
        let output = render(&MemoryOptionStore::new(), OutputFormat::Json).unwrap();
        assert_eq!(output, "{}");
    }

    #[test]
    fn execute_uses_configured_format() {
        let config = config(&["--format", "toml", "--", "--split", "3"], None);

        let output = execute(&config).unwrap();

        assert!(output.contains("split = \"3\""));
    }
}

mod listing {
    use super::*;

    #[test]
    fn lists_options_sorted_with_kind() {
        let output = list_options(&HandlerRegistry::builtin());
        let lines: Vec<_> = output.lines().collect();

        assert!(lines.contains(&"split\tnumber"));
        assert!(lines.contains(&"http-proxy\thttp-proxy"));
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        assert_eq!(lines, sorted);
    }

    #[test]
    fn one_terminated_line_per_option() {
        let registry = HandlerRegistry::builtin();
        let output = list_options(&registry);

        assert!(output.ends_with('\n'));
        assert_eq!(output.lines().count(), registry.len());
    }

    #[test]
    fn empty_registry_lists_nothing() {
        assert!(list_options(&HandlerRegistry::new()).is_empty());
    }
}

//! Default values and the built-in option table.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use crate::handler::{
    BooleanHandler, Bounds, DefaultHandler, FloatNumberHandler, HttpProxyHandler, LogHandler,
    NumberHandler, OptionHandler, ParameterHandler, UnitNumberHandler,
};

/// Default output format for the resulting option store.
pub const FORMAT: &str = "json";

/// Smallest accepted `--split` value.
pub const SPLIT_MIN: i64 = 1;

/// Largest accepted `--split` value.
pub const SPLIT_MAX: i64 = 16;

/// Smallest accepted `--timeout` value, in seconds.
pub const TIMEOUT_MIN: i64 = 1;

/// Largest accepted `--timeout` value, in seconds.
pub const TIMEOUT_MAX: i64 = 600;

/// Returns the built-in option table.
///
/// Options declared in a config file with the same name replace these.
#[must_use]
pub fn builtin_handlers() -> Vec<OptionHandler> {
    vec![
        DefaultHandler::new("dir").into(),
        DefaultHandler::new("out").into(),
        DefaultHandler::new("http-user").into(),
        DefaultHandler::new("http-passwd").into(),
        LogHandler::new("log").into(),
        BooleanHandler::new("daemon").into(),
        BooleanHandler::new("ftp-pasv").into(),
        BooleanHandler::new("check-integrity").into(),
        NumberHandler::with_bounds("split", Bounds::between(SPLIT_MIN, SPLIT_MAX)).into(),
        NumberHandler::with_bounds("timeout", Bounds::between(TIMEOUT_MIN, TIMEOUT_MAX)).into(),
        NumberHandler::with_bounds("max-tries", Bounds::at_least(0)).into(),
        UnitNumberHandler::new("min-split-size").into(),
        FloatNumberHandler::with_bounds("seed-ratio", Bounds::at_least(0.0)).into(),
        ParameterHandler::two("ftp-type", "binary", "ascii").into(),
        ParameterHandler::one("http-auth-scheme", "basic").into(),
        HttpProxyHandler::new("http-proxy").into(),
    ]
}

//! Option handlers: validate a raw option value and write its canonical form.
//!
//! This module provides:
//! - The handler contract ([`OptionHandler`]) as a closed set of variants
//! - One struct per variant ([`NullHandler`], [`BooleanHandler`],
//!   [`NumberHandler`], [`UnitNumberHandler`], [`FloatNumberHandler`],
//!   [`ParameterHandler`], [`DefaultHandler`], [`LogHandler`],
//!   [`HttpProxyHandler`])
//! - Inclusive numeric [`Bounds`]
//! - The validation error type ([`ValidationError`])
//!
//! # Contract
//!
//! - `can_handle(name)` is an exact, case-sensitive comparison with the bound
//!   option name. It never fails.
//! - `parse_arg(store, value)` either writes every key it owns or returns an
//!   error having written nothing.
//! - Handlers hold no state between calls; applying the same value twice
//!   leaves the store as applying it once.

mod basic;
mod error;
mod log;
mod number;
mod parameter;
mod proxy;

#[cfg(test)]
mod number_tests;

pub use basic::{BooleanHandler, DefaultHandler, NullHandler};
pub use error::ValidationError;
pub use log::LogHandler;
pub use number::{
    Bounds, FloatNumberHandler, KIB, MIB, NumberHandler, UnitNumberHandler, parse_unit_number,
};
pub use parameter::ParameterHandler;
pub use proxy::{HostPort, HttpProxyHandler};

use std::fmt;

use crate::store::OptionStore;

/// Any option handler.
///
/// The driver builds a name -> handler table at startup (see
/// [`crate::registry::HandlerRegistry`]) and dispatches through this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionHandler {
    /// Recognizes any name, ignores the value.
    Null(NullHandler),
    /// `true` / `false`.
    Boolean(BooleanHandler),
    /// Bounded integer.
    Number(NumberHandler),
    /// Byte count with `K`/`M` suffix.
    UnitNumber(UnitNumberHandler),
    /// Bounded float, stored verbatim.
    FloatNumber(FloatNumberHandler),
    /// One of a fixed set of strings.
    Parameter(ParameterHandler),
    /// Free-form string.
    Default(DefaultHandler),
    /// Log destination, writes derived log keys.
    Log(LogHandler),
    /// `host:port` proxy, writes derived proxy keys.
    HttpProxy(HttpProxyHandler),
}

impl OptionHandler {
    /// Returns the bound option name, or `None` for the null handler.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Null(_) => None,
            Self::Boolean(h) => Some(h.name()),
            Self::Number(h) => Some(h.name()),
            Self::UnitNumber(h) => Some(h.name()),
            Self::FloatNumber(h) => Some(h.name()),
            Self::Parameter(h) => Some(h.name()),
            Self::Default(h) => Some(h.name()),
            Self::Log(h) => Some(h.name()),
            Self::HttpProxy(h) => Some(h.name()),
        }
    }

    /// Returns `true` if this handler owns the option `name`.
    #[must_use]
    pub fn can_handle(&self, name: &str) -> bool {
        match self {
            Self::Null(h) => h.can_handle(name),
            _ => self.name() == Some(name),
        }
    }

    /// Validates `arg` and writes the canonical value(s) into `store`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `arg` is rejected; the store is left
    /// untouched in that case.
    pub fn parse_arg<S: OptionStore + ?Sized>(
        &self,
        store: &mut S,
        arg: &str,
    ) -> Result<(), ValidationError> {
        match self {
            Self::Null(h) => h.parse_arg(store, arg),
            Self::Boolean(h) => h.parse_arg(store, arg),
            Self::Number(h) => h.parse_arg(store, arg),
            Self::UnitNumber(h) => h.parse_arg(store, arg),
            Self::FloatNumber(h) => h.parse_arg(store, arg),
            Self::Parameter(h) => h.parse_arg(store, arg),
            Self::Default(h) => h.parse_arg(store, arg),
            Self::Log(h) => h.parse_arg(store, arg),
            Self::HttpProxy(h) => h.parse_arg(store, arg),
        }
    }

    /// Short name of the variant, as used in config files.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null(_) => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::UnitNumber(_) => "unit-number",
            Self::FloatNumber(_) => "float-number",
            Self::Parameter(_) => "parameter",
            Self::Default(_) => "default",
            Self::Log(_) => "log",
            Self::HttpProxy(_) => "http-proxy",
        }
    }
}

impl fmt::Display for OptionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({})", self.kind()),
            None => f.write_str(self.kind()),
        }
    }
}

impl From<NullHandler> for OptionHandler {
    fn from(h: NullHandler) -> Self {
        Self::Null(h)
    }
}

impl From<BooleanHandler> for OptionHandler {
    fn from(h: BooleanHandler) -> Self {
        Self::Boolean(h)
    }
}

impl From<NumberHandler> for OptionHandler {
    fn from(h: NumberHandler) -> Self {
        Self::Number(h)
    }
}

impl From<UnitNumberHandler> for OptionHandler {
    fn from(h: UnitNumberHandler) -> Self {
        Self::UnitNumber(h)
    }
}

impl From<FloatNumberHandler> for OptionHandler {
    fn from(h: FloatNumberHandler) -> Self {
        Self::FloatNumber(h)
    }
}

impl From<ParameterHandler> for OptionHandler {
    fn from(h: ParameterHandler) -> Self {
        Self::Parameter(h)
    }
}

impl From<DefaultHandler> for OptionHandler {
    fn from(h: DefaultHandler) -> Self {
        Self::Default(h)
    }
}

impl From<LogHandler> for OptionHandler {
    fn from(h: LogHandler) -> Self {
        Self::Log(h)
    }
}

impl From<HttpProxyHandler> for OptionHandler {
    fn from(h: HttpProxyHandler) -> Self {
        Self::HttpProxy(h)
    }
}

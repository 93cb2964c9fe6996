//! Name -> handler lookup table and the dispatch loop over option pairs.
//!
//! The table is built once at startup; afterwards each `--name value` pair is
//! routed to the handler that owns `name`.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::handler::{NullHandler, OptionHandler, ValidationError};
use crate::store::OptionStore;

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

/// One `--name value` pair taken from the command line or a preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionArg {
    /// Option name without leading dashes
    pub name: String,
    /// Raw value
    pub value: String,
}

impl OptionArg {
    /// Creates an option pair.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for OptionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}={}", self.name, self.value)
    }
}

/// Error returned when an option pair cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// No handler is registered for the option.
    #[error("Unknown option '--{name}'")]
    UnknownOption {
        /// The unrecognized option name
        name: String,
    },

    /// The handler rejected the value.
    #[error("Invalid value for '--{option}': {source}")]
    Invalid {
        /// Option whose value was rejected
        option: String,
        /// Handler's reason
        #[source]
        source: ValidationError,
    },
}

/// Lookup table from option name to handler.
///
/// # Example
///
/// ```
/// use optval::handler::{Bounds, NumberHandler};
/// use optval::registry::HandlerRegistry;
/// use optval::store::{MemoryOptionStore, OptionStore};
///
/// let registry = HandlerRegistry::new()
///     .with(NumberHandler::with_bounds("split", Bounds::between(1, 16)));
/// let mut store = MemoryOptionStore::new();
///
/// registry.apply(&mut store, "split", "4").unwrap();
/// assert_eq!(store.get("split"), "4");
/// assert!(registry.apply(&mut store, "split", "17").is_err());
/// assert!(registry.apply(&mut store, "splits", "4").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, OptionHandler>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in option table.
    #[must_use]
    pub fn builtin() -> Self {
        crate::config::defaults::builtin_handlers()
            .into_iter()
            .fold(Self::new(), Self::with)
    }

    /// Adds a named handler, replacing any handler with the same name.
    ///
    /// A [`NullHandler`] has no name of its own; use [`Self::ignore`] for it.
    #[must_use]
    pub fn with(mut self, handler: impl Into<OptionHandler>) -> Self {
        let handler = handler.into();
        match handler.name().map(str::to_string) {
            Some(name) => {
                self.insert(name, handler);
            }
            None => tracing::warn!("Skipping unnamed {handler} handler; use ignore() instead"),
        }
        self
    }

    /// Registers `name` as recognized but ignored.
    #[must_use]
    pub fn ignore(mut self, name: impl Into<String>) -> Self {
        self.insert(name.into(), OptionHandler::Null(NullHandler));
        self
    }

    /// Inserts `handler` under `name`, returning the handler it replaced.
    pub fn insert(&mut self, name: String, handler: OptionHandler) -> Option<OptionHandler> {
        self.handlers.insert(name, handler)
    }

    /// Merges `other` into `self`; entries in `other` win.
    pub fn extend(&mut self, other: Self) {
        self.handlers.extend(other.handlers);
    }

    /// Returns the handler that owns `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&OptionHandler> {
        self.handlers.get(name).filter(|h| h.can_handle(name))
    }

    /// Returns the number of registered options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no options are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Iterates over `(name, handler)` pairs sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionHandler)> {
        let mut entries: Vec<_> = self
            .handlers
            .iter()
            .map(|(name, handler)| (name.as_str(), handler))
            .collect();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries.into_iter()
    }

    /// Routes one option value to its handler.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError::UnknownOption`] if no handler owns `name`, or
    /// [`ApplyError::Invalid`] if the handler rejects `value`. The store is
    /// unchanged on error.
    pub fn apply<S: OptionStore + ?Sized>(
        &self,
        store: &mut S,
        name: &str,
        value: &str,
    ) -> Result<(), ApplyError> {
        let handler = self.lookup(name).ok_or_else(|| {
            tracing::warn!(option = name, "Unknown option");
            ApplyError::UnknownOption {
                name: name.to_string(),
            }
        })?;

        handler.parse_arg(store, value).map_err(|source| {
            tracing::warn!(option = name, value, "Rejected: {source}");
            ApplyError::Invalid {
                option: name.to_string(),
                source,
            }
        })?;

        tracing::debug!(option = name, value, kind = handler.kind(), "Applied");
        Ok(())
    }

    /// Applies option pairs in order, stopping at the first failure.
    ///
    /// Pairs applied before the failure stay in the store.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApplyError`] encountered.
    pub fn apply_all<'a, S, I>(&self, store: &mut S, args: I) -> Result<usize, ApplyError>
    where
        S: OptionStore + ?Sized,
        I: IntoIterator<Item = &'a OptionArg>,
    {
        let mut applied = 0;
        for arg in args {
            self.apply(store, &arg.name, &arg.value)?;
            applied += 1;
        }
        Ok(applied)
    }
}

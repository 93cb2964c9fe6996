//! Handlers with trivial validation: null, boolean and free-form strings.

use crate::prefs::{V_FALSE, V_TRUE};
use crate::store::OptionStore;

use super::ValidationError;

/// Accepts every option name and does nothing with the value.
///
/// Placeholder for options the driver must recognize but not act on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullHandler;

impl NullHandler {
    /// Always `true`.
    #[must_use]
    pub const fn can_handle(&self, _name: &str) -> bool {
        true
    }

    /// Ignores the value; never fails and never writes.
    #[allow(clippy::unnecessary_wraps, clippy::unused_self)]
    pub fn parse_arg<S: OptionStore + ?Sized>(
        &self,
        _store: &mut S,
        _arg: &str,
    ) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Accepts exactly [`V_TRUE`] or [`V_FALSE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanHandler {
    name: String,
}

impl BooleanHandler {
    /// Creates a boolean handler bound to `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the bound option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stores `arg` unchanged if it is one of the two boolean tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotBoolean`] for any other input.
    pub fn parse_arg<S: OptionStore + ?Sized>(
        &self,
        store: &mut S,
        arg: &str,
    ) -> Result<(), ValidationError> {
        if arg != V_TRUE && arg != V_FALSE {
            return Err(ValidationError::NotBoolean {
                value: arg.to_string(),
                expected_true: V_TRUE,
                expected_false: V_FALSE,
            });
        }
        store.put(&self.name, arg);
        Ok(())
    }
}

/// Accepts any string, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultHandler {
    name: String,
}

impl DefaultHandler {
    /// Creates a free-form handler bound to `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the bound option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stores `arg` unchanged.
    #[allow(clippy::unnecessary_wraps)]
    pub fn parse_arg<S: OptionStore + ?Sized>(
        &self,
        store: &mut S,
        arg: &str,
    ) -> Result<(), ValidationError> {
        store.put(&self.name, arg);
        Ok(())
    }
}

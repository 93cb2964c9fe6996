//! Log destination handler.

use crate::prefs::{PREF_LOG, PREF_STDOUT_LOG, STDOUT_LOG_SENTINEL, V_TRUE};
use crate::store::OptionStore;

use super::ValidationError;

/// Splits a log destination into [`PREF_LOG`] / [`PREF_STDOUT_LOG`].
///
/// `"-"` selects standard output; anything else is a file path. The handler's
/// own option name is never written. The derived key that does not apply is
/// reset to the empty string so the last occurrence of the option wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogHandler {
    name: String,
}

impl LogHandler {
    /// Creates a log handler bound to `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the bound option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Writes the derived log keys. Never fails.
    #[allow(clippy::unnecessary_wraps, clippy::unused_self)]
    pub fn parse_arg<S: OptionStore + ?Sized>(
        &self,
        store: &mut S,
        arg: &str,
    ) -> Result<(), ValidationError> {
        if arg == STDOUT_LOG_SENTINEL {
            store.put(PREF_STDOUT_LOG, V_TRUE);
            store.put(PREF_LOG, "");
        } else {
            store.put(PREF_LOG, arg);
            store.put(PREF_STDOUT_LOG, "");
        }
        Ok(())
    }
}

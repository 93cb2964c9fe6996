//! Enumerated-value handler.

use crate::store::OptionStore;

use super::ValidationError;

/// Accepts only values from a fixed set (exact, case-sensitive match).
///
/// The one-value, two-value and list constructors are interchangeable; they
/// all build the same membership check.
///
/// # Example
///
/// ```
/// use optval::handler::ParameterHandler;
/// use optval::store::{MemoryOptionStore, OptionStore};
///
/// let handler = ParameterHandler::two("ftp-type", "binary", "ascii");
/// let mut store = MemoryOptionStore::new();
///
/// handler.parse_arg(&mut store, "ascii").unwrap();
/// assert_eq!(store.get("ftp-type"), "ascii");
/// assert!(handler.parse_arg(&mut store, "ASCII").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterHandler {
    name: String,
    valid_values: Vec<String>,
}

impl ParameterHandler {
    /// Creates a handler accepting any of `valid_values`, kept in order for
    /// error messages.
    #[must_use]
    pub fn new<I, V>(name: impl Into<String>, valid_values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            valid_values: valid_values.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a handler accepting a single value.
    #[must_use]
    pub fn one(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, [value.into()])
    }

    /// Creates a handler accepting one of two values.
    #[must_use]
    pub fn two(
        name: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::new(name, [first.into(), second.into()])
    }

    /// Returns the bound option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accepted values in declaration order.
    #[must_use]
    pub fn valid_values(&self) -> &[String] {
        &self.valid_values
    }

    /// Stores `arg` unchanged if it is one of the valid values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotInList`] otherwise.
    pub fn parse_arg<S: OptionStore + ?Sized>(
        &self,
        store: &mut S,
        arg: &str,
    ) -> Result<(), ValidationError> {
        if !self.valid_values.iter().any(|v| v == arg) {
            return Err(ValidationError::NotInList {
                value: arg.to_string(),
                expected: self.valid_values.clone(),
            });
        }
        store.put(&self.name, arg);
        Ok(())
    }
}

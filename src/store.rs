//! Option store: the canonical name -> value map handlers write into.
//!
//! This module provides the [`OptionStore`] contract handlers depend on and
//! [`MemoryOptionStore`], the in-process implementation used by the driver.

use std::collections::BTreeMap;

use serde::Serialize;

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// Abstraction over the shared option store.
///
/// Handlers receive the store as an explicit `&mut` so they can be tested in
/// isolation against any implementation.
pub trait OptionStore {
    /// Returns the value stored under `key`, or an empty string if absent.
    fn get(&self, key: &str) -> &str;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str);

    /// Removes every entry.
    fn clear(&mut self);
}

/// In-memory [`OptionStore`] backed by an ordered map.
///
/// Ordering only affects iteration and serialized output; lookups are by key.
///
/// # Example
///
/// ```
/// use optval::store::{MemoryOptionStore, OptionStore};
///
/// let mut store = MemoryOptionStore::new();
/// assert_eq!(store.get("split"), "");
///
/// store.put("split", "4");
/// assert_eq!(store.get("split"), "4");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MemoryOptionStore {
    values: BTreeMap<String, String>,
}

impl MemoryOptionStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Returns `true` if `key` has been written, even with an empty value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl OptionStore for MemoryOptionStore {
    fn get(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    fn put(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

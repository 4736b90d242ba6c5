//! Store Module
//!
//! The authoritative in-memory key → value mapping for a session.
//!
//! ## Data Structure Choice
//! A `BTreeMap<String, String>`: `String` orders by the bytes of its UTF-8
//! encoding, which is exactly the order `list` prints and the order the
//! codec lays keys out on disk.

use std::collections::BTreeMap;

/// Sorted in-memory key-value map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    entries: BTreeMap<String, String>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key, returning the previous value if there was one
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Delete a key, returning the removed value if it was present
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// All keys in ascending byte order
    pub fn list_keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Iterate over (key, value) pairs in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Store {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Store::new();
        for (key, value) in iter {
            store.put(key, value);
        }
        store
    }
}

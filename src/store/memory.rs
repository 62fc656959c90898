//! In-memory store.

use rustc_hash::FxHashMap;

use super::{KeyValueStore, Result};

/// Store backed by a hash map. Contents vanish with the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with one key already written.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value.into());
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("bestTime").unwrap(), None);

        store.set("bestTime", "42").unwrap();
        assert_eq!(store.get("bestTime").unwrap().as_deref(), Some("42"));

        store.set("bestTime", "40").unwrap();
        assert_eq!(store.get("bestTime").unwrap().as_deref(), Some("40"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_value() {
        let store = MemoryStore::with_value("bestTime", "17");
        assert_eq!(store.get("bestTime").unwrap().as_deref(), Some("17"));
        assert!(!store.is_empty());
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}

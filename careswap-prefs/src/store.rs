use crate::error::{PrefsError, Result};
use std::collections::HashMap;

/// Durable string key-value storage the managers persist into.
///
/// The browser implementation wraps `localStorage`; [`MemoryStore`] backs
/// tests and headless hosts.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Storage`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Storage`] when the backend rejects the write
    /// (quota exceeded, storage disabled).
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store with optional injected failures.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing entries.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Make every read fail, as a disabled `localStorage` does.
    #[must_use]
    pub const fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every write fail, as a full `localStorage` does.
    #[must_use]
    pub const fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Raw access for assertions, bypassing injected failures.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Overwrite an entry directly, as another tab would.
    pub fn put_raw(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(PrefsError::storage("reads disabled"));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(PrefsError::storage("quota exceeded"));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_value() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn injected_failures_surface_as_storage_errors() {
        let mut store = MemoryStore::with_entries([("k", "v")])
            .failing_reads()
            .failing_writes();
        assert!(matches!(store.get("k"), Err(PrefsError::Storage(_))));
        assert!(matches!(store.set("k", "w"), Err(PrefsError::Storage(_))));
        assert_eq!(store.raw("k"), Some("v"));
    }
}

//! Storage Slot Abstraction
//!
//! A string key-value store holding the serialized list.
//! Implementations can wrap browser localStorage, a file, or memory.

use std::collections::HashMap;

use crate::error::StoreResult;

/// Key-value store the todo list is persisted into
pub trait Storage {
    /// Read the value under `key`. `Ok(None)` when the slot is absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-memory storage, used by tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage with one slot already filled
    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.slots.insert(key.to_string(), value.to_string());
        storage
    }

    /// Raw slot contents, for inspection
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

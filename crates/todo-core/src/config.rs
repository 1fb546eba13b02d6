//! Store Configuration

/// Slot name used by the browser app
pub const DEFAULT_STORAGE_KEY: &str = "solid-todos";

/// How ids are assigned to new items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Raw millisecond clock reading. Two items created in the same
    /// millisecond share an id.
    ClockTick,
    /// Clock reading, bumped past the largest existing id on collision
    #[default]
    Unique,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Storage slot holding the serialized list
    pub storage_key: String,
    pub id_policy: IdPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            id_policy: IdPolicy::default(),
        }
    }
}

impl StoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_id_policy(mut self, policy: IdPolicy) -> Self {
        self.id_policy = policy;
        self
    }
}

//! Todo Models
//!
//! Data structures stored in the storage slot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Item identifier, a millisecond clock reading
pub type TodoId = i64;

/// Ordered list of todos in insertion order
pub type TodoList = Vec<TodoItem>;

/// A single task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    /// Text as entered, not trimmed
    pub text: String,
    pub completed: bool,
    /// Creation instant, never changes after `add`
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
}

impl TodoItem {
    /// Create a new active item
    pub fn new(id: TodoId, text: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            timestamp,
        }
    }

    /// Copy of this item with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Sorted todos split by completion flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedTodos {
    pub active: Vec<TodoItem>,
    pub completed: Vec<TodoItem>,
}

/// Timestamps are stored as RFC 3339 strings with millisecond precision,
/// the same shape `Date.prototype.toISOString()` produces.
pub mod timestamp_format {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw:?}")))
    }

    /// Parse a stored timestamp, accepting RFC 3339 and chrono's looser form
    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| raw.parse::<DateTime<Utc>>().ok())
    }
}

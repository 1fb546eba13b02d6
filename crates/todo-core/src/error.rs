//! Store Errors

use thiserror::Error;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while reading or writing the storage slot
#[derive(Debug, Error)]
pub enum StoreError {
    /// The slot holds something that is not a valid todo list
    #[error("failed to parse stored todos: {0}")]
    LoadParse(#[from] serde_json::Error),

    /// The backing key-value store refused the read or write
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// The list could not be encoded for writing
    #[error("failed to encode todos: {0}")]
    Encode(serde_json::Error),
}

impl StoreError {
    /// Whether this error came from decoding the stored value
    pub fn is_parse(&self) -> bool {
        matches!(self, StoreError::LoadParse(_))
    }
}

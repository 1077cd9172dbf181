//! Key-value store adapters

mod file_kv_store;
mod memory_kv_store;

pub use file_kv_store::FileKeyValueStore;
pub use memory_kv_store::MemoryKeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageKeyError {
    #[error("storage key is empty")]
    Empty,
    #[error("storage key {0:?} may only contain ASCII letters, digits, '-' and '_'")]
    InvalidCharacters(String),
}

/// Keys double as file names, so they are kept to a portable character set.
pub fn validate_key(key: &str) -> Result<(), StorageKeyError> {
    if key.is_empty() {
        return Err(StorageKeyError::Empty);
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(StorageKeyError::InvalidCharacters(key.to_string()));
    }
    Ok(())
}

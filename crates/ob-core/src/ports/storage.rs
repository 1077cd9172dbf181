//! Key-value storage port
//!
//! Persists whole JSON documents under short string keys. Implementations are
//! provided by the infrastructure layer (file-based or in-memory).

use async_trait::async_trait;

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Load the document stored under `key`. `Ok(None)` when nothing is stored.
    async fn load(&self, key: &str) -> anyhow::Result<Option<serde_json::Value>>;

    /// Replace the document stored under `key`.
    async fn save(&self, key: &str, value: &serde_json::Value) -> anyhow::Result<()>;

    /// Remove the document stored under `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}

//! File-based key-value store
//!
//! Persists each key as a pretty-printed JSON file `<base_dir>/<key>.json`,
//! replaced through a `<key>.json.tmp` sibling on every write.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use ob_core::ports::KeyValueStorePort;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::validate_key;

pub const STORE_FILE_EXTENSION: &str = "json";
const TMP_FILE_EXTENSION: &str = "json.tmp";

pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create store rooted at `base_dir`. The directory is created on first write.
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn path_for(&self, key: &str) -> anyhow::Result<PathBuf> {
        validate_key(key)?;
        Ok(self
            .base_dir
            .join(format!("{key}.{STORE_FILE_EXTENSION}")))
    }

    async fn ensure_base_dir(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create store directory: {}", e))
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn load(&self, key: &str) -> anyhow::Result<Option<serde_json::Value>> {
        let path = self.path_for(key)?;

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(anyhow::anyhow!("Failed to read {}: {}", path.display(), e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stored value for {}: {}", key, e))?;

        Ok(Some(value))
    }

    async fn save(&self, key: &str, value: &serde_json::Value) -> anyhow::Result<()> {
        let path = self.path_for(key)?;
        self.ensure_base_dir().await?;

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| anyhow::anyhow!("Failed to serialize value for {}: {}", key, e))?;

        // Temp file + rename: the target always holds a whole document.
        let tmp_path = path.with_extension(TMP_FILE_EXTENSION);
        let mut file = fs::File::create(&tmp_path)
            .await
            .with_context(|| format!("Failed to create temp store file: {}", tmp_path.display()))?;

        file.write_all(json.as_bytes())
            .await
            .with_context(|| format!("Failed to write temp store file: {}", tmp_path.display()))?;

        file.sync_all()
            .await
            .with_context(|| format!("Failed to sync temp store file: {}", tmp_path.display()))?;
        drop(file);

        // TODO: rename over an existing file is not atomic on every Windows filesystem.
        fs::rename(&tmp_path, &path).await.with_context(|| {
            format!(
                "Failed to rename temp store file: {} -> {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        debug!(key, path = %path.display(), "stored value written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(anyhow::anyhow!("Failed to remove {}: {}", path.display(), e)),
        }
    }
}

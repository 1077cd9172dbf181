//! # Dependency Wiring / 依赖注入
//!
//! Turns the [`AppConfig`] DTO into [`AppDeps`]. This is where configuration
//! policy lives: empty values fall back to defaults here.
//! 配置策略在此应用：空值在此处回退为默认值。

use std::path::PathBuf;
use std::sync::Arc;

use ob_app::AppDeps;
use ob_core::auth::{Credentials, DEFAULT_PASSWORD, DEFAULT_USERNAME};
use ob_core::config::AppConfig;
use ob_core::ports::KeyValueStorePort;
use ob_infra::{FileKeyValueStore, MemoryKeyValueStore, SystemClock};
use tracing::{info, warn};

use super::config::system_data_dir;

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Unknown storage backend: {0}")]
    UnknownBackend(String),

    #[error("Storage initialization failed: {0}")]
    StorageInit(String),
}

pub const BACKEND_FILE: &str = "file";
pub const BACKEND_MEMORY: &str = "memory";

fn resolve_data_dir(config: &AppConfig) -> WiringResult<PathBuf> {
    if !config.data_dir.as_os_str().is_empty() {
        return Ok(config.data_dir.clone());
    }
    system_data_dir()
        .map(|dir| dir.join("state"))
        .ok_or_else(|| {
            WiringError::StorageInit("no data_dir configured and no platform data directory".into())
        })
}

fn create_storage(config: &AppConfig) -> WiringResult<Arc<dyn KeyValueStorePort>> {
    match config.storage_backend.trim() {
        "" | BACKEND_FILE => {
            let data_dir = resolve_data_dir(config)?;
            info!(data_dir = %data_dir.display(), "using file storage");
            Ok(Arc::new(FileKeyValueStore::new(data_dir)))
        }
        BACKEND_MEMORY => {
            warn!("using in-memory storage, state is lost on exit");
            Ok(Arc::new(MemoryKeyValueStore::new()))
        }
        other => Err(WiringError::UnknownBackend(other.to_string())),
    }
}

fn resolve_credentials(config: &AppConfig) -> Credentials {
    let username = if config.auth_username.is_empty() {
        DEFAULT_USERNAME
    } else {
        config.auth_username.as_str()
    };
    let password = if config.auth_password.is_empty() {
        DEFAULT_PASSWORD
    } else {
        config.auth_password.as_str()
    };
    Credentials::new(username, password)
}

/// Wire all dependencies from configuration
/// 根据配置组装所有依赖
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    Ok(AppDeps {
        storage: create_storage(config)?,
        clock: Arc::new(SystemClock),
        credentials: resolve_credentials(config),
    })
}

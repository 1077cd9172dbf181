//! # Configuration DTO / 配置数据
//!
//! TOML → DTO mapping only. No validation and no default policy: an empty
//! value is a fact, and the wiring layer decides what it means.
//! 仅负责 TOML 到 DTO 的映射，不做校验，不计算默认值。

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding one JSON file per persisted key
    pub data_dir: PathBuf,

    /// Storage backend name, `file` or `memory` (unchecked)
    /// 存储后端名称（不做校验）
    pub storage_backend: String,

    /// Reference username; empty means "use the built-in one"
    pub auth_username: String,

    /// Reference password; empty means "use the built-in one"
    pub auth_password: String,

    /// Directory for rolling log files; empty disables file logging
    pub log_dir: PathBuf,

    /// Extra filter directive, e.g. `debug` or `ob_app=trace`
    pub log_level: String,
}

fn str_at<'a>(value: &'a toml::Value, section: &str, key: &str) -> &'a str {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            data_dir: PathBuf::from(str_at(toml_value, "storage", "data_dir")),
            storage_backend: str_at(toml_value, "storage", "backend").to_string(),
            auth_username: str_at(toml_value, "auth", "username").to_string(),
            auth_password: str_at(toml_value, "auth", "password").to_string(),
            log_dir: PathBuf::from(str_at(toml_value, "logging", "log_dir")),
            log_level: str_at(toml_value, "logging", "level").to_string(),
        })
    }

    /// Create empty AppConfig (all empty values)
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            storage_backend: String::new(),
            auth_username: String::new(),
            auth_password: String::new(),
            log_dir: PathBuf::new(),
            log_level: String::new(),
        }
    }

    /// Create AppConfig rooted at a platform data directory computed by the caller.
    /// 以调用方提供的数据目录构建默认路径。
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            log_dir: data_dir.join("logs"),
            data_dir: data_dir.join("state"),
            ..Self::empty()
        }
    }
}

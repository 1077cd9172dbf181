//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file into the [`AppConfig`] DTO. Accepts whatever is in the
//! file: no validation and no defaults here. Defaults are applied by the
//! wiring step.
//! 仅纯数据加载，接受文件中的任何内容。

use anyhow::Context;
use std::path::PathBuf;

use ob_core::config::AppConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "ONBOARD_CONFIG";

/// Directory name under the platform data directory.
pub const APP_DIR_NAME: &str = "onboard-wizard";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Platform data directory of the application, if the platform has one.
pub fn system_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Config file named by `ONBOARD_CONFIG`, if set.
pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from)
}

/// Picks the configuration source.
///
/// An explicit config file wins; otherwise system-default paths are used,
/// or an empty config when the platform has no data directory.
///
/// Runs before the tracing subscriber exists, so it does not log.
pub fn resolve_config(config_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    match config_path {
        Some(path) => load_config(path),
        None => Ok(system_data_dir()
            .map(AppConfig::with_system_defaults)
            .unwrap_or_else(AppConfig::empty)),
    }
}

//! # Application Dependencies / 应用依赖
//!
//! Parameter grouping for application construction. Not a builder: no build
//! steps, no defaults, no hidden logic.
//! 仅用于参数打包。

use std::sync::Arc;

use ob_core::auth::Credentials;
use ob_core::ports::{ClockPort, KeyValueStorePort};

/// Application dependency grouping
/// 应用依赖分组
pub struct AppDeps {
    // Storage dependencies / 存储依赖
    pub storage: Arc<dyn KeyValueStorePort>,

    // System dependencies / 系统依赖
    pub clock: Arc<dyn ClockPort>,

    // Reference credentials / 登录凭据
    pub credentials: Credentials,
}

use ob_core::routing::Resolution;
use tracing::{info_span, Instrument};

use super::CommandError;
use crate::bootstrap::AppRuntime;

/// Resolve a requested path through the route guards.
/// 通过路由守卫解析请求路径。
pub async fn navigate(runtime: &AppRuntime, path: &str) -> Result<Resolution, CommandError> {
    let span = info_span!("command.navigation.navigate", path = %path);
    async {
        let uc = runtime.usecases().navigate();
        uc.execute(path).await.map_err(CommandError::from)
    }
    .instrument(span)
    .await
}

//! Session commands
//! 会话相关命令

use ob_core::routing::Resolution;
use tracing::{info_span, Instrument};

use super::CommandError;
use crate::bootstrap::AppRuntime;

/// Log in and report where the login page forwards to.
pub async fn login(
    runtime: &AppRuntime,
    username: &str,
    password: &str,
) -> Result<Resolution, CommandError> {
    let span = info_span!("command.auth.login");
    async {
        let uc = runtime.usecases().login();
        uc.execute(username, password).await.map_err(CommandError::from)
    }
    .instrument(span)
    .await
}

pub async fn logout(runtime: &AppRuntime) -> Result<Resolution, CommandError> {
    let span = info_span!("command.auth.logout");
    async {
        let uc = runtime.usecases().logout();
        uc.execute().await.map_err(CommandError::from)
    }
    .instrument(span)
    .await
}

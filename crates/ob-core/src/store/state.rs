use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::onboarding::OnboardingProgress;

/// Complete in-memory state of one interaction.
///
/// 应用状态：会话与入门引导进度。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub session: Session,
    pub progress: OnboardingProgress,
}

impl AppState {
    pub fn new(session: Session, progress: OnboardingProgress) -> Self {
        Self { session, progress }
    }
}

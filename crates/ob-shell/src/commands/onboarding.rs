//! Onboarding-related commands
//! 入门引导相关命令

use ob_app::usecases::{CompletionOutcome, OnboardingStateDto};
use ob_core::onboarding::{
    FavoriteSongsForm, OnboardingProgress, PaymentInfoForm, ProfileForm, ProfilePatch, StepForm,
};
use ob_core::routing::Resolution;
use tracing::{info_span, Instrument};

use super::CommandError;
use crate::bootstrap::AppRuntime;

/// Get current onboarding state
/// 获取当前入门引导状态
pub async fn get_onboarding_state(
    runtime: &AppRuntime,
) -> Result<OnboardingStateDto, CommandError> {
    let span = info_span!("command.onboarding.get_state");
    async {
        let uc = runtime.usecases().get_onboarding_state();
        Ok(uc.execute().await)
    }
    .instrument(span)
    .await
}

async fn submit<F>(runtime: &AppRuntime, form: F) -> Result<Resolution, CommandError>
where
    F: StepForm + Send,
{
    let uc = runtime.usecases().submit_step();
    uc.execute(form).await.map_err(CommandError::from)
}

pub async fn submit_profile(
    runtime: &AppRuntime,
    form: ProfileForm,
) -> Result<Resolution, CommandError> {
    let span = info_span!("command.onboarding.submit_profile");
    submit(runtime, form).instrument(span).await
}

pub async fn submit_favorite_songs(
    runtime: &AppRuntime,
    form: FavoriteSongsForm,
) -> Result<Resolution, CommandError> {
    let span = info_span!("command.onboarding.submit_favorite_songs");
    submit(runtime, form).instrument(span).await
}

pub async fn submit_payment_info(
    runtime: &AppRuntime,
    form: PaymentInfoForm,
) -> Result<Resolution, CommandError> {
    let span = info_span!("command.onboarding.submit_payment_info");
    submit(runtime, form).instrument(span).await
}

pub async fn save_profile_draft(
    runtime: &AppRuntime,
    patch: ProfilePatch,
) -> Result<OnboardingProgress, CommandError> {
    let span = info_span!("command.onboarding.save_profile_draft");
    async {
        let uc = runtime.usecases().save_draft();
        uc.profile(patch).await.map_err(CommandError::from)
    }
    .instrument(span)
    .await
}

pub async fn save_favorite_songs_draft(
    runtime: &AppRuntime,
    form: FavoriteSongsForm,
) -> Result<OnboardingProgress, CommandError> {
    let span = info_span!("command.onboarding.save_favorite_songs_draft");
    async {
        let uc = runtime.usecases().save_draft();
        uc.favorite_songs(form).await.map_err(CommandError::from)
    }
    .instrument(span)
    .await
}

pub async fn save_payment_draft(
    runtime: &AppRuntime,
    form: PaymentInfoForm,
) -> Result<OnboardingProgress, CommandError> {
    let span = info_span!("command.onboarding.save_payment_draft");
    async {
        let uc = runtime.usecases().save_draft();
        uc.payment(form).await.map_err(CommandError::from)
    }
    .instrument(span)
    .await
}

/// Complete onboarding
/// 完成入门引导
pub async fn complete_onboarding(
    runtime: &AppRuntime,
) -> Result<CompletionOutcome, CommandError> {
    let span = info_span!("command.onboarding.complete");
    async {
        let uc = runtime.usecases().complete_onboarding();
        uc.execute().await.map_err(CommandError::from)
    }
    .instrument(span)
    .await
}

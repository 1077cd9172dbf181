//! Command handlers
//! 命令处理
//!
//! Thin adapters: each handler opens a `command.*` span, calls one use case
//! and maps its error into a [`CommandError`].

pub mod auth;
pub mod error;
pub mod navigation;
pub mod onboarding;

use crate::bootstrap::AppRuntime;
use crate::protocol::{ShellRequest, ShellResponse};

pub use error::{CommandError, CommandErrorKind};

/// Routes one request to its handler.
pub async fn handle(runtime: &AppRuntime, request: ShellRequest) -> ShellResponse {
    match request {
        ShellRequest::Navigate { path } => {
            ShellResponse::from_result(navigation::navigate(runtime, &path).await)
        }
        ShellRequest::Login { username, password } => {
            ShellResponse::from_result(auth::login(runtime, &username, &password).await)
        }
        ShellRequest::Logout => ShellResponse::from_result(auth::logout(runtime).await),
        ShellRequest::GetOnboardingState => {
            ShellResponse::from_result(onboarding::get_onboarding_state(runtime).await)
        }
        ShellRequest::SubmitProfile(form) => {
            ShellResponse::from_result(onboarding::submit_profile(runtime, form).await)
        }
        ShellRequest::SubmitFavoriteSongs(form) => {
            ShellResponse::from_result(onboarding::submit_favorite_songs(runtime, form).await)
        }
        ShellRequest::SubmitPaymentInfo(form) => {
            ShellResponse::from_result(onboarding::submit_payment_info(runtime, form).await)
        }
        ShellRequest::SaveProfileDraft(patch) => {
            ShellResponse::from_result(onboarding::save_profile_draft(runtime, patch).await)
        }
        ShellRequest::SaveFavoriteSongsDraft(form) => {
            ShellResponse::from_result(onboarding::save_favorite_songs_draft(runtime, form).await)
        }
        ShellRequest::SavePaymentDraft(form) => {
            ShellResponse::from_result(onboarding::save_payment_draft(runtime, form).await)
        }
        ShellRequest::CompleteOnboarding => {
            ShellResponse::from_result(onboarding::complete_onboarding(runtime).await)
        }
    }
}

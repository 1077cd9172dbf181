//! Wire protocol
//!
//! One JSON object per line in each direction.
//!
//! Request: `{"command": "submit_profile", "name": "Ada", "age": 36, ...}`
//! Reply: `{"ok": true, "data": ...}` or `{"ok": false, "error": {...}}`

use ob_core::onboarding::{FavoriteSongsForm, PaymentInfoForm, ProfileForm, ProfilePatch};
use serde::{Deserialize, Serialize};

use crate::commands::error::CommandError;

/// A request read from stdin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ShellRequest {
    Navigate { path: String },
    Login { username: String, password: String },
    Logout,
    GetOnboardingState,
    SubmitProfile(ProfileForm),
    SubmitFavoriteSongs(FavoriteSongsForm),
    SubmitPaymentInfo(PaymentInfoForm),
    SaveProfileDraft(ProfilePatch),
    SaveFavoriteSongsDraft(FavoriteSongsForm),
    SavePaymentDraft(PaymentInfoForm),
    CompleteOnboarding,
}

impl ShellRequest {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navigate { .. } => "navigate",
            Self::Login { .. } => "login",
            Self::Logout => "logout",
            Self::GetOnboardingState => "get_onboarding_state",
            Self::SubmitProfile(_) => "submit_profile",
            Self::SubmitFavoriteSongs(_) => "submit_favorite_songs",
            Self::SubmitPaymentInfo(_) => "submit_payment_info",
            Self::SaveProfileDraft(_) => "save_profile_draft",
            Self::SaveFavoriteSongsDraft(_) => "save_favorite_songs_draft",
            Self::SavePaymentDraft(_) => "save_payment_draft",
            Self::CompleteOnboarding => "complete_onboarding",
        }
    }
}

/// A reply written to stdout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl ShellResponse {
    pub fn success<T: Serialize>(data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Self {
                ok: true,
                data: Some(data),
                error: None,
            },
            Err(err) => Self::failure(CommandError::internal(format!(
                "failed to serialize reply: {err}"
            ))),
        }
    }

    pub fn failure(error: CommandError) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error),
        }
    }

    pub fn from_result<T: Serialize>(result: Result<T, CommandError>) -> Self {
        match result {
            Ok(data) => Self::success(&data),
            Err(error) => Self::failure(error),
        }
    }
}

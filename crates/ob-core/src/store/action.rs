use crate::auth::Session;
use crate::onboarding::{FavoriteSong, OnboardingProgress, PaymentData, ProfileData, ProfilePatch};

/// Every way the state may change.
///
/// 状态变更动作。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateAction {
    /// Credentials were accepted for `username`.
    Login { username: String },
    Logout,
    /// Session restored from storage.
    InitializeAuth(Session),
    /// Progress restored from storage.
    HydrateProgress(OnboardingProgress),
    UpdateProfileDraft(ProfilePatch),
    UpdateFavoriteSongsDraft(Vec<FavoriteSong>),
    UpdatePaymentDraft(PaymentData),
    /// Validated profile; marks the step done.
    SubmitProfile(ProfileData),
    /// Validated song list; marks the step done.
    SubmitFavoriteSongs(Vec<FavoriteSong>),
    /// Validated payment data; marks the step done.
    SubmitPaymentInfo(PaymentData),
    SetOnboardingComplete(bool),
}

impl StateAction {
    /// Variant name for logs. Payloads may hold card data and are not logged.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Logout => "logout",
            Self::InitializeAuth(_) => "initialize_auth",
            Self::HydrateProgress(_) => "hydrate_progress",
            Self::UpdateProfileDraft(_) => "update_profile_draft",
            Self::UpdateFavoriteSongsDraft(_) => "update_favorite_songs_draft",
            Self::UpdatePaymentDraft(_) => "update_payment_draft",
            Self::SubmitProfile(_) => "submit_profile",
            Self::SubmitFavoriteSongs(_) => "submit_favorite_songs",
            Self::SubmitPaymentInfo(_) => "submit_payment_info",
            Self::SetOnboardingComplete(_) => "set_onboarding_complete",
        }
    }
}

/// Persistence requested by a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistEffect {
    PersistSession,
    PersistProgress,
}

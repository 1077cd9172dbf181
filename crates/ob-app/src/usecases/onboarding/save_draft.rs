use ob_core::onboarding::{
    FavoriteSongsForm, OnboardingProgress, OnboardingStep, PaymentInfoForm, ProfilePatch,
};
use ob_core::store::StateAction;
use tracing::{debug, info_span, Instrument};

use super::{ensure_step_reachable, StepNotReachable};
use crate::store::AppStore;

/// Use case for per-field auto-save.
///
/// Drafts store raw values without validation and never touch the `isDone`
/// flags.
/// 草稿保存：不校验，不修改完成标记。
pub struct SaveDraft {
    store: AppStore,
}

impl SaveDraft {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    async fn save(
        &self,
        step: OnboardingStep,
        action: StateAction,
    ) -> Result<OnboardingProgress, StepNotReachable> {
        let span = info_span!("usecase.onboarding.save_draft", step = %step);
        async {
            let state = self
                .store
                .dispatch_if(action, |state| ensure_step_reachable(state, step))
                .await?;
            debug!("draft saved");
            Ok(state.progress)
        }
        .instrument(span)
        .await
    }

    pub async fn profile(&self, patch: ProfilePatch) -> Result<OnboardingProgress, StepNotReachable> {
        self.save(OnboardingStep::Profile, StateAction::UpdateProfileDraft(patch))
            .await
    }

    pub async fn favorite_songs(
        &self,
        form: FavoriteSongsForm,
    ) -> Result<OnboardingProgress, StepNotReachable> {
        self.save(
            OnboardingStep::FavoriteSongs,
            StateAction::UpdateFavoriteSongsDraft(form.into_draft()),
        )
        .await
    }

    pub async fn payment(
        &self,
        form: PaymentInfoForm,
    ) -> Result<OnboardingProgress, StepNotReachable> {
        self.save(
            OnboardingStep::PaymentInfo,
            StateAction::UpdatePaymentDraft(form.into_draft()),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::memory_store;
    use ob_core::onboarding::{ProfileData, SongEntry};

    async fn logged_in() -> AppStore {
        let store = memory_store().await;
        store
            .dispatch(StateAction::Login {
                username: "admin".to_string(),
            })
            .await;
        store
    }

    #[tokio::test]
    async fn test_profile_draft_keeps_invalid_values_and_done_flag() {
        let store = logged_in().await;
        let drafts = SaveDraft::new(store.clone());

        let progress = drafts
            .profile(ProfilePatch {
                email: Some("not-an-email".to_string()),
                age: Some("abc".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(progress.profile.data.email, "not-an-email");
        assert_eq!(progress.profile.data.age, None);
        assert!(!progress.profile.is_done);
    }

    #[tokio::test]
    async fn test_draft_on_completed_step_keeps_it_done() {
        let store = logged_in().await;
        store
            .dispatch(StateAction::SubmitProfile(ProfileData {
                name: "Ada".to_string(),
                ..Default::default()
            }))
            .await;

        let progress = SaveDraft::new(store)
            .profile(ProfilePatch {
                name: Some("Ada L.".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(progress.profile.is_done);
        assert_eq!(progress.profile.data.name, "Ada L.");
    }

    #[tokio::test]
    async fn test_song_draft_keeps_blank_rows() {
        let store = logged_in().await;
        store
            .dispatch(StateAction::SubmitProfile(ProfileData::default()))
            .await;

        let progress = SaveDraft::new(store)
            .favorite_songs(FavoriteSongsForm::new(vec![
                SongEntry::new("So What", ""),
                SongEntry::default(),
            ]))
            .await
            .unwrap();

        assert_eq!(progress.favorite_songs.data.songs.len(), 2);
        assert!(!progress.favorite_songs.is_done);
    }

    #[tokio::test]
    async fn test_draft_for_unreachable_step_is_refused() {
        let store = logged_in().await;
        let err = SaveDraft::new(store.clone())
            .payment(PaymentInfoForm::default())
            .await
            .unwrap_err();

        assert_eq!(err.step, OnboardingStep::PaymentInfo);
        assert_eq!(err.redirect, "/onboarding/profile");
    }
}

//! Pure state transitions.

use super::action::{PersistEffect, StateAction};
use super::state::AppState;
use crate::auth::Session;
use crate::onboarding::StepProgress;

/// Pure reducer: no I/O, no clock.
///
/// 纯函数状态迁移，副作用以 [`PersistEffect`] 形式返回。
pub struct StateReducer;

impl StateReducer {
    pub fn reduce(state: AppState, action: StateAction) -> (AppState, Vec<PersistEffect>) {
        let AppState {
            mut session,
            mut progress,
        } = state;

        let effects = match action {
            StateAction::Login { username } => {
                session = Session::authenticated(username);
                vec![PersistEffect::PersistSession]
            }
            StateAction::Logout => {
                session = Session::Anonymous;
                vec![PersistEffect::PersistSession]
            }
            StateAction::InitializeAuth(restored) => {
                session = restored;
                Vec::new()
            }
            StateAction::HydrateProgress(restored) => {
                progress = restored.normalized();
                Vec::new()
            }
            StateAction::UpdateProfileDraft(patch) => {
                patch.apply_to(&mut progress.profile.data);
                vec![PersistEffect::PersistProgress]
            }
            StateAction::UpdateFavoriteSongsDraft(songs) => {
                progress.favorite_songs.data.songs = songs;
                vec![PersistEffect::PersistProgress]
            }
            StateAction::UpdatePaymentDraft(data) => {
                progress.payment_info.data = data;
                vec![PersistEffect::PersistProgress]
            }
            StateAction::SubmitProfile(data) => {
                progress.profile = StepProgress::done(data);
                vec![PersistEffect::PersistProgress]
            }
            StateAction::SubmitFavoriteSongs(songs) => {
                progress.favorite_songs.data.songs = songs;
                progress.favorite_songs.is_done = true;
                vec![PersistEffect::PersistProgress]
            }
            StateAction::SubmitPaymentInfo(data) => {
                progress.payment_info = StepProgress::done(data);
                vec![PersistEffect::PersistProgress]
            }
            StateAction::SetOnboardingComplete(complete) => {
                let was = progress.is_onboarding_complete();
                if progress.set_onboarding_complete(complete) && was != complete {
                    vec![PersistEffect::PersistProgress]
                } else {
                    Vec::new()
                }
            }
        };

        (AppState { session, progress }, effects)
    }
}

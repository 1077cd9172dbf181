use ob_core::onboarding::OnboardingStep;
use ob_core::routing::{resolve, Resolution, RoutingError, HOME_PATH, LOGIN_PATH};
use ob_core::store::StateAction;
use serde::Serialize;
use tracing::{info, info_span, warn, Instrument};

use super::StepNotReachable;
use crate::store::AppStore;

#[derive(Debug, thiserror::Error)]
pub enum CompleteOnboardingError {
    #[error(transparent)]
    NotReachable(#[from] StepNotReachable),
    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Result of the final confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOutcome {
    pub completed: bool,
    /// Navigation to the home route after the attempt.
    pub resolution: Resolution,
}

/// Use case for confirming the terminal step.
///
/// Marks onboarding complete when every data step is done at invocation
/// time; otherwise nothing changes and the outcome says so.
pub struct CompleteOnboarding {
    store: AppStore,
}

impl CompleteOnboarding {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<CompletionOutcome, CompleteOnboardingError> {
        let span = info_span!("usecase.onboarding.complete");
        async {
            let state = self.store.get_state().await;
            if !state.session.is_authenticated() {
                return Err(StepNotReachable {
                    step: OnboardingStep::Success,
                    redirect: LOGIN_PATH.to_string(),
                }
                .into());
            }

            let state = self
                .store
                .dispatch(StateAction::SetOnboardingComplete(true))
                .await;
            let completed = state.progress.is_onboarding_complete();
            if completed {
                info!("onboarding completed");
            } else {
                warn!(
                    step = %state.progress.first_incomplete_step(),
                    "onboarding not completed, steps missing"
                );
            }

            let resolution = resolve(&state.session, &state.progress, HOME_PATH)?;
            Ok(CompletionOutcome {
                completed,
                resolution,
            })
        }
        .instrument(span)
        .await
    }
}

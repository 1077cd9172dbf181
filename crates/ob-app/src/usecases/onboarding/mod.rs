//! Onboarding use cases
//!
//! Step submission, draft auto-save, the final confirmation and the
//! read-only overview used to render the wizard.

pub mod complete;
pub mod get_state;
pub mod save_draft;
pub mod submit_step;

pub use complete::{CompleteOnboarding, CompleteOnboardingError, CompletionOutcome};
pub use get_state::{GetOnboardingState, OnboardingStateDto, StepStateDto};
pub use save_draft::SaveDraft;
pub use submit_step::{SubmitStep, SubmitStepError};

use ob_core::onboarding::OnboardingStep;
use ob_core::routing::{decide, Route, RouteDecision};
use ob_core::store::AppState;

/// The page of `step` would not be rendered for the current state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("step {step} is not reachable, the wizard is at {redirect}")]
pub struct StepNotReachable {
    pub step: OnboardingStep,
    pub redirect: String,
}

/// Forms can only be filled on pages the guards let the user see.
pub(crate) fn ensure_step_reachable(
    state: &AppState,
    step: OnboardingStep,
) -> Result<(), StepNotReachable> {
    match decide(&state.session, &state.progress, &Route::OnboardingStep(step)) {
        RouteDecision::Allow => Ok(()),
        RouteDecision::Redirect(redirect) => Err(StepNotReachable { step, redirect }),
    }
}

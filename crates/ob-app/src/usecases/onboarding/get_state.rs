use ob_core::onboarding::{
    stepper, OnboardingProgress, OnboardingStep, StepIndicator, ONBOARDING_STEPS,
};
use serde::Serialize;

use crate::store::AppStore;

/// Per-step completion as shown to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepStateDto {
    pub step: OnboardingStep,
    pub path: String,
    pub label: String,
    pub is_done: bool,
}

/// Data transfer object for onboarding state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStateDto {
    pub is_authenticated: bool,
    pub username: Option<String>,
    pub is_onboarding_complete: bool,
    /// First incomplete step, `success` once every data step is done.
    pub current_step: OnboardingStep,
    pub current_step_path: String,
    pub steps: Vec<StepStateDto>,
    /// Stepper around `current_step`. Navigation replies carry the stepper
    /// of the page actually rendered.
    pub stepper: Vec<StepIndicator>,
    /// Stored form values, used to pre-fill the pages.
    pub progress: OnboardingProgress,
}

/// Use case for getting the current onboarding overview.
pub struct GetOnboardingState {
    store: AppStore,
}

impl GetOnboardingState {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> OnboardingStateDto {
        let state = self.store.get_state().await;
        let progress = state.progress;
        let current_step = progress.first_incomplete_step();

        let steps = ONBOARDING_STEPS
            .iter()
            .map(|entry| StepStateDto {
                step: entry.step,
                path: entry.path.to_string(),
                label: entry.label.to_string(),
                is_done: progress.is_step_done(entry.step),
            })
            .collect();

        OnboardingStateDto {
            is_authenticated: state.session.is_authenticated(),
            username: state.session.username().map(str::to_string),
            is_onboarding_complete: progress.is_onboarding_complete(),
            current_step,
            current_step_path: current_step.onboarding_path(),
            steps,
            stepper: stepper(current_step),
            progress,
        }
    }
}

use std::sync::Arc;

use ob_core::onboarding::{OnboardingStep, StepForm, ValidationContext, ValidationErrors};
use ob_core::ports::ClockPort;
use ob_core::routing::{resolve, Resolution, RoutingError};
use tracing::{info, info_span, Instrument};

use super::{ensure_step_reachable, StepNotReachable};
use crate::store::AppStore;

#[derive(Debug, thiserror::Error)]
pub enum SubmitStepError {
    #[error(transparent)]
    NotReachable(#[from] StepNotReachable),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Use case for submitting a data-collecting step.
///
/// Valid values are sanitized, stored and the step is marked done; the
/// result is the navigation to the following step. Invalid values change
/// nothing.
pub struct SubmitStep {
    store: AppStore,
    clock: Arc<dyn ClockPort>,
}

impl SubmitStep {
    pub fn new(store: AppStore, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    /// Convenience constructor for the UseCases accessor pattern.
    pub fn from_ports(store: AppStore, clock: Arc<dyn ClockPort>) -> Self {
        Self::new(store, clock)
    }

    pub async fn execute<F>(&self, form: F) -> Result<Resolution, SubmitStepError>
    where
        F: StepForm + Send,
    {
        let span = info_span!("usecase.onboarding.submit_step", step = %F::STEP);
        async {
            let ctx = ValidationContext::from_millis(self.clock.now_ms());
            let errors = form.validate(&ctx);
            let action = form.into_submit_action();

            // Reachability is checked against the state the action applies to.
            let result = self
                .store
                .dispatch_if(action, |state| -> Result<(), SubmitStepError> {
                    ensure_step_reachable(state, F::STEP)?;
                    errors.into_result()?;
                    Ok(())
                })
                .await;
            let state = match result {
                Ok(state) => state,
                Err(SubmitStepError::Validation(errors)) => {
                    info!(errors = errors.len(), "step submission rejected");
                    return Err(SubmitStepError::Validation(errors));
                }
                Err(err) => return Err(err),
            };

            let next = F::STEP.next().unwrap_or(OnboardingStep::Success);
            let resolution = resolve(&state.session, &state.progress, &next.onboarding_path())?;
            info!(location = %resolution.location, "step submitted");
            Ok(resolution)
        }
        .instrument(span)
        .await
    }
}

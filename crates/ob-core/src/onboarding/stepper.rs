//! Stepper projection shown above every onboarding page.

use serde::{Deserialize, Serialize};

use super::step::{OnboardingStep, ONBOARDING_STEPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepIndicator {
    pub step: OnboardingStep,
    /// 1-based position shown in the step circle.
    pub number: usize,
    pub label: String,
    pub status: StepStatus,
}

/// Status of every registry step relative to `current`.
pub fn stepper(current: OnboardingStep) -> Vec<StepIndicator> {
    let current_index = current.index();
    ONBOARDING_STEPS
        .iter()
        .enumerate()
        .map(|(index, entry)| StepIndicator {
            step: entry.step,
            number: index + 1,
            label: entry.label.to_string(),
            status: match index.cmp(&current_index) {
                std::cmp::Ordering::Less => StepStatus::Completed,
                std::cmp::Ordering::Equal => StepStatus::Current,
                std::cmp::Ordering::Greater => StepStatus::Upcoming,
            },
        })
        .collect()
}

//! Step registry.
//!
//! The onboarding sequence is a compile-time constant. Every lookup here is a
//! pure function over [`ONBOARDING_STEPS`].

use serde::{Deserialize, Serialize};

/// Onboarding steps in registry order.
///
/// 入门引导步骤（按顺序）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStep {
    Profile,
    FavoriteSongs,
    PaymentInfo,
    Success,
}

/// Registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub step: OnboardingStep,
    pub path: &'static str,
    pub label: &'static str,
}

pub const ONBOARDING_STEPS: [Step; 4] = [
    Step {
        step: OnboardingStep::Profile,
        path: "profile",
        label: "Profile",
    },
    Step {
        step: OnboardingStep::FavoriteSongs,
        path: "favorite-songs",
        label: "Favorite Songs",
    },
    Step {
        step: OnboardingStep::PaymentInfo,
        path: "payment-info",
        label: "Payment",
    },
    Step {
        step: OnboardingStep::Success,
        path: "success",
        label: "Success",
    },
];

/// Prefix of the onboarding sub-tree.
pub const ONBOARDING_ROOT: &str = "/onboarding";

impl OnboardingStep {
    /// Position in the registry.
    pub fn index(self) -> usize {
        match self {
            Self::Profile => 0,
            Self::FavoriteSongs => 1,
            Self::PaymentInfo => 2,
            Self::Success => 3,
        }
    }

    pub fn entry(self) -> &'static Step {
        &ONBOARDING_STEPS[self.index()]
    }

    pub fn path(self) -> &'static str {
        self.entry().path
    }

    pub fn label(self) -> &'static str {
        self.entry().label
    }

    /// Absolute route of this step, e.g. `/onboarding/profile`.
    pub fn onboarding_path(self) -> String {
        format!("{}/{}", ONBOARDING_ROOT, self.path())
    }

    pub fn from_path(path: &str) -> Option<Self> {
        step_by_path(path).map(|entry| entry.step)
    }

    /// Following step in registry order; `Success` is terminal.
    pub fn next(self) -> Option<Self> {
        ONBOARDING_STEPS.get(self.index() + 1).map(|entry| entry.step)
    }

    /// Whether this step collects user data (everything but the terminal step).
    pub fn collects_data(self) -> bool {
        self != Self::Success
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Index of the step registered under `path`, `None` when unknown.
pub fn step_index(path: &str) -> Option<usize> {
    ONBOARDING_STEPS.iter().position(|entry| entry.path == path)
}

pub fn step_by_path(path: &str) -> Option<&'static Step> {
    ONBOARDING_STEPS.iter().find(|entry| entry.path == path)
}

/// Path of the lowest-index step.
pub fn first_step_path() -> &'static str {
    ONBOARDING_STEPS[0].path
}

pub fn all_step_paths() -> Vec<&'static str> {
    ONBOARDING_STEPS.iter().map(|entry| entry.path).collect()
}

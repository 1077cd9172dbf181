//! Logical route surface.

use crate::onboarding::step::{step_by_path, OnboardingStep, ONBOARDING_ROOT};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// A parsed request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    /// `/onboarding` without a step.
    OnboardingIndex,
    OnboardingStep(OnboardingStep),
    /// Something under `/onboarding/` that is not a registered step.
    OnboardingUnknown(String),
    /// Any other top-level path.
    Unknown(String),
}

impl Route {
    /// Parses a request path. Query strings, fragments, repeated and
    /// trailing slashes are ignored; a missing leading slash is tolerated.
    pub fn parse(path: &str) -> Self {
        let normalized = normalize(path);
        if normalized == HOME_PATH {
            return Self::Home;
        }
        if normalized == LOGIN_PATH {
            return Self::Login;
        }
        if normalized == ONBOARDING_ROOT {
            return Self::OnboardingIndex;
        }
        if let Some(rest) = normalized
            .strip_prefix(ONBOARDING_ROOT)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            return match step_by_path(rest) {
                Some(entry) => Self::OnboardingStep(entry.step),
                None => Self::OnboardingUnknown(rest.to_string()),
            };
        }
        Self::Unknown(normalized)
    }

    /// Whether the route lies under the onboarding sub-tree.
    pub fn is_onboarding(&self) -> bool {
        matches!(
            self,
            Self::OnboardingIndex | Self::OnboardingStep(_) | Self::OnboardingUnknown(_)
        )
    }

    /// Canonical path of the route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => HOME_PATH.to_string(),
            Self::Login => LOGIN_PATH.to_string(),
            Self::OnboardingIndex => ONBOARDING_ROOT.to_string(),
            Self::OnboardingStep(step) => step.onboarding_path(),
            Self::OnboardingUnknown(rest) => format!("{ONBOARDING_ROOT}/{rest}"),
            Self::Unknown(path) => path.clone(),
        }
    }
}

fn normalize(path: &str) -> String {
    let path = path.trim();
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

//! Guard decisions.
//!
//! Two independent questions are asked: "may this user see the protected area
//! at all" (top-level guard, authentication) and "may this user see this step"
//! (per-step guard, progress ordering). They have different redirect targets.

use serde::{Deserialize, Serialize};

use super::route::{Route, HOME_PATH, LOGIN_PATH};
use crate::auth::Session;
use crate::onboarding::OnboardingProgress;

/// Outcome of a guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "to", rename_all = "snake_case")]
pub enum RouteDecision {
    Allow,
    Redirect(String),
}

impl RouteDecision {
    pub fn redirect(path: impl Into<String>) -> Self {
        Self::Redirect(path.into())
    }
}

fn current_step_path(progress: &OnboardingProgress) -> String {
    progress.first_incomplete_step().onboarding_path()
}

/// Guard of the home route and everything below it, onboarding included.
pub fn top_level_guard(
    session: &Session,
    progress: &OnboardingProgress,
    route: &Route,
) -> RouteDecision {
    if !session.is_authenticated() {
        return RouteDecision::redirect(LOGIN_PATH);
    }
    if !progress.is_onboarding_complete() && !route.is_onboarding() {
        return RouteDecision::Redirect(current_step_path(progress));
    }
    RouteDecision::Allow
}

/// Guard of the onboarding sub-tree.
///
/// Steps up to and including the first incomplete one are reachable; later
/// steps, the index route and unknown steps redirect to the first incomplete
/// step.
pub fn step_guard(progress: &OnboardingProgress, route: &Route) -> RouteDecision {
    let target = progress.first_incomplete_step();
    match route {
        Route::OnboardingStep(requested) if requested.index() <= target.index() => {
            RouteDecision::Allow
        }
        _ => RouteDecision::Redirect(target.onboarding_path()),
    }
}

/// Login page counterpart: an authenticated user is sent forward.
pub fn login_guard(session: &Session, progress: &OnboardingProgress) -> RouteDecision {
    if !session.is_authenticated() {
        return RouteDecision::Allow;
    }
    if progress.is_onboarding_complete() {
        RouteDecision::redirect(HOME_PATH)
    } else {
        RouteDecision::Redirect(current_step_path(progress))
    }
}

/// Single decision for a parsed route.
pub fn decide(session: &Session, progress: &OnboardingProgress, route: &Route) -> RouteDecision {
    match route {
        Route::Login => login_guard(session, progress),
        Route::Unknown(_) => RouteDecision::redirect(HOME_PATH),
        _ => match top_level_guard(session, progress, route) {
            RouteDecision::Allow if route.is_onboarding() => step_guard(progress, route),
            decision => decision,
        },
    }
}

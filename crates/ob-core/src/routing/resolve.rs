//! Redirect resolution.

use serde::{Deserialize, Serialize};

use super::guard::{decide, RouteDecision};
use super::route::Route;
use crate::auth::Session;
use crate::onboarding::{stepper, OnboardingProgress, OnboardingStep, StepIndicator};

/// Upper bound on followed redirects. Well-formed state settles in at most three.
pub const MAX_REDIRECTS: usize = 8;

/// Page rendered at the end of a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", content = "step", rename_all = "snake_case")]
pub enum View {
    Login,
    Home,
    Onboarding(OnboardingStep),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    #[error("too many redirects while resolving {requested} (last: {last})")]
    TooManyRedirects { requested: String, last: String },
    #[error("route {0} was allowed but has no view")]
    NoView(String),
}

/// Where a navigation ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub requested: String,
    pub location: String,
    /// Every redirect target, in order.
    pub redirects: Vec<String>,
    pub view: View,
    /// Stepper for the rendered onboarding page, relative to that page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stepper: Option<Vec<StepIndicator>>,
}

impl Resolution {
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

fn view_for(route: &Route) -> Option<View> {
    match route {
        Route::Home => Some(View::Home),
        Route::Login => Some(View::Login),
        Route::OnboardingStep(step) => Some(View::Onboarding(*step)),
        _ => None,
    }
}

/// Follows guard redirects from `path` until a route renders.
pub fn resolve(
    session: &Session,
    progress: &OnboardingProgress,
    path: &str,
) -> Result<Resolution, RoutingError> {
    let mut route = Route::parse(path);
    let mut redirects = Vec::new();

    loop {
        match decide(session, progress, &route) {
            RouteDecision::Allow => {
                let location = route.path();
                let view = view_for(&route).ok_or_else(|| RoutingError::NoView(location.clone()))?;
                let stepper = match view {
                    View::Onboarding(step) => Some(stepper(step)),
                    View::Login | View::Home => None,
                };
                return Ok(Resolution {
                    requested: path.to_string(),
                    location,
                    redirects,
                    view,
                    stepper,
                });
            }
            RouteDecision::Redirect(target) => {
                if redirects.len() >= MAX_REDIRECTS {
                    return Err(RoutingError::TooManyRedirects {
                        requested: path.to_string(),
                        last: target,
                    });
                }
                route = Route::parse(&target);
                redirects.push(target);
            }
        }
    }
}

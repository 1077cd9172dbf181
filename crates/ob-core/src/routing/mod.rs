//! Route guard protocol.
//!
//! Pure decision functions over `(Session, OnboardingProgress, path)`. The
//! command layer only forwards the requested path and renders whatever view
//! the resolution ends on.

pub mod guard;
pub mod resolve;
pub mod route;

pub use guard::{decide, login_guard, step_guard, top_level_guard, RouteDecision};
pub use resolve::{resolve, Resolution, RoutingError, View, MAX_REDIRECTS};
pub use route::{Route, HOME_PATH, LOGIN_PATH};

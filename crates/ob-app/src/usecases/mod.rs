//! Business logic use cases
//!
//! Each use case is a small struct wired from the store and ports, with a
//! single `execute` entry point.

pub mod auth;
pub mod navigation;
pub mod onboarding;

pub use auth::{Login, LoginError, Logout};
pub use navigation::NavigateTo;
pub use onboarding::{
    CompleteOnboarding, CompleteOnboardingError, CompletionOutcome, GetOnboardingState,
    OnboardingStateDto, SaveDraft, StepNotReachable, SubmitStep, SubmitStepError,
};

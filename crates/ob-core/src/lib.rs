//! # ob-core
//!
//! Core domain models and business logic for the onboarding wizard.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod auth;
pub mod config;
pub mod onboarding;
pub mod ports;
pub mod routing;
pub mod store;

// Re-export commonly used types at the crate root
pub use auth::{AuthError, Credentials, Session};
pub use config::AppConfig;
pub use onboarding::{OnboardingProgress, OnboardingStep, StepProgress};
pub use routing::{RouteDecision, View};
pub use store::{AppState, StateAction};

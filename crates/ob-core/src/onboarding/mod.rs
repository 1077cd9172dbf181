//! Onboarding domain models
//!
//! This module defines the core domain models for the onboarding flow:
//! the static step registry, the per-step progress record, the field
//! validation rules of each step form and the stepper projection.

pub mod form;
pub mod progress;
pub mod step;
pub mod stepper;

pub use form::{
    FavoriteSongsForm, FieldError, PaymentInfoForm, ProfileForm, ProfilePatch, SongEntry,
    StepForm, ValidationContext, ValidationErrors,
};
pub use progress::{
    FavoriteSong, FavoriteSongs, OnboardingProgress, PaymentData, ProfileData, StepProgress,
};
pub use step::{
    all_step_paths, first_step_path, step_by_path, step_index, OnboardingStep, Step,
    ONBOARDING_STEPS,
};
pub use stepper::{stepper, StepIndicator, StepStatus};

//! Command error mapping
//!
//! Every use-case error is turned into one serializable [`CommandError`]
//! before it reaches the wire.

use ob_app::usecases::{
    CompleteOnboardingError, LoginError, StepNotReachable, SubmitStepError,
};
use ob_core::onboarding::ValidationErrors;
use ob_core::routing::RoutingError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandErrorKind {
    BadRequest,
    InvalidCredentials,
    Validation,
    NotReachable,
    Routing,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandError {
    pub kind: CommandErrorKind,
    pub message: String,
    /// Field errors shown next to the inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<ValidationErrors>,
    /// Where the UI should go instead, when the request targeted a page the
    /// user may not see.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl CommandError {
    fn new(kind: CommandErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            fields: None,
            redirect: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(CommandErrorKind::BadRequest, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(CommandErrorKind::Internal, message)
    }
}

impl From<ValidationErrors> for CommandError {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            fields: Some(errors.clone()),
            ..Self::new(CommandErrorKind::Validation, errors.to_string())
        }
    }
}

impl From<StepNotReachable> for CommandError {
    fn from(err: StepNotReachable) -> Self {
        Self {
            redirect: Some(err.redirect.clone()),
            ..Self::new(CommandErrorKind::NotReachable, err.to_string())
        }
    }
}

impl From<RoutingError> for CommandError {
    fn from(err: RoutingError) -> Self {
        Self::new(CommandErrorKind::Routing, err.to_string())
    }
}

impl From<LoginError> for CommandError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::InvalidCredentials(auth) => {
                let mut fields = ValidationErrors::new();
                fields.push("password", "Invalid username or password");
                Self {
                    fields: Some(fields),
                    ..Self::new(CommandErrorKind::InvalidCredentials, auth.to_string())
                }
            }
            LoginError::Routing(err) => err.into(),
        }
    }
}

impl From<SubmitStepError> for CommandError {
    fn from(err: SubmitStepError) -> Self {
        match err {
            SubmitStepError::NotReachable(err) => err.into(),
            SubmitStepError::Validation(errors) => errors.into(),
            SubmitStepError::Routing(err) => err.into(),
        }
    }
}

impl From<CompleteOnboardingError> for CommandError {
    fn from(err: CompleteOnboardingError) -> Self {
        match err {
            CompleteOnboardingError::NotReachable(err) => err.into(),
            CompleteOnboardingError::Routing(err) => err.into(),
        }
    }
}

use ob_core::auth::{AuthError, CredentialValidator};
use ob_core::routing::{resolve, Resolution, RoutingError, LOGIN_PATH};
use ob_core::store::StateAction;
use tracing::{info, info_span, warn, Instrument};

use crate::store::AppStore;

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    InvalidCredentials(#[from] AuthError),
    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Use case for logging in with the reference credentials.
///
/// A rejected attempt leaves the session untouched.
pub struct Login {
    store: AppStore,
    validator: CredentialValidator,
}

impl Login {
    pub fn new(store: AppStore, validator: CredentialValidator) -> Self {
        Self { store, validator }
    }

    /// Returns where the login page forwards the new session to.
    pub async fn execute(&self, username: &str, password: &str) -> Result<Resolution, LoginError> {
        let span = info_span!("usecase.auth.login", username = %username);
        async {
            let username = match self.validator.verify(username, password) {
                Ok(username) => username,
                Err(err) => {
                    warn!("login rejected");
                    return Err(err.into());
                }
            };

            let state = self.store.dispatch(StateAction::Login { username }).await;
            let resolution = resolve(&state.session, &state.progress, LOGIN_PATH)?;
            info!(location = %resolution.location, "login accepted");
            Ok(resolution)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::memory_store;
    use ob_core::auth::Credentials;
    use ob_core::routing::View;
    use ob_core::OnboardingStep;

    #[tokio::test]
    async fn test_correct_credentials_land_on_first_step() {
        let store = memory_store().await;
        let login = Login::new(store.clone(), CredentialValidator::default());

        let resolution = login.execute("admin", "password123").await.unwrap();

        assert_eq!(resolution.location, "/onboarding/profile");
        assert_eq!(resolution.view, View::Onboarding(OnboardingStep::Profile));
        assert_eq!(store.session().await.username(), Some("admin"));
    }

    #[tokio::test]
    async fn test_wrong_password_leaves_session_untouched() {
        let store = memory_store().await;
        let login = Login::new(store.clone(), CredentialValidator::default());

        let err = login.execute("admin", "wrong").await.unwrap_err();

        assert!(matches!(
            err,
            LoginError::InvalidCredentials(AuthError::InvalidCredentials)
        ));
        assert!(!store.session().await.is_authenticated());
    }

    #[tokio::test]
    async fn test_configured_credentials_replace_defaults() {
        let store = memory_store().await;
        let login = Login::new(
            store.clone(),
            CredentialValidator::new(Credentials::new("root", "hunter2")),
        );

        assert!(login.execute("admin", "password123").await.is_err());
        assert!(login.execute("root", "hunter2").await.is_ok());
    }
}

//! Fixed-credential check.
//!
//! There is no account backend: a login succeeds only when the submitted pair
//! equals the single reference pair configured for the application.

use subtle::ConstantTimeEq;

/// Default reference username.
pub const DEFAULT_USERNAME: &str = "admin";
/// Default reference password.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Authentication errors.
///
/// 认证错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// A username/password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Compares submitted credentials against the reference pair.
#[derive(Debug, Clone, Default)]
pub struct CredentialValidator {
    reference: Credentials,
}

impl CredentialValidator {
    pub fn new(reference: Credentials) -> Self {
        Self { reference }
    }

    /// Returns the accepted username on success.
    ///
    /// Both fields are always compared so the outcome does not leak which one
    /// was wrong.
    pub fn verify(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let username_ok = username
            .as_bytes()
            .ct_eq(self.reference.username.as_bytes());
        let password_ok = password
            .as_bytes()
            .ct_eq(self.reference.password.as_bytes());

        if bool::from(username_ok & password_ok) {
            Ok(username.to_string())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

//! Authentication domain module.
//!
//! Session state and the fixed-credential check used by the login action.

pub mod credentials;
pub mod session;

pub use credentials::{
    AuthError, CredentialValidator, Credentials, DEFAULT_PASSWORD, DEFAULT_USERNAME,
};
pub use session::{Session, SessionRecord};

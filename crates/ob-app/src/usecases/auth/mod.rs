//! Session use cases

pub mod login;
pub mod logout;

pub use login::{Login, LoginError};
pub use logout::Logout;

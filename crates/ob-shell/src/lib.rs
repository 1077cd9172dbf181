//! Command adapter for the onboarding wizard
//!
//! Reads one JSON request per line on stdin and answers with one JSON reply
//! per line on stdout. Logs go to stderr and, optionally, to a log file.

pub mod bootstrap;
pub mod commands;
pub mod protocol;

pub use bootstrap::{AppRuntime, UseCases};
pub use protocol::{ShellRequest, ShellResponse};

//! Onboarding wizard
//!
//! Route guards, step progress and session persistence for a four-step
//! onboarding flow, served over a line-delimited JSON protocol.

pub use ob_shell::bootstrap::tracing::init_tracing_subscriber;
pub use ob_shell::bootstrap::{
    config_path_from_env, resolve_config, run_stdio, wire_dependencies,
};
pub use ob_shell::AppRuntime;

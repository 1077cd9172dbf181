pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{config_path_from_env, load_config, resolve_config, CONFIG_ENV_VAR};
pub use run::{run_app, run_stdio};
pub use runtime::{AppRuntime, UseCases};
pub use wiring::{wire_dependencies, WiringError, WiringResult};

use anyhow::Context;
use onboard_wizard_lib::{
    config_path_from_env, init_tracing_subscriber, resolve_config, run_stdio, wire_dependencies,
    AppRuntime,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载 .env（可选）
    dotenvy::dotenv().ok();

    let config_path = config_path_from_env();
    let config = resolve_config(config_path.clone()).context("Failed to load configuration")?;
    init_tracing_subscriber(&config)?;

    match &config_path {
        Some(path) => info!(path = %path.display(), "Loaded config file"),
        None => info!("No config file set, using system defaults"),
    }
    info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = %config.storage_backend,
        "Starting onboarding wizard"
    );

    let deps = wire_dependencies(&config).context("Failed to wire dependencies")?;
    let runtime = AppRuntime::new(deps).await;

    run_stdio(&runtime).await
}

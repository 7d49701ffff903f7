use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use translation_relay::{build_app, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translation_relay=debug,tower_http=debug")),
        )
        .init();

    let (config, loaded_from) = Config::discover()?;
    match &loaded_from {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No configuration file found, using defaults"),
    }

    let app_state = AppState::new(config.clone())?;
    let dispatcher = &app_state.dispatcher;
    info!(
        "Completion provider: {} (model={}, configured={})",
        dispatcher.label(),
        dispatcher.settings().model,
        dispatcher.is_configured()
    );
    if !dispatcher.is_configured() {
        warn!(
            "Set {} to enable translations",
            config
                .llm_config
                .api_key_env_name(config.llm_config.provider_kind()?)
        );
    }

    let app = build_app(app_state);

    let system_config = &config.system_config;
    let listener =
        tokio::net::TcpListener::bind((system_config.host.as_str(), system_config.port)).await?;
    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

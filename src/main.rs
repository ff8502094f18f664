//! FluxNext API - Main Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::GovernorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fluxnext_api::infrastructure::driven_adapters::config::AppConfig;
use fluxnext_api::infrastructure::driving_adapters::api_rest::{assemble, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fluxnext_api=debug,tower_http=debug".into()),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;
    tracing::info!("Configuration loaded successfully");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let rate_limit = config.rate_limit.clone();

    // Seed repositories and wire use cases
    let app_state = AppState::from_config(config).context("invalid reference data")?;
    tracing::info!("Application state created");

    // Assemble route groups and apply the shared middleware stack
    let mut app = assemble()?.into_router(app_state);

    if rate_limit.enabled {
        let governor_config = GovernorConfigBuilder::default()
            .per_second(rate_limit.requests_per_second)
            .burst_size(rate_limit.burst_size)
            .finish()
            .context("invalid rate limit configuration")?;
        app = app.layer(GovernorLayer {
            config: Arc::new(governor_config),
        });
        tracing::info!(
            requests_per_second = rate_limit.requests_per_second,
            burst_size = rate_limit.burst_size,
            "Rate limiting enabled"
        );
    }

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}

//! Social login gateway
//!
//! Single-binary Rust service that:
//! 1. Renders one authorization link per provider at `/login`
//! 2. Receives the provider callback at `/oauth/{provider}/callback`
//! 3. Exchanges the authorization code for an access token
//! 4. Holds the session in the `user` cookie and renders the profile at `/`

mod config;
mod routes;
mod views;

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use social_oauth::ProviderRegistry;

use crate::config::Config;
use crate::routes::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and LOG_LEVEL / RUST_LOG support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("starting login-gateway");

    // CLI: simple --config flag parsing
    let args: Vec<String> = std::env::args().collect();
    let cli_config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str());

    let config_path = Config::resolve_path(cli_config_path);
    info!(path = %config_path.display(), "loading configuration");

    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    info!(
        listen_addr = %config.server.listen_addr,
        cookie_domain = %config.server.cookie_domain,
        "configuration loaded"
    );

    // Incomplete credentials fail here, before the listener binds.
    let registry = ProviderRegistry::from_configs(
        config.providers.google.to_provider_config(),
        config.providers.kakao.to_provider_config(),
        config.providers.naver.to_provider_config(),
    )
    .context("provider credentials incomplete")?;

    let state = AppState {
        registry: Arc::new(registry),
        http: reqwest::Client::new(),
        cookie_domain: config.server.cookie_domain.clone(),
    };

    let app = build_router(state);

    let listener = TcpListener::bind(config.server.listen_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.server.listen_addr))?;

    info!(addr = %config.server.listen_addr, "accepting requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

/// Wait for SIGTERM or SIGINT for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}

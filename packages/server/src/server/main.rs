// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::domains::catalog::{Catalog, FixtureSource, ListingSource};
use server_core::domains::engagement::EngagementStore;
use server_core::domains::trading::TradeSimulator;
use server_core::server::{build_app, AppState};
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Nebula Market API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Load the listing catalog
    let source = match &config.listings_fixture {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading listings fixture from disk");
            FixtureSource::from_path(path.clone())
        }
        None => FixtureSource::embedded(),
    };
    let listings = source.load().await.context("Failed to load listings")?;
    let catalog = Catalog::new(listings).context("Failed to build catalog")?;
    tracing::info!(listings = catalog.len(), "Catalog ready");

    // Build application
    let state = AppState {
        catalog: Arc::new(catalog),
        engagement: Arc::new(EngagementStore::new()),
        trades: Arc::new(TradeSimulator::new(config.settlement_delay())),
    };
    let app = build_app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}

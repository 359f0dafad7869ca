//! MAYA Search: JSON front end for a SearXNG instance
//!
//! This is the main entry point for the application.

use anyhow::Result;
use maya_search::{
    config,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    info!("Starting MAYA Search v{}", maya_search::VERSION);

    // Load configuration
    let settings = config::load()?;
    info!("Upstream aggregator: {}", settings.upstream.base_url);

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.upstream)?;
    info!("HTTP client initialized");

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    // Create application state
    let state = AppState::new(settings, client);
    info!("Application state initialized with {} engines", state.registry.len());

    // Create router
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

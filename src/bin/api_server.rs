// Page viewer server entry point
//
// Usage: cargo run --bin api_server
// Configuration: JSON_DIR, MENU_DATA, PORT, CONTENT_TRUST, STALE_POLICY

use page_viewer::{create_router, AppState, ViewerConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "page_viewer=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting page viewer...");

    let config = ViewerConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  JSON_DIR: {}", config.json_dir.display());
    tracing::info!(
        "  MENU_DATA: {}",
        config
            .menu_data
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(scan JSON_DIR)".to_string())
    );
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  CONTENT_TRUST: {:?}", config.trust);
    tracing::info!("  STALE_POLICY: {:?}", config.stale_policy);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // Load the page catalog
    let state = AppState::new(config)?;

    // Create router with all endpoints and middleware
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

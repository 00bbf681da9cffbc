//! CTRL-Z Storefront Server
//!
//! Axum-based static host for the WASM storefront. Files come from the
//! built front-end; client routes such as `/shop` fall back to `index.html`
//! so deep links and reloads work.
//!
//! The product API is external and is not served here.

mod handlers;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::{AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    if !config.static_dir.join("index.html").exists() {
        tracing::warn!("⚠ No index.html in {}", config.static_dir.display());
        tracing::warn!("  Build the front-end first: trunk build --release crates/ctrlz-web/index.html");
    }

    let addr = config.bind_addr.clone();
    let static_dir = config.static_dir.clone();
    let app = handlers::router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🛍  ctrlz-server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Serving {}", static_dir.display());
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health  - Health check");
    tracing::info!("  GET  /*       - Storefront (client routes fall back to index.html)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

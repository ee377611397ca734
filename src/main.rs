//! Trade API server
//!
//! Serves the read-only trade book over HTTP.

use anyhow::Result;
use chrono::Utc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trade_api::api::create_router;
use trade_api::config::ServerConfig;
use trade_api::store::TradeStore;
use trade_api::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .init();

    info!("╔══════════════════════════════════════════╗");
    info!("║        Trade API - Read-only Server      ║");
    info!("╚══════════════════════════════════════════╝");

    let config = ServerConfig::from_env()?;
    config.log_summary();

    let store = match &config.seed_path {
        Some(path) => TradeStore::from_json_file(path)?,
        None => TradeStore::seeded(Utc::now()),
    };
    info!("Trade store ready with {} trades", store.len());

    let state = std::sync::Arc::new(AppState::new(store));
    let app = create_router(state);

    let addr = config.socket_addr();
    info!("Starting API server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

//! Auction Expiry - auction service with time-driven closing
//!
//! Serves the auction API and runs the expiration scheduler until the
//! process receives a shutdown signal.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auction_expiry::api::{create_router, AppState};
use auction_expiry::config::Config;
use auction_expiry::store::InMemoryStore;
use auction_expiry::tasks::{ExpirationSweep, Scheduler};

/// Main entry point for the auction service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the store and the repository on top of it
/// 4. Start the expiration scheduler bound to a cancellation token
/// 5. Serve the HTTP API on the configured port
/// 6. On SIGINT/SIGTERM cancel the token and wait for the scheduler to stop
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auction_expiry=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting auction service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, auction_interval={}s",
        config.server_port, config.auction_interval
    );

    let state = AppState::from_store(Arc::new(InMemoryStore::new()));
    info!("Auction store initialized");

    let token = CancellationToken::new();
    let sweep = ExpirationSweep::with_stats(state.repository.clone(), state.stats.clone());
    let mut scheduler = Scheduler::from_config(sweep, &config);
    scheduler.start(token.clone());

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(token.clone()))
        .await;

    // Stop the scheduler even if the server exited on its own
    token.cancel();
    scheduler.join().await;
    served.context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM) and cancels `token`.
async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
        _ = token.cancelled() => {}
    }

    token.cancel();
}

//! Estate Listings - real-estate listings service
//!
//! Serves popular listings and keyword search over HTTP, backed by a TTL cache.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use estate_listings::api::create_router;
use estate_listings::listings::ListingsSeed;
use estate_listings::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the listings server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Load seed listings, if configured
/// 4. Create cache store and aggregation service
/// 5. Start background expired-entry sweep
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estate_listings=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Estate Listings server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: default_ttl={}s, popular_ttl={}s, port={}, cleanup_interval={}s",
        config.default_ttl, config.popular_ttl, config.server_port, config.cleanup_interval
    );

    let seed = match &config.seed_path {
        Some(path) => ListingsSeed::from_path(path)?,
        None => ListingsSeed::default(),
    };
    info!(
        "Loaded {} seed listings ({} properties, {} lands, {} projects)",
        seed.len(),
        seed.properties.len(),
        seed.lands.len(),
        seed.projects.len()
    );

    let state = AppState::from_config(&config, seed);
    let cleanup_handle = spawn_cleanup_task(state.cache.clone(), config.cleanup_interval);

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
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
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cache sweep task aborted");
    }
}

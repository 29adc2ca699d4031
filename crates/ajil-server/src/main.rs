//! Ajil's Oils site server entry point.
//!
//! Loads configuration, builds the form relay and shared state, then starts
//! the Axum HTTP server with graceful shutdown. A background worker evicts
//! idle visits and is cancelled on shutdown.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

use ajil_core::relay::HttpFormRelay;
use ajil_core::store::VisitStore;

use ajil_server::config::SiteConfig;
use ajil_server::routes;
use ajil_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment.
    let config = SiteConfig::from_env();

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(
        endpoint = %config.relay.endpoint,
        assets = %config.assets_dir.display(),
        "Ajil's Oils site starting"
    );

    let relay = HttpFormRelay::new(config.relay.clone()).context("failed to build form relay")?;
    let visits = VisitStore::bounded(config.max_visits);
    let state = Arc::new(AppState::new(visits, Arc::new(relay)));

    // Shutdown signal channel.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Spawn idle visit sweeper.
    let sweeper_handle = tokio::spawn(state.visits.clone().run_sweeper(
        config.visit_idle,
        config.visit_sweep_interval,
        shutdown_rx,
    ));

    let app = routes::app(Arc::clone(&state), &config.assets_dir);

    // Bind and serve.
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "site server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx))
        .await
        .context("server error")?;

    info!("waiting for background workers to stop");
    let _ = tokio::time::timeout(Duration::from_secs(10), sweeper_handle).await;

    info!("site server stopped");
    Ok(())
}

/// Wait for SIGINT or SIGTERM, then broadcast shutdown.
async fn shutdown_signal(shutdown_tx: watch::Sender<bool>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
    let _ = shutdown_tx.send(true);
}

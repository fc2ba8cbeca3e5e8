//! # IBANGen Worker
//!
//! A service generating syntactically valid bank-account-style identifiers
//! (IBANs) for a fixed registry of format profiles:
//!
//! - **Generation**: random numeric payloads laid out per profile, sealed
//!   with mod-97 check digits
//! - **Validation**: structural and checksum verification of candidate
//!   identifiers
//! - **Registry inspection**: the compiled-in profile table over HTTP
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                          Worker Service                            │
//! ├────────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌───────────┐ │
//! │  │  API Layer  │  │   Service   │  │   Profile   │  │  Domain   │ │
//! │  │  (Axum)     │→ │   Layer     │→ │   Registry  │  │  Models   │ │
//! │  └─────────────┘  └─────────────┘  └─────────────┘  └───────────┘ │
//! └────────────────────────────────────────────────────────────────────┘
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::create_router;
use crate::api::state::AppState;
use crate::config::AppConfig;

/// Run the IBANGen worker service.
///
/// This function:
/// 1. Loads configuration from files and environment
/// 2. Initializes logging and the metrics recorder
/// 3. Creates the generator service
/// 4. Starts the HTTP server
/// 5. Handles graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded
/// - The metrics recorder fails to install
/// - HTTP server fails to bind
pub async fn run() -> anyhow::Result<()> {
    // Pick up a local .env before reading configuration
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting IBANGen Worker"
    );

    // Install metrics recorder
    let metrics_handle = install_metrics(&config)?;

    // Create application state
    let state = AppState::new(Arc::new(config.clone()), metrics_handle);
    info!(
        profiles = domain::registry().len(),
        "Profile registry loaded"
    );

    // Create router
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(config.server.host, config.server.port);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize logging based on configuration.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.observability.log_format == "json" {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber.with(fmt::layer()).init();
    }
}

/// Install the Prometheus recorder when metrics are enabled.
fn install_metrics(config: &AppConfig) -> anyhow::Result<Option<PrometheusHandle>> {
    if !config.observability.metrics_enabled {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("failed to install Prometheus recorder")?;
    Ok(Some(handle))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
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
        () = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

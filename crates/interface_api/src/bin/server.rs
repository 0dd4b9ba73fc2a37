//! Fleet Admin - API Server Binary
//!
//! Starts the HTTP server for the fuel-card fleet admin.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (./fleet.db)
//! cargo run --bin fleet-admin
//!
//! # Run with environment variables
//! API_PORT=3000 DATABASE_URL=sqlite://data/fleet.db API_SEED_DEMO_DATA=true cargo run --bin fleet-admin
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_DATABASE_URL` / `DATABASE_URL` - SQLite database URL (default: sqlite://fleet.db)
//! * `API_MAX_CONNECTIONS` - Pool size (default: 5)
//! * `API_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! * `API_LOG_JSON` - Emit JSON log lines (default: false)
//! * `API_SEED_DEMO_DATA` - Seed demo clients and plates into an empty database

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use infra_db::{create_pool, migrate, seed_demo_data, DatabaseConfig, SqliteFleetAdapter};
use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API configuration")?;

    init_tracing(&config.log_level, config.log_json);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        database_url = %config.database_url,
        "Starting fleet admin server"
    );

    let pool = create_pool(
        DatabaseConfig::new(config.database_url.clone()).max_connections(config.max_connections),
    )
    .await
    .context("failed to open database")?;

    migrate(&pool).await.context("failed to run migrations")?;
    tracing::info!("Database ready");

    if config.seed_demo_data && seed_demo_data(&pool).await? {
        tracing::info!("Seeded demo clients and plates");
    }

    let app = create_router(Arc::new(SqliteFleetAdapter::new(pool)));

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Installs the global subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

/// Waits for Ctrl+C or SIGTERM so in-flight requests can finish.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

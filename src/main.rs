//! Account Service - Main Application Entry Point
//!
//! A REST microservice for creating, listing, reading, updating and deleting
//! customer accounts.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, or an in-memory store for local runs
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the account store (pool + table bootstrap for PostgreSQL)
//! 3. Build HTTP router with routes and middleware
//! 4. Serve on the configured port until Ctrl-C

mod config;
mod db;
mod error;
mod extract;
mod handlers;
mod models;
mod routes;
mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    config::{Config, StoreBackend},
    store::{MemoryAccountStore, PgAccountStore, SharedStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let store = build_store(&config).await?;

    let app = routes::router(store);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Construct the account store selected by `ACCOUNT_STORE`.
async fn build_store(config: &Config) -> anyhow::Result<SharedStore> {
    match config.account_store {
        StoreBackend::Postgres => {
            let pool = db::create_pool(config.database_url()?, config.db_max_connections).await?;
            tracing::info!("Database pool created");

            db::init_schema(&pool).await?;
            tracing::info!("Accounts table ready");

            Ok(Arc::new(PgAccountStore::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory account store; data is lost on restart");
            Ok(Arc::new(MemoryAccountStore::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

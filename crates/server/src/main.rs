//! Countertill Server - Multi-tenant inventory/point-of-sale backend.
//!
//! This binary serves the JSON API on port 5000 by default.
//!
//! # Architecture
//!
//! - Axum web framework, JSON in and out, permissive CORS
//! - Flat-file JSON document store (full rewrite on every mutation)
//! - First-run seed with two admin accounts and sample data
//!
//! Maintenance of the store file (flush, delete) lives in `ct-cli`, never in
//! this process.

#![cfg_attr(not(test), forbid(unsafe_code))]

use countertill_server::config::ServerConfig;
use countertill_server::state::AppState;
use countertill_server::store::Store;
use countertill_server::{app, seed};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "countertill_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Open the store file and load all collections into memory
    let store = Store::open(&config.db_path).expect("Failed to open store file");
    tracing::info!(path = %config.db_path.display(), "Store opened");

    // Seed runs once, before any request is served; a non-empty admins
    // collection makes it a no-op
    seed::run(&store).expect("Failed to seed store");

    // Build application state and router
    let state = AppState::new(config.clone(), store);
    let app = app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("countertill listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

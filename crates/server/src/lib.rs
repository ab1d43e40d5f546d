//! Countertill Server library.
//!
//! This crate provides the point-of-sale backend as a library, allowing the
//! router to be tested in-process and reused by the maintenance CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
///
/// Cross-origin requests are permitted from any origin, matching the open
/// API surface this service exposes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the store file.
async fn health() -> &'static str {
    "ok"
}

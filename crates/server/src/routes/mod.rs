//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                       - Liveness check
//!
//! # Auth
//! POST /api/login                    - Verify credentials, return adminId
//!
//! # Products
//! GET  /api/products/{adminId}       - List one admin's catalog
//! POST /api/products/{adminId}       - Replace one admin's whole catalog
//!
//! # Transactions
//! GET  /api/transactions/{adminId}   - List one admin's transactions
//! POST /api/transactions/{adminId}   - Record a sale (append-only)
//! ```
//!
//! No authorization ties the `{adminId}` path parameter to a prior login;
//! any caller who knows an admin ID may read or replace that tenant's data.
//! This matches the original surface and is documented in DESIGN.md.

pub mod auth;
pub mod products;
pub mod transactions;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(auth::login))
        .route(
            "/api/products/{admin_id}",
            get(products::list).post(products::replace),
        )
        .route(
            "/api/transactions/{admin_id}",
            get(transactions::list).post(transactions::record),
        )
}

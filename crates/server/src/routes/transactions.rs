//! Transaction route handlers.
//!
//! Transactions are append-only: recording always inserts a new record, and
//! `items` is a snapshot of the sold products, so later catalog edits never
//! change a stored transaction.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use countertill_core::{AdminId, Transaction};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List every transaction belonging to the admin, in stored order, as a bare
/// array. An unknown admin ID yields an empty array, not a 404.
pub async fn list(
    State(state): State<AppState>,
    Path(admin_id): Path<String>,
) -> Result<Json<Vec<Transaction>>> {
    let admin_id = AdminId::new(admin_id);
    tracing::debug!(admin_id = %admin_id, "Fetching transactions");

    let transactions = state.store().transactions().find_all_for_admin(&admin_id);
    Ok(Json(transactions))
}

/// Record a sale. Responds 201 with the stored transaction.
///
/// The `adminId` path parameter is stamped onto the record, overwriting any
/// client-supplied value.
///
/// # Errors
///
/// Returns 400 on an empty, absent, or malformed body, 500 on a store
/// failure.
pub async fn record(
    State(state): State<AppState>,
    Path(admin_id): Path<String>,
    body: std::result::Result<Json<Transaction>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>)> {
    let Json(mut transaction) =
        body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let admin_id = AdminId::new(admin_id);

    tracing::debug!(admin_id = %admin_id, id = %transaction.id, "Adding transaction");
    transaction.admin_id = admin_id;

    state.store().transactions().insert(transaction.clone())?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

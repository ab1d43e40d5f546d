//! Product catalog route handlers.
//!
//! The unit of mutation is an admin's whole catalog: replace deletes every
//! existing product for the admin, then inserts the posted list. The two
//! store operations persist independently, so concurrent replaces for the
//! same admin race last-writer-wins, as in the original design.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use countertill_core::{AdminId, Product};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Replace request body.
#[derive(Debug, Deserialize)]
pub struct ReplaceProductsRequest {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Product listing response.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
}

/// Replace confirmation response.
#[derive(Debug, Serialize)]
pub struct ReplaceProductsResponse {
    pub message: String,
}

/// List every product belonging to the admin. An unknown admin ID yields an
/// empty list, not a 404.
pub async fn list(
    State(state): State<AppState>,
    Path(admin_id): Path<String>,
) -> Result<Json<ProductListResponse>> {
    let admin_id = AdminId::new(admin_id);
    tracing::debug!(admin_id = %admin_id, "Fetching products");

    let products = state.store().products().find_all_for_admin(&admin_id);
    Ok(Json(ProductListResponse { products }))
}

/// Replace the admin's whole catalog with the posted list.
///
/// The `adminId` path parameter is stamped onto every product, overwriting
/// any client-supplied value.
///
/// # Errors
///
/// Returns 400 on a malformed body, 500 on a store failure.
pub async fn replace(
    State(state): State<AppState>,
    Path(admin_id): Path<String>,
    body: std::result::Result<Json<ReplaceProductsRequest>, JsonRejection>,
) -> Result<Json<ReplaceProductsResponse>> {
    let Json(request) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let admin_id = AdminId::new(admin_id);

    let removed = state.store().products().delete_for_admin(&admin_id)?;
    tracing::debug!(admin_id = %admin_id, removed, "Cleared existing products");

    let products: Vec<Product> = request
        .products
        .into_iter()
        .map(|mut product| {
            product.admin_id = admin_id.clone();
            product
        })
        .collect();
    state.store().products().insert_many(products)?;

    tracing::debug!(admin_id = %admin_id, "Products updated");
    Ok(Json(ReplaceProductsResponse {
        message: "Products updated successfully".to_string(),
    }))
}

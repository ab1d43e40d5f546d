//! Login route handler.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use countertill_core::AdminId;

use crate::error::{AppError, Result};
use crate::services::auth;
use crate::state::AppState;

/// Login request body. Both fields must be present and non-empty.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login response. Returns an identifier, not a credential.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub admin_id: AdminId,
}

/// Verify a username/password pair.
///
/// # Errors
///
/// Returns 400 when either field is missing or empty, 401 when the username
/// is unknown or the password does not match (identical responses for both).
pub async fn login(
    State(state): State<AppState>,
    body: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(request) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let (Some(username), Some(password)) = (
        request.username.filter(|u| !u.is_empty()),
        request.password.filter(|p| !p.is_empty()),
    ) else {
        tracing::warn!("Login attempt with missing username or password");
        return Err(AppError::Validation(
            "Username and password are required".to_string(),
        ));
    };

    let admin = auth::login(state.store(), &username, &password).inspect_err(|_| {
        tracing::warn!(username, "Invalid login attempt");
    })?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        admin_id: admin.admin_id,
    }))
}

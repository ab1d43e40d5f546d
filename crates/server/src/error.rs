//! Unified error handling for route handlers.
//!
//! Provides a unified `AppError` type mapping each failure class to a status
//! code and a JSON `{"error": ...}` body. All route handlers return
//! `Result<T, AppError>`; no error propagates past a handler boundary.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::auth::AuthError;
use crate::store::StoreError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Authentication failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Missing or malformed required input.
    #[error("validation error: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Internal failures are logged server-side; the client only sees a
        // generic message.
        if matches!(self, Self::Store(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        };

        let message = match &self {
            Self::Store(_) => "An internal error occurred".to_string(),
            // Identical body for unknown user and wrong password, to avoid
            // user enumeration.
            Self::Auth(_) => "Invalid username or password".to_string(),
            Self::Validation(msg) => msg.clone(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::Validation("missing field".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Store(StoreError::Io(std::io::Error::other(
                "disk gone"
            )))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Validation("invalid input".to_string());
        assert_eq!(err.to_string(), "validation error: invalid input");
    }
}

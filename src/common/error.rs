// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::{ValidationError, ValidationResult};

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request input; surfaced as 400 with the full field-error list.
    Validation(Vec<ValidationError>),
    /// Zero-row result for a targeted id; carries the resource-specific message.
    NotFound(&'static str),
    /// Persistence failure; logged server-side, surfaced as a generic 500.
    Database(sqlx::Error),
}

impl ApiError {
    /// Single-field validation failure.
    pub fn validation(path: &str, message: &str) -> Self {
        ApiError::Validation(vec![ValidationError {
            path: path.to_string(),
            message: message.to_string(),
        }])
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(errors) => {
                write!(f, "Validation Error: {} invalid field(s)", errors.len())
            }
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::Database(e) => write!(f, "Database Error: {}", e),
        }
    }
}

/// JSON body for not-found and internal failures
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse {
                    message: message.to_string(),
                }),
            )
                .into_response(),
            ApiError::Database(e) => {
                error!(error = %e, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse {
                        message: "Internal Server Error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        ApiError::Validation(result.errors)
    }
}

//! Error types for Libris server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body: one message per violated field constraint,
/// exactly one message for business-rule failures.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            AppError::Validation(messages) => (StatusCode::BAD_REQUEST, messages),
            AppError::BusinessRule(msg) => (StatusCode::BAD_REQUEST, vec![msg]),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, vec![msg]),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, vec![msg]),
            AppError::InvalidArgument(msg) => {
                // Precondition failure: handlers are expected to have resolved
                // the entity before calling delete/update.
                tracing::error!("Invalid argument: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, vec![msg])
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Database error".to_string()],
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Internal server error".to_string()],
                )
            }
        };

        let body = Json(ErrorResponse { errors });

        (status, body).into_response()
    }
}

impl AppError {
    /// Flatten field-level validation failures into one message per violation.
    pub fn from_validation(errors: validator::ValidationErrors) -> Self {
        let mut messages = Vec::new();
        for (field, violations) in errors.field_errors() {
            for violation in violations {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                messages.push(message);
            }
        }
        AppError::Validation(messages)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

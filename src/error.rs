use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::response::ErrorResponse;

/// Crate-level error type. Every variant maps to a 4xx/5xx JSON response
/// with an {"error": "..."} body.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or out-of-range input
    #[error("{0}")]
    Validation(String),

    /// Submission outside the allowed wall-clock window
    #[error("{0}")]
    Window(String),

    /// Target slot already holds a value
    #[error("{0}")]
    Conflict(String),

    /// No matching record
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid username or password!")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation(_) | AppError::Window(_) | AppError::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

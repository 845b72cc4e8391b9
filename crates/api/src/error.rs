use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use outlay_core::error::CoreError;
use serde_json::json;

/// Body of every 500 response. The underlying cause is logged server-side
/// and never leaks to the client.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{"error": ...}` JSON bodies
/// of the wire contract.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `outlay_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}

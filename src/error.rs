//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Client input**: malformed payloads (400) and wrong media types (415)
/// - **Resource state**: the referenced account or route does not exist (404)
/// - **Method**: the path exists but not for this HTTP method (405)
/// - **Store**: any sqlx::Error from database operations (500)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, constraint violation).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No account exists with the requested id.
    #[error("Account not found")]
    AccountNotFound,

    /// Request body is not a valid account payload.
    ///
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),

    /// Request body exceeds the configured body limit.
    #[error("Payload too large")]
    PayloadTooLarge(String),

    /// `Content-Type` header is missing or not the expected media type.
    #[error("Unsupported media type")]
    UnsupportedMediaType(String),

    /// The path exists but does not support the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No route matches the request path.
    #[error("Resource not found")]
    NotFound,
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request
/// - `AccountNotFound`, `NotFound` → 404 Not Found
/// - `MethodNotAllowed` → 405 Method Not Allowed
/// - `PayloadTooLarge` → 413 Payload Too Large
/// - `UnsupportedMediaType` → 415 Unsupported Media Type
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::AccountNotFound => {
                (StatusCode::NOT_FOUND, "account_not_found", self.to_string())
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::PayloadTooLarge(ref msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large", msg.clone())
            }
            AppError::UnsupportedMediaType(ref msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_media_type",
                msg.clone(),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method_not_allowed",
                self.to_string(),
            ),
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        let cases = [
            (AppError::AccountNotFound, StatusCode::NOT_FOUND),
            (AppError::NotFound, StatusCode::NOT_FOUND),
            (
                AppError::InvalidRequest("missing field `email`".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::UnsupportedMediaType("Content-Type must be application/json".into()),
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (AppError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED),
            (
                AppError::PayloadTooLarge("length limit exceeded".into()),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                AppError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[tokio::test]
    async fn database_details_are_not_leaked() {
        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["code"], "internal_error");
        assert_eq!(body["error"]["message"], "An internal error occurred");
    }
}

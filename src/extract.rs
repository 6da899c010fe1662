//! Request extractors with account-service error semantics.
//!
//! axum's stock `Json` and `Path` extractors accept `application/*+json`,
//! answer 422 for missing fields, and 400 for bad path segments. These
//! wrappers report failures as [`AppError`] instead.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::BytesRejection},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE, request::Parts},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// The only media type accepted for request bodies.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// JSON request body.
///
/// # Rejections
///
/// - 415 when `Content-Type` is not exactly `application/json`
/// - 413 when the body exceeds the request body limit
/// - 400 when the body is not a JSON object or does not match `T`
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(req.headers(), JSON_MEDIA_TYPE)?;

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(body_rejection)?;

        parse_object(&bytes).map(JsonBody)
    }
}

/// Reject requests whose `Content-Type` is not `media_type`.
pub fn check_content_type(headers: &HeaderMap, media_type: &str) -> Result<(), AppError> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|h| h.to_str().ok());
    if content_type == Some(media_type) {
        return Ok(());
    }

    tracing::error!(content_type = ?content_type, "Invalid Content-Type");
    Err(AppError::UnsupportedMediaType(format!(
        "Content-Type must be {media_type}"
    )))
}

fn body_rejection(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::error!("Request body exceeds the length limit");
        AppError::PayloadTooLarge(rejection.body_text())
    } else {
        AppError::InvalidRequest(rejection.body_text())
    }
}

fn parse_object<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let value: serde_json::Value = serde_json::from_slice(bytes).map_err(|err| {
        tracing::error!(error = %err, "Request body is not valid JSON");
        AppError::InvalidRequest(format!("Invalid JSON: {err}"))
    })?;

    if !value.is_object() {
        tracing::error!("Request body is not a JSON object");
        return Err(AppError::InvalidRequest(
            "Request body must be a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|err| {
        tracing::error!(error = %err, "Invalid account payload");
        AppError::InvalidRequest(format!("Invalid Account: {err}"))
    })
}

/// Integer account id taken from the `{id}` path segment.
///
/// A segment that is not an integer cannot name an account, so it is
/// reported as 404 rather than a malformed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountId(pub i32);

impl<S> FromRequestParts<S> for AccountId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::AccountNotFound)?;

        Ok(AccountId(id))
    }
}

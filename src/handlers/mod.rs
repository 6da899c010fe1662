//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Calls the account store
//! 3. Returns HTTP response (JSON, status code)

/// Account CRUD endpoints
pub mod accounts;
/// Health check and index endpoints
pub mod health;

use crate::error::AppError;

/// Fallback for paths that match no route.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

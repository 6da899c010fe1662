//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /accounts - Create new account
//! - GET /accounts - List all accounts
//! - GET /accounts/{id} - Get account by ID
//! - PUT /accounts/{id} - Update account by ID
//! - DELETE /accounts/{id} - Delete account by ID

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;

use crate::{
    error::AppError,
    extract::{AccountId, JsonBody},
    models::account::{Account, AccountPayload},
    store::SharedStore,
};

/// Create a new account.
///
/// # Endpoint
///
/// `POST /accounts`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "address": "1 Main St",
///   "phone_number": "555-0100",  // optional
///   "date_joined": "2025-01-15"  // optional, defaults to today
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the created account, `Location: /accounts/{id}`
/// - **Error (400)**: body is not an object or misses a required field
/// - **Error (415)**: `Content-Type` is not `application/json`
/// - **Error (500)**: Database error
pub async fn create_account(
    State(store): State<SharedStore>,
    JsonBody(payload): JsonBody<AccountPayload>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Request to create an Account");

    let account = store
        .create(payload.into_new_account(Utc::now().date_naive()))
        .await?;
    tracing::info!(id = account.id, "Account created");

    let location = format!("/accounts/{}", account.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(account),
    ))
}

/// List all accounts.
///
/// # Response
///
/// - **Success (200 OK)**: array of accounts in creation order, `[]` when empty
pub async fn list_accounts(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = store.all().await?;
    tracing::info!("returning {} accounts in list", accounts.len());

    Ok(Json(accounts))
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: account details
/// - **Error (404)**: no account with this id
pub async fn get_account(
    State(store): State<SharedStore>,
    AccountId(id): AccountId,
) -> Result<Json<Account>, AppError> {
    let account = store.find(id).await?.ok_or(AppError::AccountNotFound)?;

    Ok(Json(account))
}

/// Update an existing account.
///
/// The payload replaces every mutable field. The id in the URL wins over any
/// id in the body.
///
/// # Response
///
/// - **Success (200 OK)**: the updated account
/// - **Error (404)**: no account with this id, checked before the body
/// - **Error (400)**: invalid payload
/// - **Error (415)**: `Content-Type` is not `application/json`
pub async fn update_account(
    State(store): State<SharedStore>,
    AccountId(id): AccountId,
    body: Result<JsonBody<AccountPayload>, AppError>,
) -> Result<Json<Account>, AppError> {
    let payload = match body {
        Ok(JsonBody(payload)) => payload,
        Err(err) => {
            // A missing account outranks a bad body
            store.find(id).await?.ok_or(AppError::AccountNotFound)?;
            return Err(err);
        }
    };

    let account = store.update(id, payload).await?;
    tracing::info!(id = account.id, "Account updated");

    Ok(Json(account))
}

/// Delete an account.
///
/// # Response
///
/// - **Success (204 No Content)**: the account was removed
/// - **Error (404)**: no account with this id
pub async fn delete_account(
    State(store): State<SharedStore>,
    AccountId(id): AccountId,
) -> Result<StatusCode, AppError> {
    if !store.delete(id).await? {
        return Err(AppError::AccountNotFound);
    }
    tracing::info!(id, "Account deleted");

    Ok(StatusCode::NO_CONTENT)
}

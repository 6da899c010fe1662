//! Account record store.
//!
//! Handlers never talk to the database directly. They receive a
//! [`SharedStore`] through axum `State`, built once at startup from
//! configuration.
//!
//! Two implementations exist:
//! - [`PgAccountStore`]: PostgreSQL via sqlx, one transaction per operation
//! - [`MemoryAccountStore`]: in-process map, used for local runs and tests

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::account::{Account, AccountPayload, NewAccount},
};

mod memory;
mod postgres;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;

/// Store handle shared by every handler.
pub type SharedStore = Arc<dyn AccountStore>;

/// CRUD operations over persisted accounts.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new record and return it with its store-assigned id.
    async fn create(&self, account: NewAccount) -> Result<Account, AppError>;

    /// Look up one record. Absence is `Ok(None)`, not an error.
    async fn find(&self, id: i32) -> Result<Option<Account>, AppError>;

    /// Every stored record in insertion (id) order.
    async fn all(&self) -> Result<Vec<Account>, AppError>;

    /// Overwrite the mutable fields of record `id` with `payload`.
    ///
    /// The lookup and the write happen atomically.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: no record is stored under `id`
    async fn update(&self, id: i32, payload: AccountPayload) -> Result<Account, AppError>;

    /// Remove a record. Returns `false` when nothing was stored under `id`.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

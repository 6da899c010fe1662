//! Database connection pool and schema bootstrap.
//!
//! This module provides utilities for:
//! - Creating a PostgreSQL connection pool
//! - Creating the `accounts` table when it does not exist yet

use sqlx::{Pool, Postgres};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Table definition for account records.
///
/// `CREATE TABLE IF NOT EXISTS` keeps startup idempotent against an existing database.
const CREATE_ACCOUNTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id           SERIAL PRIMARY KEY,
    name         VARCHAR(64)  NOT NULL,
    email        VARCHAR(64)  NOT NULL,
    address      VARCHAR(256) NOT NULL,
    phone_number VARCHAR(32),
    date_joined  DATE         NOT NULL DEFAULT CURRENT_DATE
)
"#;

/// Create a new PostgreSQL connection pool.
///
/// Connections are opened lazily up to `max_connections` and reused across requests.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection string is invalid
/// - Cannot connect to PostgreSQL server
/// - Database authentication fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Create the `accounts` table if it is missing.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_ACCOUNTS_TABLE).execute(pool).await?;
    Ok(())
}

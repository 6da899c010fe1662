//! PostgreSQL account store.
//!
//! Every operation runs inside its own database transaction which is
//! committed before returning. An early return through `?` drops the
//! transaction, and sqlx rolls it back.

use async_trait::async_trait;

use super::AccountStore;
use crate::{
    db::DbPool,
    error::AppError,
    models::account::{Account, AccountPayload, NewAccount},
};

/// Account store backed by the `accounts` table.
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: DbPool,
}

impl PgAccountStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, account: NewAccount) -> Result<Account, AppError> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (name, email, address, phone_number, date_joined)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(account.name)
        .bind(account.email)
        .bind(account.address)
        .bind(account.phone_number)
        .bind(account.date_joined)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn find(&self, id: i32) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn all(&self) -> Result<Vec<Account>, AppError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM accounts
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn update(&self, id: i32, payload: AccountPayload) -> Result<Account, AppError> {
        let mut tx = self.pool.begin().await?;

        // FOR UPDATE holds the row until commit
        let mut account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM accounts
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::AccountNotFound)?;

        account.apply(payload);

        let updated = sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET name = $2,
                email = $3,
                address = $4,
                phone_number = $5,
                date_joined = $6
            WHERE id = $1
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(account.id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(account.date_joined)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        Ok(removed > 0)
    }
}

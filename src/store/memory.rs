//! In-memory account store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::AccountStore;
use crate::{
    error::AppError,
    models::account::{Account, AccountPayload, NewAccount},
};

/// Account store kept in process memory.
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i32,
    rows: BTreeMap<i32, Account>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, account: NewAccount) -> Result<Account, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let created = account.with_id(inner.last_id);
        inner.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find(&self, id: i32) -> Result<Option<Account>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: i32, payload: AccountPayload) -> Result<Account, AppError> {
        let mut inner = self.inner.write().await;
        let row = inner.rows.get_mut(&id).ok_or(AppError::AccountNotFound)?;
        row.apply(payload);
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn payload(name: &str) -> AccountPayload {
        AccountPayload {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            address: "2 Side St".to_string(),
            phone_number: Some("555-0199".to_string()),
            date_joined: None,
        }
    }

    fn new_account(name: &str) -> NewAccount {
        NewAccount {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            address: "1 Main St".to_string(),
            phone_number: None,
            date_joined: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = MemoryAccountStore::new();

        let first = store.create(new_account("Alice")).await.unwrap();
        let second = store.create(new_account("Bob")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.name, "Bob");
    }

    #[tokio::test]
    async fn find_missing_is_none() {
        let store = MemoryAccountStore::new();

        assert_eq!(store.find(0).await.unwrap(), None);
    }

    #[tokio::test]
    async fn all_returns_insertion_order() {
        let store = MemoryAccountStore::new();
        for name in ["Carol", "Alice", "Bob"] {
            store.create(new_account(name)).await.unwrap();
        }

        let names: Vec<String> = store
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();

        assert_eq!(names, ["Carol", "Alice", "Bob"]);
    }

    #[tokio::test]
    async fn update_persists_changes() {
        let store = MemoryAccountStore::new();
        let account = store.create(new_account("Alice")).await.unwrap();

        let updated = store
            .update(account.id, payload("Super Sonic"))
            .await
            .unwrap();

        let stored = store.find(account.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
        assert_eq!(stored.name, "Super Sonic");
        assert_eq!(stored.address, "2 Side St");
        assert_eq!(stored.date_joined, account.date_joined);
    }

    #[tokio::test]
    async fn update_of_removed_record_is_not_found() {
        let store = MemoryAccountStore::new();
        let account = store.create(new_account("Alice")).await.unwrap();
        store.delete(account.id).await.unwrap();

        let result = store.update(account.id, payload("Bob")).await;

        assert!(matches!(result, Err(AppError::AccountNotFound)));
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let store = MemoryAccountStore::new();
        let account = store.create(new_account("Alice")).await.unwrap();

        assert!(store.delete(account.id).await.unwrap());
        assert!(!store.delete(account.id).await.unwrap());
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryAccountStore::new();
        let first = store.create(new_account("Alice")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.create(new_account("Bob")).await.unwrap();

        assert_ne!(first.id, second.id);
    }
}

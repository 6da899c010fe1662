//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity and response body for account endpoints
//! - `AccountPayload`: Request body for creating and updating accounts
//! - `NewAccount`: A validated account that has not been assigned an id yet

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents an account record from the store.
///
/// # Database Table
///
/// Maps to the `accounts` table. The `id` is assigned by the store on insert
/// and never changes afterwards.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "address": "1 Main St",
///   "phone_number": null,
///   "date_joined": "2025-01-15"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Store-assigned identifier
    pub id: i32,

    pub name: String,

    pub email: String,

    pub address: String,

    /// Optional contact number, serialized as `null` when absent
    pub phone_number: Option<String>,

    /// Rendered as `YYYY-MM-DD`
    pub date_joined: NaiveDate,
}

/// Request body for creating or updating an account.
///
/// # Validation
///
/// - `name`, `email`, `address`: Required strings
/// - `phone_number`: Optional
/// - `date_joined`: Optional ISO date, defaults to today on create
///
/// Any `id` key sent by the client is ignored; ids come from the store.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountPayload {
    pub name: String,

    pub email: String,

    pub address: String,

    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub date_joined: Option<NaiveDate>,
}

/// Account fields ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: NaiveDate,
}

impl AccountPayload {
    /// Build an insertable account, stamping `today` when no join date was sent.
    pub fn into_new_account(self, today: NaiveDate) -> NewAccount {
        NewAccount {
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
            date_joined: self.date_joined.unwrap_or(today),
        }
    }
}

impl NewAccount {
    /// Attach the store-assigned id.
    pub fn with_id(self, id: i32) -> Account {
        Account {
            id,
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
            date_joined: self.date_joined,
        }
    }
}

impl Account {
    /// Overwrite the mutable fields with a client payload.
    ///
    /// `id` is preserved. `date_joined` keeps its current value when the
    /// payload omits it.
    pub fn apply(&mut self, payload: AccountPayload) {
        self.name = payload.name;
        self.email = payload.email;
        self.address = payload.address;
        self.phone_number = payload.phone_number;
        if let Some(date_joined) = payload.date_joined {
            self.date_joined = date_joined;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Account {
        Account {
            id: 7,
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            address: "1 Main St".into(),
            phone_number: Some("555-0100".into()),
            date_joined: date(2024, 3, 9),
        }
    }

    #[test]
    fn serializes_date_as_iso_string() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "Jane Doe",
                "email": "jane@example.com",
                "address": "1 Main St",
                "phone_number": "555-0100",
                "date_joined": "2024-03-09"
            })
        );
    }

    #[test]
    fn missing_phone_serializes_as_null() {
        let mut account = sample();
        account.phone_number = None;

        let value = serde_json::to_value(account).unwrap();
        assert!(value["phone_number"].is_null());
    }

    #[test]
    fn payload_requires_email() {
        let result = serde_json::from_value::<AccountPayload>(json!({
            "name": "not enough data",
            "address": "somewhere"
        }));

        let err = result.unwrap_err().to_string();
        assert!(err.contains("email"), "{err}");
    }

    #[test]
    fn payload_ignores_client_id() {
        let payload: AccountPayload = serde_json::from_value(json!({
            "id": 999,
            "name": "Jane",
            "email": "jane@example.com",
            "address": "1 Main St"
        }))
        .unwrap();

        let account = payload.into_new_account(date(2025, 1, 1)).with_id(3);
        assert_eq!(account.id, 3);
    }

    #[test]
    fn payload_rejects_bad_date() {
        let result = serde_json::from_value::<AccountPayload>(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "address": "1 Main St",
            "date_joined": "yesterday"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn new_account_defaults_join_date_to_today() {
        let payload: AccountPayload = serde_json::from_value(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "address": "1 Main St"
        }))
        .unwrap();

        let new_account = payload.into_new_account(date(2025, 6, 30));
        assert_eq!(new_account.date_joined, date(2025, 6, 30));
        assert_eq!(new_account.phone_number, None);
    }

    #[test]
    fn apply_overwrites_fields_and_keeps_id() {
        let mut account = sample();
        let payload: AccountPayload = serde_json::from_value(json!({
            "id": 1234,
            "name": "Super Sonic",
            "email": "sonic@example.com",
            "address": "Green Hill"
        }))
        .unwrap();

        account.apply(payload);

        assert_eq!(account.id, 7);
        assert_eq!(account.name, "Super Sonic");
        assert_eq!(account.email, "sonic@example.com");
        assert_eq!(account.address, "Green Hill");
        assert_eq!(account.phone_number, None);
        assert_eq!(account.date_joined, date(2024, 3, 9));
    }
}

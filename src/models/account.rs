use chrono::Local;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Layout of `created_at`, e.g. `2024-03-09 14:05:00`.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Upper bound (exclusive) of the random account number draw.
pub const ACCOUNT_NUMBER_RANGE: i64 = 10_000;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i32,
    pub account_number: i64,
    pub first_name: String,
    pub last_name: String,
    pub balance: u64,
    pub created_at: String,
}

/// An account that has not been persisted yet and so has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub account_number: i64,
    pub first_name: String,
    pub last_name: String,
    pub balance: u64,
    pub created_at: String,
}

impl NewAccount {
    /// Draws a random account number and stamps the current local time.
    /// Account numbers are not checked for collisions.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            account_number: rand::thread_rng().gen_range(0..ACCOUNT_NUMBER_RANGE),
            first_name: first_name.into(),
            last_name: last_name.into(),
            balance: 0,
            created_at: Local::now().format(CREATED_AT_FORMAT).to_string(),
        }
    }

    pub fn into_account(self, id: i32) -> Account {
        Account {
            id,
            account_number: self.account_number,
            first_name: self.first_name,
            last_name: self.last_name,
            balance: self.balance,
            created_at: self.created_at,
        }
    }
}

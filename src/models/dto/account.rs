use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Account;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    #[schema(example = "Jane")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct AccountResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub account_number: i64,
    pub balance: u64,
    #[schema(example = "2024-03-09 14:05:00")]
    pub created_at: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name,
            last_name: account.last_name,
            account_number: account.account_number,
            balance: account.balance,
            created_at: account.created_at,
        }
    }
}

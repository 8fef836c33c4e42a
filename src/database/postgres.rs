use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::{AccountStore, Result, StoreError};
use crate::models::{Account, NewAccount};

const CREATE_ACCOUNTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS accounts (
        id SERIAL PRIMARY KEY,
        account_number BIGINT NOT NULL,
        first_name VARCHAR(255) NOT NULL,
        last_name VARCHAR(255) NOT NULL,
        balance BIGINT NOT NULL DEFAULT 0 CHECK (balance >= 0),
        created_at TEXT NOT NULL
    )
"#;

#[derive(Debug, FromRow)]
struct AccountRow {
    id: i32,
    account_number: i64,
    first_name: String,
    last_name: String,
    balance: i64,
    created_at: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = StoreError;

    fn try_from(row: AccountRow) -> Result<Self> {
        let balance = u64::try_from(row.balance).map_err(|_| {
            StoreError::Corrupt(format!(
                "account {} has negative balance {}",
                row.id, row.balance
            ))
        })?;
        Ok(Account {
            id: row.id,
            account_number: row.account_number,
            first_name: row.first_name,
            last_name: row.last_name,
            balance,
            created_at: row.created_at,
        })
    }
}

fn balance_column(balance: u64) -> Result<i64> {
    i64::try_from(balance)
        .map_err(|_| StoreError::Corrupt(format!("balance {} does not fit the column", balance)))
}

pub struct PostgreDatabase {
    sqlx_db: PgPool,
}

impl PostgreDatabase {
    pub fn new(sqlx_db: PgPool) -> Self {
        PostgreDatabase { sqlx_db }
    }
}

#[async_trait]
impl AccountStore for PostgreDatabase {
    async fn init(&self) -> Result<()> {
        sqlx::query(CREATE_ACCOUNTS_TABLE)
            .execute(&self.sqlx_db)
            .await?;
        Ok(())
    }

    /// Create a new account
    async fn create_account(&self, account: &NewAccount) -> Result<Account> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (account_number, first_name, last_name, balance, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, account_number, first_name, last_name, balance, created_at
            "#,
        )
        .bind(account.account_number)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(balance_column(account.balance)?)
        .bind(&account.created_at)
        .fetch_one(&self.sqlx_db)
        .await?;

        row.try_into()
    }

    async fn delete_account(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.sqlx_db)
            .await?;
        Ok(())
    }

    async fn update_account(&self, account: &Account) -> Result<Account> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE accounts
            SET first_name = $1,
                last_name = $2
            WHERE id = $3
            RETURNING id, account_number, first_name, last_name, balance, created_at
            "#,
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.id)
        .fetch_optional(&self.sqlx_db)
        .await?;

        row.ok_or(StoreError::NotFound(account.id))?.try_into()
    }

    /// Get an account by ID
    async fn get_account_by_id(&self, id: i32) -> Result<Account> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, account_number, first_name, last_name, balance, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.sqlx_db)
        .await?;

        row.ok_or(StoreError::NotFound(id))?.try_into()
    }

    async fn get_accounts(&self) -> Result<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, account_number, first_name, last_name, balance, created_at
            FROM accounts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.sqlx_db)
        .await?;

        rows.into_iter().map(Account::try_from).collect()
    }
}

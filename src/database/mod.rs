mod memory;
mod postgres;

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use thiserror::Error;

use crate::config::Config;
use crate::models::{Account, NewAccount};

pub use memory::MemoryDatabase;
pub use postgres::PostgreDatabase;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("account {0} not found")]
    NotFound(i32),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("corrupt account row: {0}")]
    Corrupt(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistence for accounts. Every operation is a single statement.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Creates the backing table if it does not exist yet.
    async fn init(&self) -> Result<()>;

    /// Inserts a new account and returns it with its generated id.
    async fn create_account(&self, account: &NewAccount) -> Result<Account>;

    /// Deletes by id. Deleting a missing id is not an error.
    async fn delete_account(&self, id: i32) -> Result<()>;

    /// Rewrites the holder names of an existing account.
    async fn update_account(&self, account: &Account) -> Result<Account>;

    async fn get_account_by_id(&self, id: i32) -> Result<Account>;

    /// All accounts in id order.
    async fn get_accounts(&self) -> Result<Vec<Account>>;
}

/// Connects to the PostgreSQL server described by `config`, returning a connection pool for accessing it
pub async fn connect_sqlx(config: &Config) -> std::result::Result<sqlx::PgPool, sqlx::Error> {
    let options = PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name);

    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .idle_timeout(Duration::from_secs(30))
        .max_connections(32)
        .min_connections(4)
        .connect_with(options)
        .await
}

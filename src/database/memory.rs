use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AccountStore, Result, StoreError};
use crate::models::{Account, NewAccount};

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: Vec<Account>,
}

/// In-process account store. Rows are kept in id order, like a serial primary key.
#[derive(Default)]
pub struct MemoryDatabase {
    table: RwLock<Table>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryDatabase {
    async fn init(&self) -> Result<()> {
        Ok(())
    }

    async fn create_account(&self, account: &NewAccount) -> Result<Account> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let account = account.clone().into_account(table.next_id);
        table.rows.push(account.clone());
        Ok(account)
    }

    async fn delete_account(&self, id: i32) -> Result<()> {
        self.table.write().await.rows.retain(|row| row.id != id);
        Ok(())
    }

    async fn update_account(&self, account: &Account) -> Result<Account> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .iter_mut()
            .find(|row| row.id == account.id)
            .ok_or(StoreError::NotFound(account.id))?;
        row.first_name = account.first_name.clone();
        row.last_name = account.last_name.clone();
        Ok(row.clone())
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account> {
        self.table
            .read()
            .await
            .rows
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn get_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.table.read().await.rows.clone())
    }
}

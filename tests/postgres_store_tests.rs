/// PostgreSQL store tests
/// Run only when TEST_DATABASE_URL points at a disposable database
use bank_api::{
    database::{AccountStore, PostgreDatabase, StoreError},
    models::{Account, NewAccount},
};
use sqlx::postgres::PgPoolOptions;

async fn connect() -> Option<PostgreDatabase> {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set, skipping");
            return None;
        }
    };
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap();
    let db = PostgreDatabase::new(pool);
    db.init().await.unwrap();
    // schema creation is idempotent
    db.init().await.unwrap();
    Some(db)
}

#[tokio::test]
async fn test_postgres_account_lifecycle() {
    let Some(db) = connect().await else {
        return;
    };

    let created = db
        .create_account(&NewAccount::new("Jane", "Doe"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.balance, 0);
    assert_eq!(db.get_account_by_id(created.id).await.unwrap(), created);

    let renamed = db
        .update_account(&Account {
            first_name: "Janet".to_string(),
            ..created.clone()
        })
        .await
        .unwrap();
    assert_eq!(renamed.first_name, "Janet");
    assert_eq!(renamed.account_number, created.account_number);

    let all = db.get_accounts().await.unwrap();
    assert!(all.iter().any(|a| a.id == created.id));
    assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));

    db.delete_account(created.id).await.unwrap();
    assert!(matches!(
        db.get_account_by_id(created.id).await,
        Err(StoreError::NotFound(_))
    ));
    // deleting again is not an error
    db.delete_account(created.id).await.unwrap();
}

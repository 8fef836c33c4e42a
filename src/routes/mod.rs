pub mod account;
mod health;
mod json;
pub mod middlewares;
mod swagger;
pub mod transfer;
use crate::database::{self, AccountStore};
use health::health_checker_handler;
use tracing::info;
use tower_http::trace::TraceLayer;

use crate::{models::Error, AppState, Config};

use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;

/// Connects the store, makes sure the schema exists and assembles the application router.
pub async fn make_app(config: Config) -> anyhow::Result<Router> {
    info!(
        "Connecting to PostgreSQL at {}:{}/{}...",
        config.db_host, config.db_port, config.db_name
    );
    let sqlx_db_connection = database::connect_sqlx(&config).await?;
    info!("Connected to PostgreSQL!");

    let db = database::PostgreDatabase::new(sqlx_db_connection);
    db.init().await?;
    info!("Account table ready");

    let state = Arc::new(AppState::new(Arc::new(db), &config));
    Ok(build_router(state))
}

/// Wires every route against an already constructed state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_checker_handler))
        .merge(account::account_routes(state.clone()))
        .merge(transfer::transfer_routes())
        .merge(swagger::build_documentation())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn not_found_handler() -> Error {
    (StatusCode::NOT_FOUND, "not found").into()
}

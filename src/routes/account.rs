use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::info;
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{AccountResponse, CreateAccountRequest, ErrorMessage},
        Error, NewAccount,
    },
    AppState,
};

use super::json::AppJson;
use super::middlewares::{auth_guard, TOKEN_HEADER};

/// Defines the OpenAPI spec for account endpoints
#[derive(OpenApi)]
#[openapi(paths(
    get_accounts_handler,
    create_account_handler,
    get_account_handler,
    delete_account_handler
))]
pub struct AccountsApi;

/// Used to group account endpoints together in the OpenAPI documentation
pub const ACCOUNT_API_GROUP: &str = "ACCOUNT";

/// Builds a router for account routes
pub fn account_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/account/:id",
            get(get_account_handler)
                .delete(delete_account_handler)
                .fallback(method_not_allowed_handler),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_guard))
        .route(
            "/account/",
            get(get_accounts_handler)
                .post(create_account_handler)
                .fallback(method_not_allowed_handler),
        )
}

pub async fn method_not_allowed_handler() -> Error {
    (StatusCode::BAD_REQUEST, "method not allowed").into()
}

/// List accounts handler function
#[utoipa::path(
    get,
    path = "/account/",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "All accounts in creation order", body = [AccountResponse]),
        (status = 400, description = "Store error", body = ErrorMessage),
    )
)]
pub async fn get_accounts_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccountResponse>>, Error> {
    let accounts = state.db.get_accounts().await?;
    Ok(Json(
        accounts.into_iter().map(AccountResponse::from).collect(),
    ))
}

/// Create account handler function
///
/// The credential for the new account is returned in the `x-jwt-token` header.
#[utoipa::path(
    post,
    path = "/account/",
    tag = ACCOUNT_API_GROUP,
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Account successfully created", body = AccountResponse,
            headers(("x-jwt-token" = String, description = "Credential for the new account"))),
        (status = 400, description = "Malformed body or store error", body = ErrorMessage),
        (status = 500, description = "Credential could not be signed", body = ErrorMessage),
    )
)]
pub async fn create_account_handler(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<CreateAccountRequest>,
) -> Result<impl IntoResponse, Error> {
    let new_account = NewAccount::new(body.first_name, body.last_name);
    let account = state.db.create_account(&new_account).await?;

    let token = state.credentials.issue(&account)?;
    info!(
        "issued credential for account {} (number {})",
        account.id, account.account_number
    );

    Ok(([(TOKEN_HEADER, token)], Json(AccountResponse::from(account))))
}

/// Get account handler function
#[utoipa::path(
    get,
    path = "/account/{id}",
    tag = ACCOUNT_API_GROUP,
    security(
        ("accountToken" = [])
    ),
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 400, description = "Invalid account id", body = ErrorMessage),
        (status = 403, description = "Missing, invalid or foreign credential", body = ErrorMessage),
        (status = 404, description = "Account not found", body = ErrorMessage),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn get_account_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<AccountResponse>, Error> {
    let account = state.db.get_account_by_id(id).await?;
    Ok(Json(AccountResponse::from(account)))
}

/// Delete account handler function
#[utoipa::path(
    delete,
    path = "/account/{id}",
    tag = ACCOUNT_API_GROUP,
    security(
        ("accountToken" = [])
    ),
    responses(
        (status = 200, description = "Account deleted", body = String, example = json!("Done")),
        (status = 400, description = "Invalid account id or store error", body = ErrorMessage),
        (status = 403, description = "Missing, invalid or foreign credential", body = ErrorMessage),
        (status = 404, description = "Account not found", body = ErrorMessage),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn delete_account_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<&'static str>, Error> {
    state.db.delete_account(id).await?;
    info!("deleted account {}", id);
    Ok(Json("Done"))
}

use std::sync::Arc;

use axum::{routing::post, Json, Router};
use tracing::debug;
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{ErrorMessage, TransferRequest},
        Error,
    },
    AppState,
};

use super::account::method_not_allowed_handler;
use super::json::AppJson;

/// Defines the OpenAPI spec for transfer endpoints
#[derive(OpenApi)]
#[openapi(paths(transfer_handler))]
pub struct TransferApi;

pub const TRANSFER_API_GROUP: &str = "TRANSFER";

/// Builds a router for transfer routes
pub fn transfer_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/transfer/",
        post(transfer_handler).fallback(method_not_allowed_handler),
    )
}

/// Transfer handler function. Echoes the decoded request; balances are never touched.
#[utoipa::path(
    post,
    path = "/transfer/",
    tag = TRANSFER_API_GROUP,
    request_body = TransferRequest,
    responses(
        (status = 200, description = "The decoded transfer request", body = TransferRequest),
        (status = 400, description = "Malformed body", body = ErrorMessage),
    )
)]
pub async fn transfer_handler(
    AppJson(body): AppJson<TransferRequest>,
) -> Result<Json<TransferRequest>, Error> {
    debug!("transfer of {} to account {}", body.amount, body.to_account);
    Ok(Json(body))
}

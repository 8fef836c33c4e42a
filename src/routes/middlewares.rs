use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{error, warn};

use crate::{database::StoreError, models::Error, AppState};

/// Request header that carries the account credential.
pub const TOKEN_HEADER: &str = "x-jwt-token";

const PERMISSION_DENIED: &str = "permission denied";

/// Gates single-account routes: the credential must be valid and must have been issued
/// for the account addressed by the `:id` path segment.
pub async fn auth_guard(
    State(state): State<Arc<AppState>>,
    raw_id: Result<Path<String>, PathRejection>,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    // a missing header is handed to validation like any other bad token
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let claims = state.credentials.validate(token).map_err(|e| {
        warn!("rejected credential: {}", e);
        Error::new(StatusCode::FORBIDDEN, PERMISSION_DENIED)
    })?;

    let id: i32 = raw_id
        .map_err(|e| e.body_text())
        .and_then(|Path(raw)| raw.parse().map_err(|_| raw))
        .map_err(|raw| {
            warn!("invalid account id in path: {:?}", raw);
            Error::new(StatusCode::BAD_REQUEST, "invalid account id")
        })?;

    let account = state.db.get_account_by_id(id).await.map_err(|e| match e {
        StoreError::NotFound(_) => Error::new(StatusCode::NOT_FOUND, &e.to_string()),
        _ => {
            error!("failed to resolve account {}: {}", id, e);
            Error::new(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    })?;

    if account.account_number != claims.account_number {
        warn!(
            "credential for account number {} used on account {}",
            claims.account_number, id
        );
        return Err(Error::new(StatusCode::FORBIDDEN, PERMISSION_DENIED));
    }

    Ok(next.run(request).await)
}

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use tracing::error;

use super::dto::ErrorMessage;
use crate::credentials::CredentialError;
use crate::database::StoreError;

#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<ErrorMessage>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(ErrorMessage::new(message)),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<(StatusCode, &str)> for Error {
    fn from((code, msg): (StatusCode, &str)) -> Self {
        Self::new(code, msg)
    }
}

/// Malformed or mistyped request bodies are always the caller's fault.
impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, &rejection.body_text())
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, &err.to_string()),
            _ => {
                error!("store error: {}", err);
                Self::new(StatusCode::BAD_REQUEST, &err.to_string())
            }
        }
    }
}

impl From<CredentialError> for Error {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Signing(_) => {
                error!("credential error: {}", err);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
            }
            CredentialError::Invalid(_) => Self::new(StatusCode::FORBIDDEN, "permission denied"),
        }
    }
}

use axum::extract::FromRequest;

use crate::models::Error;

/// `Json` extractor whose rejections render as our 400 error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);

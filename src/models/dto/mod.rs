pub mod account;
pub mod message;
pub mod transfer;
pub use account::*;
pub use message::{ErrorMessage, Message};
pub use transfer::*;

use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

use crate::routes::middlewares::TOKEN_HEADER;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(
            CreateAccountRequest,
            AccountResponse,
            TransferRequest,
            Message,
            ErrorMessage,
        ),
    ),
    modifiers(&SecurityAddon)
)]
/// Captures OpenAPI schemas and canned responses defined in the DTO module
pub struct OpenApiSchemas;

pub struct SecurityAddon;
impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // components are always present: the derive above registers schemas
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "accountToken",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(TOKEN_HEADER))),
            );
        }
    }
}

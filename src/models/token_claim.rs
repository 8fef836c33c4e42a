use serde::{Deserialize, Serialize};

/// Payload carried inside an account credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaim {
    #[serde(rename = "accountNumber")]
    pub account_number: i64,
    /// Unix seconds; checked by the JWT verifier itself.
    pub exp: i64,
}

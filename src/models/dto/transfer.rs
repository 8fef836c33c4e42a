use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Transfer payload. It is decoded and echoed back; no balance is touched.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct TransferRequest {
    #[serde(rename = "toAccount")]
    pub to_account: i64,
    pub amount: i64,
}

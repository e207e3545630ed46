use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Table settings exposed to browser clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicEnvResponse {
    pub base_id: String,
    pub table_name: String,
    pub view_name: String,
}

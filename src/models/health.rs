use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness probe body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Readiness probe body, reporting which table settings are in place
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadyResponse {
    pub status: String,
    pub message: String,
    pub base_configured: bool,
    pub table_name: String,
}

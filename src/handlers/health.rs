use axum::{extract::State, http::StatusCode, Json};
use crate::{config::Config, models::{HealthResponse, ReadyResponse}};
use std::sync::Arc;
use tracing::{debug, warn};

/// Liveness: the process is up and answering
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}

/// Readiness: /api/env has a base to publish.
///
/// Returns 503 until `TABLE_BASE_ID` is set to something non-blank.
pub async fn ready_check(State(config): State<Arc<Config>>) -> (StatusCode, Json<ReadyResponse>) {
    let base_configured = config
        .table_base_id
        .as_deref()
        .is_some_and(|id| !id.trim().is_empty());

    if !base_configured {
        warn!("Readiness check failed: TABLE_BASE_ID is not set");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyResponse {
                status: "unavailable".to_string(),
                message: "TABLE_BASE_ID is not set".to_string(),
                base_configured,
                table_name: config.table_name.clone(),
            }),
        );
    }

    debug!("Readiness check passed");
    (
        StatusCode::OK,
        Json(ReadyResponse {
            status: "ok".to_string(),
            message: "Service is ready".to_string(),
            base_configured,
            table_name: config.table_name.clone(),
        }),
    )
}

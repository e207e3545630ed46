use utoipa::OpenApi;
use crate::models::*;

/// Client-facing table settings
#[utoipa::path(
    get,
    path = "/api/env",
    responses(
        (status = 200, description = "Table settings from the environment", body = PublicEnvResponse,
            content_type = "application/json; charset=utf-8",
            headers(("Cache-Control" = String, description = "Always no-store")))
    )
)]
#[allow(dead_code)]
pub async fn public_env_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Readiness check endpoint
#[utoipa::path(
    get,
    path = "/api/ready",
    responses(
        (status = 200, description = "Table base is configured", body = ReadyResponse),
        (status = 503, description = "TABLE_BASE_ID is not set", body = ReadyResponse)
    )
)]
#[allow(dead_code)]
pub async fn ready_check_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        public_env_doc,
        health_check_doc,
        ready_check_doc,
    ),
    components(
        schemas(PublicEnvResponse, HealthResponse, ReadyResponse)
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use crate::config::Config;
use std::sync::Arc;
use tracing::debug;

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Publish the client-facing table settings.
///
/// Answers every method the same way. The body is never cached.
pub async fn public_env(State(config): State<Arc<Config>>) -> impl IntoResponse {
    debug!("Public env requested");
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, JSON_UTF8),
            (header::CACHE_CONTROL, "no-store"),
        ],
        Json(config.public_env()),
    )
}

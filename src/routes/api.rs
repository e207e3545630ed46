use crate::{config::Config, handlers::{health_check, public_env, ready_check}};
use axum::{routing::{any, get}, Router};
use std::sync::Arc;

/// Create API routes
pub fn create_api_routes(config: Arc<Config>) -> Router {
    Router::<Arc<Config>>::new()
        .route("/env", any(public_env))
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .with_state(config)
}

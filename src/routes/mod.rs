pub mod api;

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::{config::Config, docs::ApiDoc};
use std::sync::Arc;

pub use api::create_api_routes;

/// Assemble the full application router
pub fn create_app(config: Arc<Config>) -> Router {
    Router::new()
        // Mount API routes
        .nest("/api", create_api_routes(config))
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
}

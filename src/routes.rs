// Route path constants - single source of truth for all API paths

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub const LRANGE: &str = "/lrange/{key}";
pub const RPUSH: &str = "/rpush/{key}/{value}";
pub const INFO: &str = "/info";
pub const ENV: &str = "/env";
pub const HEALTH: &str = "/health";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Bind every endpoint to its handler
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(LRANGE, get(handlers::lrange_handler))
        .route(RPUSH, get(handlers::rpush_handler))
        .route(INFO, get(handlers::info_handler))
        .route(ENV, get(handlers::env_handler))
        .route(HEALTH, get(handlers::health_handler))
        .with_state(state)
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
}

use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "redis-list-api",
        version = "1.0.0",
        description = "A minimal HTTP front end for Redis lists"
    ),
    paths(
        handlers::lrange::lrange_handler,
        handlers::rpush::rpush_handler,
        handlers::info::info_handler,
        handlers::env::env_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "lists", description = "List operations"),
        (name = "diagnostics", description = "Store and process diagnostics"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;

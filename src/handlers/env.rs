use crate::environment;
use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use axum::response::Response;

use super::json_response;

/// GET /env handler - Dump the process environment
#[utoipa::path(
    get,
    path = routes::ENV,
    responses(
        (status = 200, description = "Environment variables by name", body = std::collections::BTreeMap<String, String>),
        (status = 500, description = "Response encoding failed", body = ErrorResponse)
    ),
    tag = "diagnostics"
)]
pub async fn env_handler() -> Result<Response, ApiError> {
    let snapshot = environment::snapshot();

    tracing::debug!("Served {} local machine envs", snapshot.len());
    json_response(&snapshot, "environment")
}

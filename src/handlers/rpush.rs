use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, response::Response};

use super::lrange::list_range;

/// GET /rpush/{key}/{value} handler - Append to a list and return it
///
/// The list is created on first push. A failed append returns early
/// without reading the list back.
#[utoipa::path(
    get,
    path = routes::RPUSH,
    params(
        ("key" = String, Path, description = "List key"),
        ("value" = String, Path, description = "Value to append")
    ),
    responses(
        (status = 200, description = "List members after the push", body = Vec<String>),
        (status = 500, description = "Response encoding failed", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse)
    ),
    tag = "lists"
)]
pub async fn rpush_handler(
    State(state): State<AppState>,
    Path((key, value)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    state
        .store
        .append(&key, &value)
        .await
        .map_err(ApiError::ListAppend)?;

    tracing::info!("Appended value to list {}", key);
    list_range(&state, &key).await
}

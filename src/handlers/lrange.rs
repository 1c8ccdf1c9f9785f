use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, response::Response};

use super::json_response;

/// GET /lrange/{key} handler - Read every member of a list
///
/// A key that was never pushed to yields an empty array.
#[utoipa::path(
    get,
    path = routes::LRANGE,
    params(
        ("key" = String, Path, description = "List key")
    ),
    responses(
        (status = 200, description = "List members in insertion order", body = Vec<String>),
        (status = 500, description = "Response encoding failed", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse)
    ),
    tag = "lists"
)]
pub async fn lrange_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, ApiError> {
    list_range(&state, &key).await
}

/// Shared by the push handler so both endpoints answer with the same shape.
pub(crate) async fn list_range(state: &AppState, key: &str) -> Result<Response, ApiError> {
    let members = state.store.get_all(key).await.map_err(ApiError::ListRead)?;

    tracing::info!("Read {} members from list {}", members.len(), key);
    json_response(&members, "response")
}

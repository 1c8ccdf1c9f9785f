use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// GET /info handler - Raw store diagnostics as plain text
#[utoipa::path(
    get,
    path = routes::INFO,
    responses(
        (status = 200, description = "Store INFO output", body = String, content_type = "text/plain"),
        (status = 503, description = "Store unavailable", body = ErrorResponse)
    ),
    tag = "diagnostics"
)]
pub async fn info_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let info = state.store.info().await.map_err(ApiError::Info)?;

    tracing::debug!("Served {} bytes of store info", info.len());
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        info,
    )
        .into_response())
}

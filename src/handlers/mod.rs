pub mod env;
pub mod health;
pub mod info;
pub mod lrange;
pub mod rpush;

pub use env::env_handler;
pub use health::health_handler;
pub use info::info_handler;
pub use lrange::lrange_handler;
pub use rpush::rpush_handler;

use crate::error::ApiError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Serialize `value` as a 200 JSON response
///
/// `what` names the payload in the error message if encoding fails.
fn json_response<T: Serialize>(value: &T, what: &'static str) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value).map_err(|source| ApiError::Encode { what, source })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

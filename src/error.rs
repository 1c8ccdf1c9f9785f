use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Store failures surface as 503 and local encoding failures as 500, both
/// rendered as an `ErrorResponse` JSON body. None of them are retried.
#[derive(Debug)]
pub enum ApiError {
    /// Reading a list from the store failed
    ListRead(anyhow::Error),
    /// Appending to a list failed
    ListAppend(anyhow::Error),
    /// The store diagnostic command failed
    Info(anyhow::Error),
    /// Serializing a response body failed
    Encode {
        what: &'static str,
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ListRead(_) | ApiError::ListAppend(_) | ApiError::Info(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Encode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::ListRead(err) => write!(f, "failed to get list: {:#}", err),
            ApiError::ListAppend(err) => write!(f, "failed to add to list: {:#}", err),
            ApiError::Info(err) => write!(f, "failed to get Redis info: {:#}", err),
            ApiError::Encode { what, source } => write!(f, "failed to encode {}: {}", what, source),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.to_string();
        tracing::error!("Request failed with {}: {}", status, error_message);

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_store_errors_map_to_service_unavailable() {
        assert_eq!(ApiError::ListRead(anyhow!("down")).status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ApiError::ListAppend(anyhow!("down")).status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ApiError::Info(anyhow!("down")).status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_encode_error_maps_to_internal_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::Encode { what: "response", source };

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("failed to encode response:"));
    }

    #[test]
    fn test_message_includes_context_chain() {
        let err = ApiError::ListRead(anyhow!("connection refused").context("LRANGE failed"));
        assert_eq!(err.to_string(), "failed to get list: LRANGE failed: connection refused");
    }

    #[tokio::test]
    async fn test_error_body_is_json_envelope() {
        let response = ApiError::Info(anyhow!("timed out")).into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_response.error, "failed to get Redis info: timed out");
    }
}

pub mod catalog;
pub mod chat;
pub mod hotels;
pub mod tools;

use super::dto::ErrorResponse;
use crate::upstream::UpstreamError;
use axum::Json;
use axum::http::StatusCode;

/// Pass-through endpoints keep the upstream status and body; connectivity
/// failures map to 503.
pub(super) fn upstream_error_response(error: UpstreamError) -> (StatusCode, Json<ErrorResponse>) {
    match error {
        UpstreamError::Status { status, body, .. } => (
            status,
            Json(ErrorResponse {
                error: format!("Error from SearchLift360 API: {body}"),
            }),
        ),
        UpstreamError::Unreachable { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: error.to_string(),
            }),
        ),
        UpstreamError::Decode { .. } => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: error.to_string(),
            }),
        ),
    }
}

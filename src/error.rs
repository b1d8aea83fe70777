//! Service error types with HTTP status code mapping.
//!
//! [`BoardError`] is the central error type. Each variant maps to an HTTP
//! status code; store-layer failures surface as opaque 500s with a generic
//! message while validation failures carry a specific one.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Flat JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// { "error": "room already exists: A-101" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// "No one waiting" is deliberately absent: an empty waiting set is a
/// valid result of calling the next examinee, not a failure.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The queue store cannot accept the write.
    #[error("queue store unavailable")]
    StoreUnavailable,

    /// A room with the same label already exists.
    #[error("room already exists: {0}")]
    DuplicateRoom(String),

    /// A batch room deletion was requested with no rooms selected.
    #[error("no rooms selected for deletion")]
    EmptySelection,

    /// No room matches the given label.
    #[error("room not found: {0}")]
    RoomNotFound(String),

    /// Request body failed schema validation.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl BoardError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateRoom(_) | Self::EmptySelection | Self::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::RoomNotFound(_) => StatusCode::NOT_FOUND,
            Self::StoreUnavailable | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 5xx details go to the log only; the client sees a generic message.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        let mut response = axum::Json(ErrorResponse { error: message }).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400() {
        assert_eq!(
            BoardError::DuplicateRoom("A".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BoardError::EmptySelection.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BoardError::InvalidRequest("missing field".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_room_maps_to_404() {
        assert_eq!(
            BoardError::RoomNotFound("Z".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn store_failures_map_to_500() {
        assert_eq!(
            BoardError::StoreUnavailable.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            BoardError::Internal("oops".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn server_error_body_is_opaque() {
        let response = BoardError::StoreUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await;
        let Ok(bytes) = bytes else {
            panic!("body read failed");
        };
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap_or_default();
        assert_eq!(body.get("error").and_then(|v| v.as_str()), Some("internal server error"));
    }
}

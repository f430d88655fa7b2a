//! API error types with response mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse`. Handled failures (bad coordinates, unknown
//! id) become a `{msg, status: 404}` body with HTTP 200; storage failures
//! become HTTP 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use addrbook_core::CoreError;
use addrbook_storage::StorageError;

use crate::schema::common::{
    StatusMessage, MSG_INVALID_ADDRESS_ID, MSG_INVALID_COORDINATES, STATUS_INTERNAL,
};

/// API errors with response mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Out-of-bounds coordinates or a non-positive range.
    #[error("invalid coordinates")]
    InvalidCoordinates,

    /// No address with the requested id.
    #[error("invalid address id: {0}")]
    InvalidAddressId(i64),

    /// Storage or startup failure (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidCoordinates => (
                StatusCode::OK,
                Json(StatusMessage::failure(MSG_INVALID_COORDINATES)),
            )
                .into_response(),
            ApiError::InvalidAddressId(_) => (
                StatusCode::OK,
                Json(StatusMessage::failure(MSG_INVALID_ADDRESS_ID)),
            )
                .into_response(),
            ApiError::InternalError(msg) => {
                tracing::error!("request failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(StatusMessage {
                        msg,
                        status: STATUS_INTERNAL,
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidCoordinates { .. } | CoreError::InvalidRange { .. } => {
                ApiError::InvalidCoordinates
            }
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::AddressNotFound(id) => ApiError::InvalidAddressId(id),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

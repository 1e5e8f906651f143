//! Mapping of domain errors onto HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use super::ApiResponse;
use crate::shared::errors::DomainError;

/// Handler error: a status code and the message placed in the envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Storage(detail) => {
                error!("Storage failure: {}", detail);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
            DomainError::StorageConflict(detail) => {
                warn!("Unhandled storage conflict: {}", detail);
                Self::new(
                    StatusCode::CONFLICT,
                    "The request conflicts with the current state of the resource.",
                )
            }
            other => Self::new(StatusCode::BAD_REQUEST, other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::error(self.message))).into_response()
    }
}

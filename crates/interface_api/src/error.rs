//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use core_kernel::CoreError;
use domain_fleet::FleetError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Database(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error", msg.clone()),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone()),
        }
    }

    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        self.parts().0
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = self.parts();

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<FleetError> for ApiError {
    fn from(err: FleetError) -> Self {
        match err {
            FleetError::ClientNotFound(_) | FleetError::PlateNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            FleetError::Validation(msg) => ApiError::Validation(msg),
            FleetError::Conflict(msg) => ApiError::Conflict(msg),
            FleetError::Storage(msg) => ApiError::Database(msg),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        messages.sort();
        ApiError::Validation(messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_error_status_mapping() {
        let cases = [
            (FleetError::ClientNotFound("X".into()), StatusCode::NOT_FOUND),
            (FleetError::PlateNotFound("X".into()), StatusCode::NOT_FOUND),
            (FleetError::validation("bad"), StatusCode::UNPROCESSABLE_ENTITY),
            (FleetError::Conflict("dup".into()), StatusCode::CONFLICT),
            (FleetError::Storage("disk".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[tokio::test]
    async fn test_response_body_has_error_and_message_only() {
        let response = ApiError::Conflict("duplicate plate".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": "conflict", "message": "duplicate plate" })
        );
    }

    #[test]
    fn test_storage_message_is_preserved() {
        let err = ApiError::from(FleetError::Storage("failed to save refill".into()));
        assert!(matches!(err, ApiError::Database(ref m) if m == "failed to save refill"));
    }
}

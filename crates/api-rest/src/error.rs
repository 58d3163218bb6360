//! HTTP error handling and conversion.
//!
//! Validation failures carry a machine-readable error key plus the entity
//! name so generic clients can render alerts without parsing messages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use participant_registry_application::ApplicationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// API-specific error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Application layer error
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Client error with a machine-readable alert key (e.g. `idexists`)
    #[error("{message}")]
    BadRequestAlert {
        /// Entity the error relates to
        entity_name: &'static str,
        /// Machine-readable reason code
        error_key: &'static str,
        /// Human-readable message
        message: String,
    },

    /// Malformed request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Payload validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found; rendered as an empty 404 body
    #[error("Resource not found")]
    NotFound,

    /// Internal server error
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// Build a `BadRequestAlert`.
    pub fn bad_request_alert(
        entity_name: &'static str,
        error_key: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::BadRequestAlert {
            entity_name,
            error_key,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Application(err) => StatusCode::from_u16(err.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::BadRequestAlert { .. } | Self::BadRequest(_) | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Application(err) => err.error_code(),
            Self::BadRequestAlert { error_key, .. } => *error_key,
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Standardized error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub error: String,

    /// Human-readable message
    pub message: String,

    /// Entity the error relates to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Machine-readable reason code for alert rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_key: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            entity_name: None,
            error_key: None,
        }
    }

    /// Attach the entity name and alert key
    pub fn with_alert(mut self, entity_name: &str, error_key: &str) -> Self {
        self.entity_name = Some(entity_name.to_string());
        self.error_key = Some(error_key.to_string());
        self
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Absence is a normal outcome: 404 with an empty body
        if matches!(self, Self::NotFound) {
            return status.into_response();
        }

        let body = match &self {
            Self::BadRequestAlert {
                entity_name,
                error_key,
                message,
            } => ErrorResponse::new(*error_key, message.clone()).with_alert(entity_name, error_key),
            other => ErrorResponse::new(other.error_code(), other.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_error_shape() {
        let err = ApiError::bad_request_alert("participante", "idexists", "id must be absent");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "idexists");
    }

    #[test]
    fn test_application_error_status_mapping() {
        let err = ApiError::from(ApplicationError::NotFound("x".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = ApiError::from(ApplicationError::Internal("x".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

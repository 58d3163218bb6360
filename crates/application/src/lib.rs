//! Application layer for the participant registry.
//!
//! This crate sits between the HTTP adapter and whatever persistence backs
//! it, providing the service that orchestrates participant CRUD operations.
//!
//! ## Modules
//!
//! - `dto` - Data transfer objects crossing the service boundary
//! - `service` - `ParticipanteService` plus the repository/store ports

pub mod dto;
pub mod service;

// Re-export commonly used types
pub use dto::ParticipanteDto;
pub use service::{ParticipanteRepositoryPort, ParticipanteService, ParticipanteStore};

use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug, Clone)]
pub enum ApplicationError {
    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Persistence backend unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl ApplicationError {
    /// Get HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            ApplicationError::NotFound(_) => 404,
            ApplicationError::InvalidInput(_) => 400,
            ApplicationError::Internal(_) => 500,
            ApplicationError::ServiceUnavailable(_) => 503,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ApplicationError::NotFound(_) => "NOT_FOUND",
            ApplicationError::InvalidInput(_) => "INVALID_INPUT",
            ApplicationError::Internal(_) => "INTERNAL_ERROR",
            ApplicationError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;

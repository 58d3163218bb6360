//! Participant registry REST API.
//!
//! Axum-based HTTP adapter for the participant registry: it parses requests,
//! enforces the shape-level invariants (id presence and consistency, entity
//! existence), delegates to the application service, and shapes responses
//! (status codes, `Location`, pagination headers, mutation alert headers).
//!
//! ## Modules
//!
//! - **app**: Router assembly and middleware stack
//! - **routes**: HTTP handlers (health, participantes)
//! - **extractors**: Pagination and validated-JSON extractors
//! - **headers**: Alert and pagination header builders
//! - **responses**: Response types (`Created`, `NoContent`)
//! - **error**: HTTP error handling and conversion
//! - **state**: Shared application state and default wiring

#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod headers;
pub mod middleware;
pub mod responses;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use app::{create_app, create_app_with_state};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

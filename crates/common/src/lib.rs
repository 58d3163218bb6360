//! Common utilities shared across the participant registry services.
//!
//! This crate provides foundational pieces used by the application and API
//! layers:
//! - Pagination primitives (page requests, sort orders, page results)
//! - Telemetry setup (tracing subscriber initialization)

pub mod pagination;
pub mod telemetry;

// Re-export commonly used types
pub use pagination::{Page, PageRequest, SortDirection, SortOrder};
pub use telemetry::init_tracing;

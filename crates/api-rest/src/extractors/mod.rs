//! Custom Axum extractors.

pub mod pagination;
pub mod validated_json;

pub use pagination::PageQuery;
pub use validated_json::ValidatedJson;

//! Pagination extractor.
//!
//! Parses the `page` (0-indexed), `size` and `sort` query parameters into a
//! [`PageRequest`].

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use participant_registry_common::pagination::{PageRequest, SortOrder};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PageParams {
    page: Option<u32>,
    size: Option<u32>,
    sort: Option<String>,
}

/// Extracted pagination request
#[derive(Debug, Clone)]
pub struct PageQuery(pub PageRequest);

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Invalid pagination parameters: {e}")))?;

        let mut request = PageRequest::new(params.page.unwrap_or(0), params.size.unwrap_or(20));
        if let Some(sort) = params.sort.as_deref().and_then(SortOrder::parse) {
            request = request.with_sort(sort);
        }

        Ok(Self(request))
    }
}

//! Response types for the participant resource.

use axum::{
    http::{header::LOCATION, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Created response (HTTP 201) with a `Location` header and alert headers.
pub struct Created<T> {
    /// Location of the new resource
    pub location: String,
    /// Alert headers describing the mutation
    pub headers: HeaderMap,
    /// Created representation
    pub body: T,
}

impl<T> IntoResponse for Created<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let mut headers = self.headers;
        if let Ok(value) = HeaderValue::from_str(&self.location) {
            headers.insert(LOCATION, value);
        }
        (StatusCode::CREATED, headers, Json(self.body)).into_response()
    }
}

/// No content response (HTTP 204) carrying alert headers.
pub struct NoContent(pub HeaderMap);

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        (StatusCode::NO_CONTENT, self.0).into_response()
    }
}

//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use view_store::ViewStoreError;

use crate::response::Envelope;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed slug path parameter.
    InvalidSlug,
    /// A request body was present but was not valid JSON.
    InvalidBody,
    /// The client exceeded its rate-limit quota.
    RateLimited,
    /// Store failure. Details are logged server-side, never sent to clients.
    Store(ViewStoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidSlug => (StatusCode::BAD_REQUEST, "Invalid slug!"),
            ApiError::InvalidBody => (StatusCode::BAD_REQUEST, "JSON body is empty or invalid!"),
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests! Please try again later.",
            ),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "store error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!")
            }
        };

        (status, axum::Json(Envelope::error(message))).into_response()
    }
}

impl From<ViewStoreError> for ApiError {
    fn from(err: ViewStoreError) -> Self {
        ApiError::Store(err)
    }
}

pub mod home;
pub mod views;

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::response::Envelope;

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(Envelope::not_found()))
}

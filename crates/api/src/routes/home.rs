//! Liveness/greeting endpoint.

use axum::Json;
use axum::http::header;
use axum::response::IntoResponse;

use crate::response::Envelope;

const ROOT_CACHE: &str = "public, s-maxage=86400, stale-while-revalidate=43200";

/// GET / — static greeting, cacheable for a day.
pub async fn greet() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, ROOT_CACHE)],
        Json(Envelope::message("Greetings from the views API!")),
    )
}

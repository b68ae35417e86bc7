//! Aggregate and per-slug view-count endpoints.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use view_store::ViewStore;

use crate::error::ApiError;
use crate::response::Envelope;

/// Shared application state accessible from all handlers.
pub struct AppState<S: ViewStore> {
    pub store: S,
}

const AGGREGATE_CACHE: &str = "public, s-maxage=1200, stale-while-revalidate=900";
const SLUG_CACHE: &str = "public, s-maxage=120, stale-while-revalidate=60";

/// GET /views — sum of all counters.
#[tracing::instrument(skip(state))]
pub async fn total<S: ViewStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let count = state.store.total_count().await?;

    Ok((
        [(header::CACHE_CONTROL, AGGREGATE_CACHE)],
        Json(Envelope::count(count)),
    ))
}

/// GET /views/{slug} — counter for one page, `0` when no row exists.
#[tracing::instrument(skip(state))]
pub async fn get_by_slug<S: ViewStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    validate_slug(&slug)?;
    let count = state.store.count_for_slug(&slug).await?;

    Ok((
        [(header::CACHE_CONTROL, SLUG_CACHE)],
        Json(Envelope::count(count)),
    ))
}

/// POST /views/{slug} — atomic increment, returning the new value.
///
/// Mutations are never cached, so no Cache-Control header is set.
#[tracing::instrument(skip(state, body))]
pub async fn increment<S: ViewStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(slug): Path<String>,
    body: Bytes,
) -> Result<Json<Envelope>, ApiError> {
    validate_slug(&slug)?;
    ensure_json_body(&body)?;
    let count = state.store.increment(&slug).await?;

    Ok(Json(Envelope::count(count)))
}

/// Bound to `/views/` so an empty slug reports 400 rather than falling
/// through to the 404 handler.
pub async fn missing_slug() -> ApiError {
    ApiError::InvalidSlug
}

fn validate_slug(slug: &str) -> Result<(), ApiError> {
    if slug.trim().is_empty() {
        return Err(ApiError::InvalidSlug);
    }
    Ok(())
}

/// The increment takes no input, but clients that do send a body must send
/// valid JSON.
fn ensure_json_body(body: &Bytes) -> Result<(), ApiError> {
    if body.is_empty() {
        return Ok(());
    }
    serde_json::from_slice::<serde_json::Value>(body).map_err(|_| ApiError::InvalidBody)?;
    Ok(())
}

//! HTTP API server for per-page view counters.
//!
//! Serves and increments slug-keyed counters as JSON, with security headers,
//! a CORS allow-list, and per-client rate limiting applied before route
//! dispatch. Structured logging via tracing.

pub mod config;
pub mod error;
pub mod rate_limit;
pub mod response;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::middleware;
use axum::routing::get;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use view_store::ViewStore;

use config::Config;
use rate_limit::{RateLimitState, RateLimiter};
use routes::views::AppState;

/// Creates the axum application router with all routes, middleware, and
/// shared state.
///
/// Middleware runs security headers first, then CORS, then the rate
/// limiter, then route dispatch.
pub fn create_app<S: ViewStore + 'static>(
    state: Arc<AppState<S>>,
    limiter: Arc<RateLimiter>,
    config: &Config,
) -> Router {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true);

    let rate_limit_state = RateLimitState {
        limiter,
        environment: config.environment,
    };

    Router::new()
        .route("/", get(routes::home::greet))
        .route("/views", get(routes::views::total::<S>))
        .route(
            "/views/",
            get(routes::views::missing_slug).post(routes::views::missing_slug),
        )
        .route(
            "/views/{slug}",
            get(routes::views::get_by_slug::<S>).post(routes::views::increment::<S>),
        )
        .fallback(routes::not_found)
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            rate_limit_state,
            rate_limit::enforce,
        ))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(TraceLayer::new_for_http())
}

//! Per-client request rate limiting.
//!
//! A fixed-window limiter keyed by client IP (or a fixed key in development),
//! applied as middleware before route dispatch.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::config::Environment;
use crate::error::ApiError;

/// Fixed-window request limiter, bucketed by a per-client key.
pub struct RateLimiter {
    max_requests: u32,
    period: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

struct Window {
    started: Instant,
    used: u32,
}

impl RateLimiter {
    /// Creates a limiter allowing `max_requests` per `period` per key.
    pub fn new(max_requests: u32, period: Duration) -> Self {
        Self {
            max_requests,
            period,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Records a request against `key` and reports whether it is allowed.
    ///
    /// The window for a key resets once the period has elapsed; there is no
    /// background sweeper.
    pub fn check(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());

        let window = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            used: 0,
        });

        if now.duration_since(window.started) >= self.period {
            window.started = now;
            window.used = 0;
        }

        if window.used >= self.max_requests {
            return false;
        }

        window.used += 1;
        true
    }
}

/// State handed to the rate-limit middleware.
#[derive(Clone)]
pub struct RateLimitState {
    pub limiter: Arc<RateLimiter>,
    pub environment: Environment,
}

/// Derives the rate-limit bucket key for a request.
///
/// Development always buckets under a fixed loopback key; production keys by
/// the client IP forwarded by the edge proxy.
fn client_key(environment: Environment, headers: &HeaderMap) -> String {
    if environment == Environment::Development {
        return "127.0.0.1".to_string();
    }

    headers
        .get("cf-connecting-ip")
        .or_else(|| headers.get("x-real-ip"))
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// Middleware that rejects over-quota requests before any handler runs.
pub async fn enforce(
    State(state): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let key = client_key(state.environment, req.headers());

    if !state.limiter.check(&key) {
        tracing::warn!(key = %key, "rate limit exceeded");
        return Err(ApiError::RateLimited);
    }

    Ok(next.run(req).await)
}

//! HTTP route handlers.
//!
//! Two routes exist: the greeting at `/` and a liveness probe at `/health`.
//! The greeting body is fixed for the lifetime of the process, so it carries
//! a long Cache-Control header for upstream caches; the health probe is
//! always served fresh. Anything else falls through to the framework's
//! default 404 (or 405 for a wrong method on a known path).
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod greeting;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::config::CACHE_CONTROL_GREETING;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Greeting - immutable content, long cache
    let greeting_routes = Router::new()
        .route("/", get(greeting::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_GREETING),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(greeting_routes)
        .merge(health_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

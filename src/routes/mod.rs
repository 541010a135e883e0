//! HTTP route handlers.
//!
//! The service exposes one route, `GET /`, marked uncacheable so every probe
//! reaches the process. Anything else falls through to a plaintext 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod home;
pub mod not_found;

use axum::http::header::{HeaderValue, CACHE_CONTROL, SERVER};
use axum::{middleware, routing::get, Router};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_PROBE, SERVER_HEADER};
use crate::middleware::request_id_layer;

/// Creates the Axum router with the root route and fallback.
pub fn create_router() -> Router {
    let home_routes = Router::new()
        .route("/", get(home::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ));

    Router::new()
        .merge(home_routes)
        .fallback(not_found::not_found)
        .layer(SetResponseHeaderLayer::overriding(
            SERVER,
            HeaderValue::from_static(SERVER_HEADER),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

//! Fallback for unrouted paths.

use axum::http::StatusCode;

use crate::config::NOT_FOUND_MESSAGE;

/// Plaintext 404 for any path without a route.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}

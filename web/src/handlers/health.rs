//! Health check endpoint.
//!
//! Used by load balancers and monitoring systems to verify the service is
//! running. It deliberately checks nothing beyond process liveness; the todo
//! store is not consulted.

use axum::http::StatusCode;

/// Simple health check endpoint (for basic liveness).
///
/// Returns 200 OK to indicate the service is running.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

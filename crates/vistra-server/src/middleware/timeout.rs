//! Request timeout middleware.
//!
//! An inbound request covers the full fallback chain of outbound model calls,
//! so the limit applied here should exceed the per-candidate timeout times
//! the chain length.

use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;

use crate::handler::ErrorResponse;

/// Tracing target for request timeouts.
const TRACING_TARGET: &str = "vistra_server::middleware::timeout";

/// Extension trait for `axum::`[`Router`] to enforce a request deadline.
///
/// [`Router`]: axum::routing::Router
pub trait RouterTimeoutExt<S> {
    /// Aborts requests that run longer than `timeout` with a `500` response.
    fn with_request_timeout(self, timeout: Duration) -> Self;
}

impl<S> RouterTimeoutExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_request_timeout(self, timeout: Duration) -> Self {
        let middleware = ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_timeout_error))
            .layer(TimeoutLayer::new(timeout));

        self.layer(middleware)
    }
}

async fn handle_timeout_error(err: tower::BoxError) -> impl IntoResponse {
    let detail = if err.is::<tower::timeout::error::Elapsed>() {
        tracing::error!(
            target: TRACING_TARGET,
            error = %err,
            "request timeout exceeded"
        );
        "request took too long to process and was terminated".to_string()
    } else {
        tracing::error!(
            target: TRACING_TARGET,
            error = %err,
            "unexpected middleware error"
        );
        err.to_string()
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { detail }),
    )
}

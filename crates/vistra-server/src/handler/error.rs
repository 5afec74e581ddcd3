//! HTTP error mapping for handler results.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::handler::response::ErrorResponse;

/// Tracing target for handler error responses.
const TRACING_TARGET: &str = "vistra_server::handler::error";

/// Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for HTTP handlers.
///
/// Everything is surfaced to the caller as an HTTP status with a
/// human-readable `detail` string; nothing is silently swallowed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Core relay failure (fallback chain, model output, configuration).
    #[error(transparent)]
    Rig(#[from] vistra_rig::Error),

    /// Request payload failed validation.
    #[error("invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl Error {
    /// Returns the status code this error maps onto.
    ///
    /// An exhausted fallback chain is a 429 ("try again later"); malformed
    /// model output is a 500 ("not retryable by the client").
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Rig(vistra_rig::Error::Exhausted { .. }) => StatusCode::TOO_MANY_REQUESTS,
            Self::Rig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();

        if status.is_server_error() {
            tracing::error!(target: TRACING_TARGET, status = status.as_u16(), detail, "Request failed");
        } else {
            tracing::warn!(target: TRACING_TARGET, status = status.as_u16(), detail, "Request rejected");
        }

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

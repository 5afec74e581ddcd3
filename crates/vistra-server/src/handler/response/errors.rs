//! HTTP error response body.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Error response body.
///
/// The single `detail` field is the wire contract the frontend already
/// consumes for every failure status.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    pub detail: String,
}

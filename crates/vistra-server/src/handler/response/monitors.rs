//! Health check response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Health info returned from the root endpoint.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthStatus {
    /// Service status indicator.
    pub status: String,
    /// Primary model of the fallback chain.
    pub model: String,
}

//! Chat response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The tutor's reply to a chat question, returned as raw model text.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChatReply {
    /// Reply text.
    pub reply: String,
}

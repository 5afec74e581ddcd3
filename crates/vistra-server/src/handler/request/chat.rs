//! Chat request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for a contextual chat question.
///
/// Chat is stateless; `context` carries whatever summary of the current
/// graph the frontend wants the tutor to see.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
pub struct ChatMessage {
    /// The student's question.
    #[validate(length(min = 1, max = 32000))]
    pub message: String,
    /// Summary/explanation of the current graph; required but may be empty.
    pub context: String,
}

//! Graph generation and code rewrite request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for generating a graph lesson.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
pub struct GenerateGraph {
    /// Free-text description of the system to visualize.
    #[validate(length(min = 1, max = 32000))]
    pub prompt: String,
}

/// Request payload for rewriting a code snippet in another language.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
pub struct RegenerateCode {
    /// Description of the logic to implement.
    #[validate(length(min = 1, max = 32000))]
    pub prompt: String,
    /// Target programming language.
    #[validate(length(min = 1, max = 64))]
    pub language: String,
}

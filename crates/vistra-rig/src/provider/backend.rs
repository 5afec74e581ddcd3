//! Completion backend abstraction.

use async_trait::async_trait;

use super::model::GeminiCompletionModel;
use crate::Result;

/// One text-completion call against a single named model.
///
/// The gateway drives its fallback chain through this trait, so tests can
/// substitute a scripted backend for the hosted API.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Issues one completion call and returns the response text.
    ///
    /// `preamble` is the task-specific system instruction; `prompt` carries
    /// the user content verbatim.
    async fn complete(
        &self,
        model: GeminiCompletionModel,
        preamble: &str,
        prompt: &str,
    ) -> Result<String>;
}

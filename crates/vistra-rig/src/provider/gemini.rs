//! Gemini completion backend over the rig client.

use std::fmt;

use async_trait::async_trait;
use rig::completion::{AssistantContent, CompletionModel as RigCompletionModel};
use rig::one_or_many::OneOrMany;
use rig::prelude::CompletionClient;
use rig::providers::gemini;

use super::backend::CompletionBackend;
use super::model::GeminiCompletionModel;
use crate::{Error, Result};

/// Completion backend that issues requests to the hosted Gemini API.
pub struct GeminiBackend {
    client: gemini::Client,
}

impl GeminiBackend {
    /// Creates a backend from an API key.
    pub fn new(api_key: &str) -> Result<Self> {
        let client =
            gemini::Client::new(api_key).map_err(|e| Error::provider("gemini", e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    async fn complete(
        &self,
        model: GeminiCompletionModel,
        preamble: &str,
        prompt: &str,
    ) -> Result<String> {
        let model_name = model.as_str();
        self.client
            .completion_model(model_name)
            .completion_request(prompt)
            .preamble(preamble.to_string())
            .send()
            .await
            .map(|r| extract_text_content(&r.choice))
            .map_err(|e| Error::provider(model_name, e.to_string()))
    }
}

/// Extracts text content from assistant content choices.
fn extract_text_content(choice: &OneOrMany<AssistantContent>) -> String {
    choice
        .iter()
        .filter_map(|content| match content {
            AssistantContent::Text(text) => Some(text.text()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("")
}

impl fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiBackend").finish_non_exhaustive()
    }
}

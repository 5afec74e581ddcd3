//! Tutor service facade over the model gateway.

use std::sync::Arc;
use std::time::Duration;

use super::RigConfig;
use crate::Result;
use crate::gateway::ModelGateway;
use crate::payload::{CodeRewrite, GraphPayload};
use crate::prompt;
use crate::provider::{CompletionBackend, GeminiBackend, GeminiCompletionModel};
use crate::sanitize;

/// Tracing target for tutor service operations.
const TRACING_TARGET: &str = "vistra_rig::service";

/// Inner state for [`TutorService`].
struct TutorServiceInner {
    gateway: ModelGateway,
}

/// Stateless relay service: graph lessons, code rewrites, chat replies.
///
/// Each operation builds a task-specific instruction, pushes it through the
/// fallback gateway, and (for the structured operations) sanitizes and parses
/// the raw response. Cloneable; nothing is retained between requests.
#[derive(Clone)]
pub struct TutorService {
    inner: Arc<TutorServiceInner>,
}

impl TutorService {
    /// Creates a service from configuration, connecting the Gemini backend.
    pub fn from_config(config: &RigConfig) -> Result<Self> {
        let backend = Arc::new(GeminiBackend::new(&config.gemini_api_key)?);
        Self::new(backend, config.fallback_chain(), config.request_timeout())
    }

    /// Creates a service over an arbitrary completion backend.
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        chain: Vec<GeminiCompletionModel>,
        request_timeout: Duration,
    ) -> Result<Self> {
        let gateway = ModelGateway::new(backend, chain, request_timeout)?;
        Ok(Self {
            inner: Arc::new(TutorServiceInner { gateway }),
        })
    }

    /// Returns the first candidate of the fallback chain.
    pub fn primary_model(&self) -> GeminiCompletionModel {
        self.inner.gateway.primary_model()
    }

    /// Generates a graph lesson from a free-text prompt.
    pub async fn generate_graph(&self, prompt_text: &str) -> Result<GraphPayload> {
        tracing::debug!(
            target: TRACING_TARGET,
            prompt_len = prompt_text.len(),
            "Generating graph lesson"
        );

        let raw = self
            .inner
            .gateway
            .call(prompt::GRAPH_PREAMBLE, prompt_text)
            .await?;
        sanitize::parse_structured(&raw)
    }

    /// Rewrites the code for a described system in `language`.
    pub async fn rewrite_code(&self, prompt_text: &str, language: &str) -> Result<CodeRewrite> {
        tracing::debug!(
            target: TRACING_TARGET,
            language = language,
            "Rewriting code snippet"
        );

        let preamble = prompt::rewrite_preamble(language);
        let content = prompt::rewrite_content(prompt_text);
        let raw = self.inner.gateway.call(&preamble, &content).await?;

        let mut rewrite: CodeRewrite = sanitize::parse_structured(&raw)?;
        // The snippet field itself sometimes arrives fenced.
        rewrite.code_snippet = sanitize::strip_code_fences(&rewrite.code_snippet).to_string();
        Ok(rewrite)
    }

    /// Answers a contextual chat question; the reply is raw model text.
    pub async fn chat(&self, message: &str, context: &str) -> Result<String> {
        tracing::debug!(
            target: TRACING_TARGET,
            message_len = message.len(),
            "Answering chat message"
        );

        let preamble = prompt::chat_preamble(context);
        self.inner.gateway.call(&preamble, message).await
    }
}

impl std::fmt::Debug for TutorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TutorService")
            .field("gateway", &self.inner.gateway)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::provider::{DEFAULT_FALLBACK_CHAIN, MockBackend, MockOutcome};

    fn service(backend: Arc<MockBackend>) -> TutorService {
        TutorService::new(
            backend,
            DEFAULT_FALLBACK_CHAIN.to_vec(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    const GRAPH_JSON: &str = r#"{
        "title": "Binary Search",
        "summary": "Halves the search space each step.",
        "explanation": "Compare the target against the middle element.",
        "example_input": "[1, 3, 5], target 5",
        "execution_trace": "mid=3, go right, found 5",
        "code_snippet": "def search(xs, t): ...",
        "code_explanation": "Iterative binary search.",
        "nodes": [{"id": "1", "label": "Compare"}, {"id": "2", "label": "Found"}],
        "edges": [{"source": "1", "target": "2", "label": "match"}]
    }"#;

    #[tokio::test]
    async fn generate_graph_parses_fenced_output() {
        let backend = Arc::new(MockBackend::replying(format!("```json\n{GRAPH_JSON}\n```")));
        let payload = service(backend).generate_graph("binary search").await.unwrap();

        assert_eq!(payload.title, "Binary Search");
        let node_ids: Vec<&str> = payload.nodes.iter().map(|n| n.id.as_str()).collect();
        assert!(node_ids.contains(&payload.edges[0].source.as_str()));
        assert!(node_ids.contains(&payload.edges[0].target.as_str()));
    }

    #[tokio::test]
    async fn generate_graph_rejects_prose() {
        let backend = Arc::new(MockBackend::replying(
            "Sure! A binary search works by halving the interval.",
        ));
        let err = service(backend).generate_graph("binary search").await.unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }

    #[tokio::test]
    async fn rewrite_code_unfences_the_snippet() {
        let backend = Arc::new(MockBackend::replying(
            r#"{"code_snippet": "```go\nfunc reverse(xs []int) {}\n```", "code_explanation": "Reverses a slice in place."}"#,
        ));
        let rewrite = service(backend)
            .rewrite_code("reverse a list", "Go")
            .await
            .unwrap();

        assert!(!rewrite.code_explanation.is_empty());
        assert!(!rewrite.code_snippet.contains("```"));
        assert!(rewrite.code_snippet.contains("func reverse"));
    }

    #[tokio::test]
    async fn chat_returns_raw_text() {
        let backend = Arc::new(MockBackend::replying("It halves the interval each step."));
        let reply = service(backend)
            .chat("why is it fast?", "binary search lesson")
            .await
            .unwrap();
        assert_eq!(reply, "It halves the interval each step.");
    }

    #[tokio::test]
    async fn quota_exhaustion_surfaces_as_exhausted() {
        let backend = Arc::new(MockBackend::new([
            MockOutcome::failure("quota exceeded"),
            MockOutcome::failure("quota exceeded"),
            MockOutcome::failure("quota exceeded"),
            MockOutcome::failure("quota exceeded"),
        ]));
        let err = service(backend).generate_graph("dfa").await.unwrap_err();
        assert!(matches!(err, Error::Exhausted { .. }));
    }
}

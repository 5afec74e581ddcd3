//! Model fallback gateway.
//!
//! Hosted model backends get rate limited and deprecated; trying a short
//! ordered list of alternatives before giving up trades latency for
//! availability. There is no backoff within a candidate: each entry in the
//! chain is a distinct endpoint, not a retry of the same one.

use std::sync::Arc;
use std::time::Duration;

use crate::provider::{CompletionBackend, DEFAULT_FALLBACK_CHAIN, GeminiCompletionModel};
use crate::{Error, Result};

/// Tracing target for gateway operations.
const TRACING_TARGET: &str = "vistra_rig::gateway";

/// Default per-candidate request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues completion requests through an ordered model fallback chain.
///
/// Cheaply cloneable; holds no mutable state between invocations.
#[derive(Clone)]
pub struct ModelGateway {
    backend: Arc<dyn CompletionBackend>,
    chain: Arc<[GeminiCompletionModel]>,
    request_timeout: Duration,
}

impl ModelGateway {
    /// Creates a gateway over `backend` with an explicit candidate chain.
    ///
    /// Fails with a configuration error when `chain` is empty.
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        chain: Vec<GeminiCompletionModel>,
        request_timeout: Duration,
    ) -> Result<Self> {
        if chain.is_empty() {
            return Err(Error::config("model fallback chain is empty"));
        }
        Ok(Self {
            backend,
            chain: chain.into(),
            request_timeout,
        })
    }

    /// Creates a gateway using [`DEFAULT_FALLBACK_CHAIN`].
    pub fn with_default_chain(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend,
            chain: DEFAULT_FALLBACK_CHAIN.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Returns the candidate chain, in try order.
    pub fn chain(&self) -> &[GeminiCompletionModel] {
        &self.chain
    }

    /// Returns the first candidate of the chain.
    pub fn primary_model(&self) -> GeminiCompletionModel {
        self.chain[0]
    }

    /// Tries each candidate in order and returns the first successful
    /// response text.
    ///
    /// Per-candidate failures are logged and explicitly discarded, keeping
    /// only the last one; when the chain is spent the call fails with
    /// [`Error::Exhausted`] carrying that last failure's message.
    pub async fn call(&self, system_instruction: &str, user_content: &str) -> Result<String> {
        let mut last_error: Option<Error> = None;

        for &model in self.chain.iter() {
            let request = self.backend.complete(model, system_instruction, user_content);
            let attempt = tokio::time::timeout(self.request_timeout, request)
                .await
                .unwrap_or_else(|_| {
                    Err(Error::provider(
                        model.as_str(),
                        format!("request timed out after {:?}", self.request_timeout),
                    ))
                });

            match attempt {
                Ok(text) => {
                    tracing::debug!(
                        target: TRACING_TARGET,
                        model = %model,
                        response_len = text.len(),
                        "candidate succeeded"
                    );
                    return Ok(text);
                }
                Err(err) => {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        model = %model,
                        error = %err,
                        "candidate failed, advancing to next"
                    );
                    last_error = Some(err);
                }
            }
        }

        // The chain is non-empty, so at least one failure was recorded.
        let last_error = last_error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "no candidates attempted".to_string());
        Err(Error::exhausted(last_error))
    }
}

impl std::fmt::Debug for ModelGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelGateway")
            .field("chain", &self.chain)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockBackend, MockOutcome};

    fn gateway(backend: Arc<MockBackend>) -> ModelGateway {
        ModelGateway::new(
            backend,
            DEFAULT_FALLBACK_CHAIN.to_vec(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn first_success_short_circuits() {
        let backend = Arc::new(MockBackend::replying("ok"));
        let gateway = gateway(backend.clone());

        let text = gateway.call("system", "user").await.unwrap();
        assert_eq!(text, "ok");
        assert_eq!(backend.calls(), vec![GeminiCompletionModel::Gemini20Flash]);
    }

    #[tokio::test]
    async fn later_candidate_serves_after_failures() {
        let backend = Arc::new(MockBackend::new([
            MockOutcome::failure("429 quota exceeded"),
            MockOutcome::failure("model deprecated"),
            MockOutcome::text("third time lucky"),
        ]));
        let gateway = gateway(backend.clone());

        let text = gateway.call("system", "user").await.unwrap();
        assert_eq!(text, "third time lucky");
        assert_eq!(
            backend.calls(),
            vec![
                GeminiCompletionModel::Gemini20Flash,
                GeminiCompletionModel::Gemini25Flash,
                GeminiCompletionModel::GeminiPro,
            ]
        );
    }

    #[tokio::test]
    async fn exhausted_chain_carries_last_error() {
        let backend = Arc::new(MockBackend::new([
            MockOutcome::failure("quota exceeded"),
            MockOutcome::failure("quota exceeded"),
            MockOutcome::failure("quota exceeded"),
            MockOutcome::failure("service unavailable"),
        ]));
        let gateway = gateway(backend.clone());

        let err = gateway.call("system", "user").await.unwrap_err();
        let Error::Exhausted { last_error } = err else {
            panic!("expected Exhausted, got {err:?}");
        };
        assert!(last_error.contains("service unavailable"));
        assert_eq!(backend.calls().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_candidate_times_out_and_chain_advances() {
        let backend = Arc::new(MockBackend::new([
            MockOutcome::Hang,
            MockOutcome::text("recovered"),
        ]));
        let gateway = gateway(backend.clone());

        let text = gateway.call("system", "user").await.unwrap();
        assert_eq!(text, "recovered");
        assert_eq!(
            backend.calls(),
            vec![
                GeminiCompletionModel::Gemini20Flash,
                GeminiCompletionModel::Gemini25Flash,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fully_stalled_chain_exhausts_with_timeout_error() {
        let backend = Arc::new(MockBackend::new(vec![MockOutcome::Hang; 4]));
        let gateway = gateway(backend.clone());

        let err = gateway.call("system", "user").await.unwrap_err();
        let Error::Exhausted { last_error } = err else {
            panic!("expected Exhausted, got {err:?}");
        };
        assert!(last_error.contains("timed out"));
        assert_eq!(backend.calls().len(), 4);
    }

    #[tokio::test]
    async fn empty_chain_is_a_config_error() {
        let backend = Arc::new(MockBackend::default());
        let err =
            ModelGateway::new(backend, Vec::new(), Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}

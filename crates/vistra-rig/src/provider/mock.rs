//! Scripted completion backend for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::backend::CompletionBackend;
use super::model::GeminiCompletionModel;
use crate::{Error, Result};

/// One scripted outcome for a [`MockBackend`] call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// The call succeeds with this response text.
    Text(String),
    /// The call fails with a provider error carrying this message.
    Failure(String),
    /// The call never resolves; pair with a gateway timeout.
    Hang,
}

impl MockOutcome {
    /// Shorthand for a successful outcome.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Shorthand for a failed outcome.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }
}

/// Completion backend that replays scripted outcomes.
///
/// Outcomes are consumed in order, one per call; the models asked for are
/// recorded so tests can assert which candidates the gateway tried. A call
/// past the end of the script fails, which doubles as a "no wasted calls"
/// assertion.
#[derive(Debug, Default)]
pub struct MockBackend {
    script: Mutex<VecDeque<MockOutcome>>,
    calls: Mutex<Vec<GeminiCompletionModel>>,
}

impl MockBackend {
    /// Creates a backend that replays `script` in order.
    pub fn new(script: impl IntoIterator<Item = MockOutcome>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a backend whose first call succeeds with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::new([MockOutcome::text(text)])
    }

    /// Returns the models that have been asked for, in call order.
    pub fn calls(&self) -> Vec<GeminiCompletionModel> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    async fn complete(
        &self,
        model: GeminiCompletionModel,
        _preamble: &str,
        _prompt: &str,
    ) -> Result<String> {
        self.calls.lock().expect("mock call log poisoned").push(model);

        let outcome = self
            .script
            .lock()
            .expect("mock script poisoned")
            .pop_front();

        match outcome {
            Some(MockOutcome::Text(text)) => Ok(text),
            Some(MockOutcome::Failure(message)) => Err(Error::provider(model.as_str(), message)),
            Some(MockOutcome::Hang) => std::future::pending().await,
            None => Err(Error::provider(model.as_str(), "mock script exhausted")),
        }
    }
}

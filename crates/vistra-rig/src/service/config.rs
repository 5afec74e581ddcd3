//! Configuration for the tutor service.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::gateway::DEFAULT_REQUEST_TIMEOUT;
use crate::provider::{DEFAULT_FALLBACK_CHAIN, GeminiCompletionModel};

/// Configuration for the Gemini-backed tutor service.
///
/// All values are read once at startup and immutable thereafter. The API key
/// is the one required secret; it has no default, so a missing
/// `GEMINI_API_KEY` is a fatal startup error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct RigConfig {
    /// Gemini API key.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "GEMINI_API_KEY", hide_env_values = true)
    )]
    pub gemini_api_key: String,

    /// Ordered model fallback chain override; empty means the built-in chain.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "GEMINI_FALLBACK_MODELS", value_delimiter = ',')
    )]
    #[serde(default)]
    pub fallback_models: Vec<GeminiCompletionModel>,

    /// Per-candidate request timeout in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "GEMINI_REQUEST_TIMEOUT", default_value_t = 30)
    )]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout: u64,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT.as_secs()
}

impl RigConfig {
    /// Creates a configuration with the built-in chain and default timeout.
    pub fn new(gemini_api_key: impl Into<String>) -> Self {
        Self {
            gemini_api_key: gemini_api_key.into(),
            fallback_models: Vec::new(),
            request_timeout: default_request_timeout_secs(),
        }
    }

    /// Returns the effective candidate chain.
    pub fn fallback_chain(&self) -> Vec<GeminiCompletionModel> {
        if self.fallback_models.is_empty() {
            DEFAULT_FALLBACK_CHAIN.to_vec()
        } else {
            self.fallback_models.clone()
        }
    }

    /// Returns the per-candidate timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

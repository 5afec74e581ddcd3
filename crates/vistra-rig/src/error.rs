//! Error types for vistra-rig.

use std::fmt;

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while relaying prompts to the model backend.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Every candidate in the fallback chain failed.
    #[error("all fallback candidates failed: {last_error}")]
    Exhausted {
        /// Message of the last candidate's failure.
        last_error: String,
    },

    /// Model returned text that is not parseable JSON after cleanup.
    #[error("malformed model output: {detail}")]
    Malformed { detail: String },

    /// Provider error (API call failed, rate limited, timed out).
    #[error("provider error: {provider}: {message}")]
    Provider { provider: String, message: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates an exhausted-chain error carrying the last observed failure.
    pub fn exhausted(last_error: impl fmt::Display) -> Self {
        Self::Exhausted {
            last_error: last_error.to_string(),
        }
    }

    /// Creates a malformed-output error.
    pub fn malformed(detail: impl fmt::Display) -> Self {
        Self::Malformed {
            detail: detail.to_string(),
        }
    }

    /// Creates a provider error.
    pub fn provider(provider: impl fmt::Display, message: impl fmt::Display) -> Self {
        Self::Provider {
            provider: provider.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl fmt::Display) -> Self {
        Self::Config(message.to_string())
    }

    /// Returns true if the caller may succeed by retrying later.
    ///
    /// Malformed output is not retryable: the same prompt is likely to
    /// produce the same shape again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Exhausted { .. } | Self::Provider { .. })
    }
}

//! Service configuration.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use vistra_rig::RigConfig;

/// External-collaborator configuration for the server.
///
/// The relay's only collaborator is the hosted Gemini backend; its settings
/// live in [`RigConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Gemini API key, fallback chain, and request timeout.
    #[cfg_attr(feature = "config", clap(flatten))]
    pub rig: RigConfig,
}

impl ServiceConfig {
    /// Creates a configuration around the given rig settings.
    pub fn new(rig: RigConfig) -> Self {
        Self { rig }
    }
}

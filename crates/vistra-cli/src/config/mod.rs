//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── server: ServerConfig    # Host, port, timeouts
//! ├── cors: CorsConfig        # Allowed origins, preflight max age
//! └── service: ServiceConfig  # Gemini API key, fallback chain, timeout
//! ```
//!
//! All configuration can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! # Configure the API key and server port
//! vistra --gemini-api-key "..." --port 8000
//!
//! # Or via environment variables
//! GEMINI_API_KEY="..." PORT=8000 vistra
//! ```

mod server;

use clap::Parser;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;
use vistra_server::middleware::CorsConfig;
use vistra_server::service::ServiceConfig;

use crate::TRACING_TARGET_CONFIG;

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "vistra")]
#[command(about = "Prompt-to-graph tutor relay server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// CORS middleware configuration.
    #[clap(flatten)]
    pub cors: CorsConfig,

    /// External service configuration (Gemini backend).
    #[clap(flatten)]
    pub service: ServiceConfig,
}

impl Cli {
    /// Logs the effective non-secret configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            host = %self.server.host,
            port = self.server.port,
            request_timeout_secs = self.server.request_timeout,
            shutdown_timeout_secs = self.server.shutdown_timeout,
            "server configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            cors_origins = ?self.cors.allowed_origins,
            fallback_models = ?self.service.rig.fallback_chain(),
            gemini_timeout_secs = self.service.rig.request_timeout,
            "relay configuration"
        );
    }
}

//! Application state and service configuration.

mod config;
mod state;

pub use config::ServiceConfig;
pub use state::ServiceState;

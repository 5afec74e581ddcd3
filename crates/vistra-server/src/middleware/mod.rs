//! Middleware for `axum::Router` and HTTP request processing.

mod cors;
mod timeout;

pub use cors::{CorsConfig, create_cors_layer};
pub use timeout::RouterTimeoutExt;

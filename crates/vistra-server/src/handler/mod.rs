//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod chat;
mod error;
mod graphs;
mod monitors;
mod request;
mod response;

use axum::Router;

pub use crate::handler::error::{Error, Result};
pub use crate::handler::response::ErrorResponse;
use crate::service::ServiceState;

/// Returns a [`Router`] with all routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .merge(monitors::routes())
        .merge(graphs::routes())
        .merge(chat::routes())
}

//! Health check handler.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use vistra_rig::TutorService;

use crate::handler::response::HealthStatus;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "vistra_server::handler::monitors";

/// Returns basic service health plus the primary model identifier.
///
/// There is no dependency probing here: the only collaborator is the hosted
/// model API and its availability is discovered per request by the fallback
/// chain.
#[tracing::instrument(skip_all)]
async fn health_status(State(tutor_service): State<TutorService>) -> Json<HealthStatus> {
    tracing::debug!(target: TRACING_TARGET, "Health status requested");

    Json(HealthStatus {
        status: "online".to_string(),
        model: tutor_service.primary_model().to_string(),
    })
}

/// Returns a [`Router`] with the health route.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/", get(health_status))
}

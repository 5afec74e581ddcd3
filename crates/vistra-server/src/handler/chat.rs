//! Contextual chat handler.
//!
//! Chat is stateless: every call carries the full context string, and the
//! reply is raw model text, never run through the sanitizer.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use validator::Validate;
use vistra_rig::TutorService;

use crate::handler::Result;
use crate::handler::request::ChatMessage;
use crate::handler::response::ChatReply;
use crate::service::ServiceState;

/// Tracing target for chat operations.
const TRACING_TARGET: &str = "vistra_server::handler::chat";

/// Answers a question about the currently displayed graph.
#[tracing::instrument(skip_all)]
async fn chat(
    State(tutor_service): State<TutorService>,
    Json(request): Json<ChatMessage>,
) -> Result<Json<ChatReply>> {
    request.validate()?;

    tracing::debug!(target: TRACING_TARGET, "Answering chat message");
    let reply = tutor_service.chat(&request.message, &request.context).await?;

    tracing::info!(
        target: TRACING_TARGET,
        reply_len = reply.len(),
        "Chat message answered",
    );
    Ok(Json(ChatReply { reply }))
}

/// Returns a [`Router`] with the chat route.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/chat", post(chat))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use vistra_rig::provider::{MockBackend, MockOutcome};

    use crate::handler::response::ChatReply;
    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn chat_returns_raw_reply() -> anyhow::Result<()> {
        let backend = MockBackend::replying("It halves the interval each step.");
        let server = create_test_server(backend)?;

        let response = server
            .post("/chat")
            .json(&json!({
                "message": "why is it fast?",
                "context": "binary search lesson"
            }))
            .await;
        response.assert_status_ok();

        let reply = response.json::<ChatReply>();
        assert_eq!(reply.reply, "It halves the interval each step.");
        Ok(())
    }

    #[tokio::test]
    async fn chat_returns_429_when_chain_is_exhausted() -> anyhow::Result<()> {
        let backend = MockBackend::new([
            MockOutcome::failure("server busy"),
            MockOutcome::failure("server busy"),
            MockOutcome::failure("server busy"),
            MockOutcome::failure("server busy"),
        ]);
        let server = create_test_server(backend)?;

        let response = server
            .post("/chat")
            .json(&json!({"message": "hello", "context": ""}))
            .await;
        response.assert_status(StatusCode::TOO_MANY_REQUESTS);
        Ok(())
    }

    #[tokio::test]
    async fn chat_requires_context_field() -> anyhow::Result<()> {
        let server = create_test_server(MockBackend::default())?;

        let response = server.post("/chat").json(&json!({"message": "hello"})).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        Ok(())
    }

    #[tokio::test]
    async fn chat_rejects_empty_message() -> anyhow::Result<()> {
        let server = create_test_server(MockBackend::default())?;

        let response = server
            .post("/chat")
            .json(&json!({"message": "", "context": ""}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }
}

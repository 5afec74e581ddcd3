//! Graph lesson and code rewrite handlers.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use validator::Validate;
use vistra_rig::TutorService;

use crate::handler::Result;
use crate::handler::request::{GenerateGraph, RegenerateCode};
use crate::handler::response::{CodeRewrite, GraphPayload};
use crate::service::ServiceState;

/// Tracing target for graph operations.
const TRACING_TARGET: &str = "vistra_server::handler::graphs";

/// Generates a graph lesson from a free-text prompt.
#[tracing::instrument(skip_all)]
async fn generate_graph(
    State(tutor_service): State<TutorService>,
    Json(request): Json<GenerateGraph>,
) -> Result<Json<GraphPayload>> {
    request.validate()?;

    tracing::debug!(target: TRACING_TARGET, "Generating graph lesson");
    let payload = tutor_service.generate_graph(&request.prompt).await?;

    tracing::info!(
        target: TRACING_TARGET,
        title = %payload.title,
        nodes = payload.nodes.len(),
        edges = payload.edges.len(),
        "Graph lesson generated",
    );
    Ok(Json(payload))
}

/// Rewrites the described system's code in the requested language.
#[tracing::instrument(skip_all, fields(language = %request.language))]
async fn regenerate_code(
    State(tutor_service): State<TutorService>,
    Json(request): Json<RegenerateCode>,
) -> Result<Json<CodeRewrite>> {
    request.validate()?;

    tracing::debug!(target: TRACING_TARGET, "Rewriting code snippet");
    let rewrite = tutor_service
        .rewrite_code(&request.prompt, &request.language)
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        snippet_len = rewrite.code_snippet.len(),
        "Code snippet rewritten",
    );
    Ok(Json(rewrite))
}

/// Returns a [`Router`] with the graph generation routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/generate", post(generate_graph))
        .route("/regenerate_code", post(regenerate_code))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use vistra_rig::provider::{MockBackend, MockOutcome};

    use crate::handler::response::{CodeRewrite, ErrorResponse, GraphPayload};
    use crate::handler::test::create_test_server;

    const GRAPH_JSON: &str = r#"{
        "title": "Binary Search",
        "summary": "Halves the search space each step.",
        "explanation": "Compare the target against the middle element.",
        "example_input": "[1, 3, 5], target 5",
        "execution_trace": "mid=3, go right, found 5",
        "code_snippet": "def search(xs, t): ...",
        "code_explanation": "Iterative binary search.",
        "nodes": [{"id": "1", "label": "Compare"}, {"id": "2", "label": "Found"}],
        "edges": [{"source": "1", "target": "2"}]
    }"#;

    #[tokio::test]
    async fn generate_parses_fenced_model_output() -> anyhow::Result<()> {
        let backend = MockBackend::replying(format!("```json\n{GRAPH_JSON}\n```"));
        let server = create_test_server(backend)?;

        let response = server
            .post("/generate")
            .json(&json!({"prompt": "binary search"}))
            .await;
        response.assert_status_ok();

        let payload = response.json::<GraphPayload>();
        let node_ids: Vec<&str> = payload.nodes.iter().map(|n| n.id.as_str()).collect();
        assert!(node_ids.contains(&payload.edges[0].source.as_str()));
        assert!(node_ids.contains(&payload.edges[0].target.as_str()));
        Ok(())
    }

    #[tokio::test]
    async fn generate_returns_429_when_chain_is_exhausted() -> anyhow::Result<()> {
        let backend = MockBackend::new([
            MockOutcome::failure("quota exceeded"),
            MockOutcome::failure("quota exceeded"),
            MockOutcome::failure("quota exceeded"),
            MockOutcome::failure("quota exceeded"),
        ]);
        let server = create_test_server(backend)?;

        let response = server
            .post("/generate")
            .json(&json!({"prompt": "binary search"}))
            .await;
        response.assert_status(StatusCode::TOO_MANY_REQUESTS);

        let body = response.json::<ErrorResponse>();
        assert!(body.detail.contains("quota exceeded"));
        Ok(())
    }

    #[tokio::test]
    async fn generate_returns_500_on_prose_output() -> anyhow::Result<()> {
        let backend = MockBackend::replying("A binary search halves the interval each step.");
        let server = create_test_server(backend)?;

        let response = server
            .post("/generate")
            .json(&json!({"prompt": "binary search"}))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.json::<ErrorResponse>();
        assert!(body.detail.contains("malformed model output"));
        Ok(())
    }

    #[tokio::test]
    async fn generate_rejects_empty_prompt() -> anyhow::Result<()> {
        let server = create_test_server(MockBackend::default())?;

        let response = server.post("/generate").json(&json!({"prompt": ""})).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn regenerate_code_strips_fence_tokens() -> anyhow::Result<()> {
        let backend = MockBackend::replying(
            r#"{"code_snippet": "```go\nfunc reverse(xs []int) {}\n```", "code_explanation": "Reverses a slice in place."}"#,
        );
        let server = create_test_server(backend)?;

        let response = server
            .post("/regenerate_code")
            .json(&json!({"prompt": "reverse a list", "language": "Go"}))
            .await;
        response.assert_status_ok();

        let rewrite = response.json::<CodeRewrite>();
        assert!(!rewrite.code_explanation.is_empty());
        assert!(!rewrite.code_snippet.contains("```"));
        Ok(())
    }
}

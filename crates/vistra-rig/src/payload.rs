//! Typed payloads expected from the model's JSON output.
//!
//! Field names here are the wire contract with the graph-editing frontend,
//! so everything stays snake_case and optional fields carry serde defaults
//! rather than `Option`s.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A complete graph lesson: the diagram plus its textual walkthrough.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GraphPayload {
    /// Short title of the visualized system.
    pub title: String,
    /// One-sentence executive summary.
    pub summary: String,
    /// Educational explanation of the system's logic.
    pub explanation: String,
    /// A sample input for the system.
    pub example_input: String,
    /// Step-by-step trace of how the system processes the sample input.
    pub execution_trace: String,
    /// Code implementation of the system.
    pub code_snippet: String,
    /// Brief description of the code; the model omits it for some tasks.
    #[serde(default)]
    pub code_explanation: String,
    /// Diagram nodes, in presentation order.
    pub nodes: Vec<Node>,
    /// Diagram edges, in presentation order.
    pub edges: Vec<Edge>,
}

/// A single diagram node.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Node {
    /// Identifier, unique within one payload.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Frontend node kind.
    #[serde(rename = "type", default = "default_node_type")]
    pub node_type: String,
}

fn default_node_type() -> String {
    "default".to_string()
}

/// A directed edge between two nodes of the same payload.
///
/// `source` and `target` are expected to reference node ids; that referential
/// integrity is a contract on the model's output, not something this service
/// validates.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Edge {
    /// Id of the node this edge starts at.
    pub source: String,
    /// Id of the node this edge points to.
    pub target: String,
    /// Optional display label.
    #[serde(default)]
    pub label: String,
}

/// Result of rewriting a code snippet in another language.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CodeRewrite {
    /// The rewritten code.
    pub code_snippet: String,
    /// A short sentence describing the implementation.
    pub code_explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_type_defaults_when_missing() {
        let node: Node = serde_json::from_str(r#"{"id": "1", "label": "Start"}"#).unwrap();
        assert_eq!(node.node_type, "default");
    }

    #[test]
    fn node_type_uses_wire_name() {
        let node: Node =
            serde_json::from_str(r#"{"id": "q0", "label": "Start", "type": "input"}"#).unwrap();
        assert_eq!(node.node_type, "input");

        let wire = serde_json::to_value(&node).unwrap();
        assert_eq!(wire["type"], "input");
    }

    #[test]
    fn edge_label_defaults_to_empty() {
        let edge: Edge = serde_json::from_str(r#"{"source": "1", "target": "2"}"#).unwrap();
        assert_eq!(edge.label, "");
    }

    #[test]
    fn graph_payload_tolerates_missing_code_explanation() {
        let payload: GraphPayload = serde_json::from_str(
            r#"{
                "title": "Binary Search",
                "summary": "Halves the search space each step.",
                "explanation": "Compare against the middle element.",
                "example_input": "[1, 3, 5], target 5",
                "execution_trace": "mid=3, go right, found 5",
                "code_snippet": "def search(xs, t): ...",
                "nodes": [{"id": "1", "label": "Start"}],
                "edges": []
            }"#,
        )
        .unwrap();
        assert_eq!(payload.code_explanation, "");
        assert_eq!(payload.nodes.len(), 1);
    }
}

//! Prompt construction for the three relay operations.
//!
//! User-supplied values (prompt, language, context) are embedded verbatim;
//! no escaping happens here beyond what JSON serialization provides on the
//! transport.

/// Preamble for graph lesson generation.
pub const GRAPH_PREAMBLE: &str = "\
You are an Expert Computer Science Professor. Output JSON containing a graph, lesson, and Python code.
STRICT JSON STRUCTURE:
{
  \"nodes\": [{\"id\": \"q0\", \"label\": \"Start\", \"type\": \"default\"}],
  \"edges\": [{\"source\": \"q0\", \"target\": \"q1\", \"label\": \"0\"}],
  \"title\": \"Short Title\",
  \"summary\": \"1-sentence summary.\",
  \"explanation\": \"Educational paragraph.\",
  \"example_input\": \"Example input\",
  \"execution_trace\": \"Step-by-step trace\",
  \"code_snippet\": \"Python code implementation.\",
  \"code_explanation\": \"Brief description of the code.\"
}
RULES: Output ONLY valid JSON. Node ids must be strings and edge source/target must match node ids. Escape newlines in code_snippet.";

/// Builds the preamble for rewriting code in `language`.
pub fn rewrite_preamble(language: &str) -> String {
    format!(
        "You are an Expert Coder.\n\
         1. Implement the logic described in the user prompt using {language}.\n\
         2. Output ONLY a JSON object with two fields: \"code_snippet\" and \"code_explanation\".\n\
         STRICT JSON STRUCTURE:\n\
         {{\n\
           \"code_snippet\": \"The executable {language} code. Use \\\\n for newlines.\",\n\
           \"code_explanation\": \"A short sentence explaining this {language} implementation.\"\n\
         }}"
    )
}

/// Wraps the user prompt for the code rewrite operation.
pub fn rewrite_content(prompt: &str) -> String {
    format!("Logic to implement: {prompt}")
}

/// Builds the tutor preamble around the current graph's context string.
pub fn chat_preamble(context: &str) -> String {
    format!(
        "You are a friendly and helpful AI Tutor.\n\
         The student is looking at a graph visualization with this context: \"{context}\".\n\
         Answer their specific question clearly and concisely.\n\
         Keep the response short (under 3 sentences) so it fits in a chat bubble."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrite_preamble_names_the_language() {
        let preamble = rewrite_preamble("Go");
        assert!(preamble.contains("using Go"));
        assert!(preamble.contains("code_snippet"));
        assert!(preamble.contains("code_explanation"));
    }

    #[test]
    fn chat_preamble_embeds_context_verbatim() {
        let preamble = chat_preamble("DFA accepting even binary strings");
        assert!(preamble.contains("DFA accepting even binary strings"));
    }
}

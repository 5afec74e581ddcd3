//! Model output cleanup and structured parsing.
//!
//! The upstream model is instructed to emit raw JSON but is not a guaranteed
//! conforming producer: it sometimes wraps its answer in a fenced code block,
//! optionally tagged with a language name. This module is the single point
//! absorbing that mismatch. Cleanup is limited to stripping the fence wrapper;
//! there is no brace balancing or quote fixing, so failures stay diagnosable
//! instead of being silently repaired into something incorrect.

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Fence marker token used by markdown-flavored model output.
const FENCE: &str = "```";

/// Upper bound on the diagnostic excerpt embedded in parse errors.
const EXCERPT_LEN: usize = 256;

/// Strips a fenced-code wrapper from `raw`, returning the inner text.
///
/// Removes a leading ``` marker with an optional language tag ("json",
/// "python", a target-language name) and a trailing ``` marker, then trims
/// surrounding whitespace. Input without a wrapper comes back unchanged
/// apart from trimming.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix(FENCE) {
        text = strip_language_tag(rest).trim_start();
    }
    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest.trim_end();
    }
    text
}

/// Drops a language tag directly following an opening fence marker.
fn strip_language_tag(text: &str) -> &str {
    let tag_end = text
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '-' | '_')))
        .unwrap_or(text.len());
    &text[tag_end..]
}

/// Parses model output as JSON after stripping fence artifacts.
///
/// Fails with [`Error::Malformed`] when the cleaned text is not valid JSON
/// for `T`; the error carries a bounded excerpt of the cleaned text for
/// diagnosis.
pub fn parse_structured<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(cleaned)
        .map_err(|err| Error::malformed(format!("{err}: {}", excerpt(cleaned))))
}

/// Returns the first [`EXCERPT_LEN`] characters of `text`.
fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_LEN {
        text.to_string()
    } else {
        let cut: String = text.chars().take(EXCERPT_LEN).collect();
        format!("{cut}…")
    }
}

//! Type-safe Gemini completion model references.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Google Gemini completion models eligible for the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum GeminiCompletionModel {
    /// Gemini 2.0 Flash (fast, cheap)
    #[serde(rename = "gemini-2.0-flash")]
    #[strum(serialize = "gemini-2.0-flash")]
    Gemini20Flash,
    /// Gemini 2.5 Flash (newer, fast)
    #[serde(rename = "gemini-2.5-flash")]
    #[strum(serialize = "gemini-2.5-flash")]
    Gemini25Flash,
    /// Gemini Pro (conservative fallback)
    #[serde(rename = "gemini-pro")]
    #[strum(serialize = "gemini-pro")]
    GeminiPro,
    /// Gemini 1.5 Flash (last resort)
    #[serde(rename = "gemini-1.5-flash")]
    #[strum(serialize = "gemini-1.5-flash")]
    Gemini15Flash,
}

/// Default fallback chain: fastest and cheapest first, progressively more
/// conservative candidates last.
pub const DEFAULT_FALLBACK_CHAIN: [GeminiCompletionModel; 4] = [
    GeminiCompletionModel::Gemini20Flash,
    GeminiCompletionModel::Gemini25Flash,
    GeminiCompletionModel::GeminiPro,
    GeminiCompletionModel::Gemini15Flash,
];

impl GeminiCompletionModel {
    /// Returns the model identifier string the API expects.
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for model in DEFAULT_FALLBACK_CHAIN {
            assert_eq!(GeminiCompletionModel::from_str(model.as_str()), Ok(model));
        }
    }

    #[test]
    fn serde_names_match_strum_identifiers() {
        for model in DEFAULT_FALLBACK_CHAIN {
            let wire = serde_json::to_value(model).unwrap();
            assert_eq!(wire, serde_json::json!(model.as_str()));

            let back: GeminiCompletionModel = serde_json::from_value(wire).unwrap();
            assert_eq!(back, model);
        }
    }

    #[test]
    fn chain_starts_with_the_fastest_model() {
        assert_eq!(
            DEFAULT_FALLBACK_CHAIN[0].as_str(),
            "gemini-2.0-flash",
        );
    }
}

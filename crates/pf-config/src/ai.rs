//! Generative-AI provider configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    String::from("gemini-2.5-flash")
}

fn default_base_url() -> String {
    String::from("https://generativelanguage.googleapis.com")
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    /// Provider API key (`API_KEY`). Empty disables `/api/ai/insights`.
    #[serde(default)]
    pub api_key: String,

    /// Model name (`GEMINI_MODEL`).
    #[serde(default = "default_model")]
    pub model: String,

    /// Provider endpoint root. Overridable so tests can point at a local stub.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout for provider calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AiConfig {
    /// Check if the provider can be called.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = AiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn blank_key_is_not_configured() {
        let config = AiConfig {
            api_key: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}

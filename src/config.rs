//! Environment-driven configuration for the debate coach.

use std::env;

use crate::error::LlmError;
use crate::llm::DEFAULT_MODELS;

/// Environment variable holding the OpenRouter API key.
pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";

/// Environment variable overriding the OpenRouter base URL.
pub const BASE_URL_VAR: &str = "DEBATE_COACH_BASE_URL";

/// Environment variable overriding the fallback model chain,
/// comma-separated in priority order.
pub const MODELS_VAR: &str = "DEBATE_COACH_MODELS";

/// Runtime configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct CoachConfig {
    /// OpenRouter API key.
    pub api_key: String,
    /// Base URL override, `None` for the OpenRouter default.
    pub base_url: Option<String>,
    /// Ordered fallback model chain.
    pub models: Vec<String>,
}

impl CoachConfig {
    /// Create a config with the default model chain and base URL.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: None,
            models: default_models(),
        }
    }

    /// Create a configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `OPENROUTER_API_KEY`: API key for authentication (required)
    /// - `DEBATE_COACH_BASE_URL`: Base URL override (optional)
    /// - `DEBATE_COACH_MODELS`: Comma-separated model chain override (optional)
    ///
    /// # Errors
    ///
    /// Returns `LlmError::MissingApiKey` if `OPENROUTER_API_KEY` is not set.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| LlmError::MissingApiKey)?;
        let base_url = env::var(BASE_URL_VAR).ok();
        let models = env::var(MODELS_VAR)
            .ok()
            .map(|spec| parse_model_list(&spec))
            .filter(|models| !models.is_empty())
            .unwrap_or_else(default_models);

        Ok(Self {
            api_key,
            base_url,
            models,
        })
    }

    /// Replace the model chain, keeping order of preference.
    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }
}

/// Parse a comma-separated model list, dropping blank entries.
fn parse_model_list(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect()
}

fn default_models() -> Vec<String> {
    DEFAULT_MODELS.iter().map(|m| m.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_chain() {
        let config = CoachConfig::new("test-key".to_string());

        assert_eq!(config.api_key, "test-key");
        assert!(config.base_url.is_none());
        assert_eq!(config.models.len(), DEFAULT_MODELS.len());
        assert_eq!(config.models[0], DEFAULT_MODELS[0]);
    }

    #[test]
    fn test_parse_model_list_trims_and_drops_blanks() {
        let models = parse_model_list(" model-a , model-b ,, model-c ");
        assert_eq!(models, vec!["model-a", "model-b", "model-c"]);

        assert!(parse_model_list("  ,  ").is_empty());
    }

    #[test]
    fn test_with_models_overrides_chain() {
        let config = CoachConfig::new("test-key".to_string())
            .with_models(vec!["only-model".to_string()]);

        assert_eq!(config.models, vec!["only-model"]);
    }
}

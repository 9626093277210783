//! Ordered model fallback over a single chat provider.
//!
//! The coaching flows must keep answering even when individual models are
//! overloaded or decommissioned, so every completion walks an ordered list
//! of models and settles for the first one that returns usable text.

use std::sync::Arc;
use std::time::Duration;

use crate::error::LlmError;
use crate::llm::{ChatProvider, ChatRequest, Message};

/// Models tried in order when none are configured explicitly.
///
/// Ordered strongest-first: quality degrades gracefully as earlier models
/// fail, instead of the whole feature going dark.
pub const DEFAULT_MODELS: [&str; 3] = [
    "anthropic/claude-opus-4-1-20250805",
    "anthropic/claude-sonnet-4-20250514",
    "anthropic/claude-3-5-haiku-20241022",
];

/// Fixed delay between consecutive model attempts in milliseconds.
const ATTEMPT_DELAY_MS: u64 = 1000;

/// Sampling parameters applied to every request in a chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// Sampling temperature.
    pub temperature: f64,
    /// Maximum number of tokens to generate.
    pub max_tokens: u32,
    /// Nucleus sampling parameter.
    pub top_p: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            max_tokens: 400,
            top_p: 0.95,
        }
    }
}

impl SamplingParams {
    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the nucleus sampling parameter.
    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }
}

/// Walks an ordered model list until one returns a non-empty completion.
///
/// Each model gets exactly one attempt per request. A completion that
/// arrives without error but carries only whitespace counts as a failure,
/// since a blank coaching reply is as useless to the student as a timeout.
pub struct FallbackChain {
    /// Provider that executes individual attempts.
    provider: Arc<dyn ChatProvider>,
    /// Models to try, in order of preference.
    models: Vec<String>,
    /// Delay inserted before each attempt after the first.
    attempt_delay: Duration,
}

impl FallbackChain {
    /// Create a chain over the default model list.
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self::with_models(
            provider,
            DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        )
    }

    /// Create a chain over an explicit ordered model list.
    pub fn with_models(provider: Arc<dyn ChatProvider>, models: Vec<String>) -> Self {
        Self {
            provider,
            models,
            attempt_delay: Duration::from_millis(ATTEMPT_DELAY_MS),
        }
    }

    /// Override the delay between attempts. Tests pass `Duration::ZERO`.
    pub fn with_attempt_delay(mut self, attempt_delay: Duration) -> Self {
        self.attempt_delay = attempt_delay;
        self
    }

    /// Get the ordered model list.
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Complete the conversation, falling through the model list until one
    /// produces usable text.
    ///
    /// Returns the first non-blank completion content. Errors only when
    /// every model has failed, with the last failure preserved for
    /// diagnostics.
    pub async fn complete_text(
        &self,
        messages: Vec<Message>,
        params: &SamplingParams,
    ) -> Result<String, LlmError> {
        let mut last_error: Option<LlmError> = None;

        for (attempt, model) in self.models.iter().enumerate() {
            if attempt > 0 {
                tokio::time::sleep(self.attempt_delay).await;
                tracing::debug!(
                    model = %model,
                    attempt = attempt + 1,
                    "Falling back to next model"
                );
            }

            let request = ChatRequest::new(model.clone(), messages.clone())
                .with_temperature(params.temperature)
                .with_max_tokens(params.max_tokens)
                .with_top_p(params.top_p);

            match self.provider.complete(request).await {
                Ok(response) => match response.first_content() {
                    Some(content) if !content.trim().is_empty() => {
                        return Ok(content.to_string());
                    }
                    _ => {
                        let err = LlmError::EmptyCompletion(model.clone());
                        tracing::warn!(
                            model = %model,
                            error = %err,
                            "Model failed, trying next in fallback chain"
                        );
                        last_error = Some(err);
                    }
                },
                Err(e) => {
                    tracing::warn!(
                        model = %model,
                        error = %e,
                        "Model failed, trying next in fallback chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(LlmError::ModelsExhausted {
            attempts: self.models.len(),
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no models configured".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ScriptedProvider;

    fn chain_over(provider: Arc<ScriptedProvider>, models: &[&str]) -> FallbackChain {
        FallbackChain::with_models(provider, models.iter().map(|m| m.to_string()).collect())
            .with_attempt_delay(Duration::ZERO)
    }

    #[test]
    fn test_default_models() {
        let provider = Arc::new(ScriptedProvider::constant("ok"));
        let chain = FallbackChain::new(provider);

        assert_eq!(chain.models().len(), 3);
        assert_eq!(chain.models()[0], DEFAULT_MODELS[0]);
    }

    #[test]
    fn test_sampling_params_defaults() {
        let params = SamplingParams::default();

        assert_eq!(params.temperature, 0.8);
        assert_eq!(params.max_tokens, 400);
        assert_eq!(params.top_p, 0.95);
    }

    #[tokio::test]
    async fn test_first_model_succeeds_with_single_call() {
        let provider = Arc::new(ScriptedProvider::constant("strong opening"));
        let chain = chain_over(Arc::clone(&provider), &["model-a", "model-b", "model-c"]);

        let text = chain
            .complete_text(vec![Message::user("go")], &SamplingParams::default())
            .await
            .expect("first model should succeed");

        assert_eq!(text, "strong opening");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_falls_through_to_third_model() {
        let provider = Arc::new(ScriptedProvider::flaky(2, vec!["recovered".to_string()]));
        let chain = chain_over(Arc::clone(&provider), &["model-a", "model-b", "model-c"]);

        let text = chain
            .complete_text(vec![Message::user("go")], &SamplingParams::default())
            .await
            .expect("third model should succeed");

        assert_eq!(text, "recovered");
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test]
    async fn test_exhausts_all_models_exactly_once() {
        let provider = Arc::new(ScriptedProvider::failing("simulated outage"));
        let chain = chain_over(Arc::clone(&provider), &["model-a", "model-b", "model-c"]);

        let result = chain
            .complete_text(vec![Message::user("go")], &SamplingParams::default())
            .await;

        assert_eq!(provider.calls(), 3);
        match result {
            Err(LlmError::ModelsExhausted {
                attempts,
                last_error,
            }) => {
                assert_eq!(attempts, 3);
                assert!(last_error.contains("simulated outage"));
            }
            other => panic!("expected ModelsExhausted, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_blank_completion_counts_as_failure() {
        let provider = Arc::new(ScriptedProvider::constant("   "));
        let chain = chain_over(Arc::clone(&provider), &["model-a", "model-b"]);

        let result = chain
            .complete_text(vec![Message::user("go")], &SamplingParams::default())
            .await;

        assert_eq!(provider.calls(), 2);
        match result {
            Err(LlmError::ModelsExhausted { last_error, .. }) => {
                assert!(last_error.contains("empty completion"));
            }
            other => panic!("expected ModelsExhausted, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_empty_model_list() {
        let provider = Arc::new(ScriptedProvider::constant("unreachable"));
        let chain = chain_over(Arc::clone(&provider), &[]);

        let result = chain
            .complete_text(vec![Message::user("go")], &SamplingParams::default())
            .await;

        assert_eq!(provider.calls(), 0);
        match result {
            Err(LlmError::ModelsExhausted {
                attempts,
                last_error,
            }) => {
                assert_eq!(attempts, 0);
                assert!(last_error.contains("no models configured"));
            }
            other => panic!("expected ModelsExhausted, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_padded_content_returned_unmodified() {
        let provider = Arc::new(ScriptedProvider::constant("  padded reply  "));
        let chain = chain_over(provider, &["model-a"]);

        let text = chain
            .complete_text(vec![Message::user("go")], &SamplingParams::default())
            .await
            .expect("padded content is usable");

        assert_eq!(text, "  padded reply  ");
    }
}

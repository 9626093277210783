//! OpenRouter client implementation.
//!
//! OpenRouter provides a unified API for accessing multiple LLM providers
//! through a single endpoint, which is what makes ordered model fallback
//! possible with a single credential.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::LlmError;
use crate::llm::{ChatProvider, ChatRequest, ChatResponse, Choice, Message, Usage};

/// Default OpenRouter API endpoint.
const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Request timeout in seconds.
///
/// Kept short because every coaching call races a user waiting at a prompt
/// and a failed model is retried on the next one in the chain anyway.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Referer reported to OpenRouter for app attribution.
const APP_REFERER: &str = "https://debate-coach.local";

/// Application title reported to OpenRouter.
const APP_TITLE: &str = "Digital Debate Coach";

/// OpenRouter client for chat completions.
///
/// This client implements the `ChatProvider` trait with exactly one HTTP
/// attempt per call. It deliberately has no default model: the model is
/// always chosen by the caller, normally a `FallbackChain` walking its
/// ordered model list.
pub struct OpenRouterClient {
    /// HTTP client for making API requests.
    client: Client,
    /// API key for OpenRouter authentication.
    api_key: String,
    /// Base URL for the OpenRouter API.
    base_url: String,
}

impl OpenRouterClient {
    /// Create a new OpenRouter client with the given API key.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENROUTER_BASE_URL.to_string())
    }

    /// Create a new OpenRouter client with a custom base URL.
    ///
    /// Useful for testing or OpenRouter-compatible proxies.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client - system TLS configuration error"),
            api_key,
            base_url,
        }
    }

    /// Get the API key (for debugging, returns masked value).
    pub fn api_key_masked(&self) -> String {
        if self.api_key.len() <= 8 {
            "*".repeat(self.api_key.len())
        } else {
            format!(
                "{}...{}",
                &self.api_key[..4],
                &self.api_key[self.api_key.len() - 4..]
            )
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a single chat completion request.
    async fn execute_request(&self, request: &ApiRequest) -> Result<ChatResponse, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);

        let http_response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("HTTP-Referer", APP_REFERER)
            .header("X-Title", APP_TITLE)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = http_response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = http_response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());

            // Try to parse structured error response
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
                return Err(match status_code {
                    429 => LlmError::RateLimited(error_response.error.message),
                    404 => LlmError::ModelUnavailable(error_response.error.message),
                    code => LlmError::ApiError {
                        code,
                        message: error_response.error.message,
                    },
                });
            }

            return Err(LlmError::ApiError {
                code: status_code,
                message: error_text,
            });
        }

        let api_response: ApiResponse = http_response
            .json()
            .await
            .map_err(|e| LlmError::ParseError(format!("Failed to parse API response: {}", e)))?;

        let choices = api_response
            .choices
            .into_iter()
            .map(|choice| Choice {
                index: choice.index,
                message: Message {
                    role: choice.message.role,
                    content: choice.message.content,
                },
                finish_reason: choice.finish_reason.unwrap_or_else(|| "stop".to_string()),
            })
            .collect();

        let usage = api_response.usage.unwrap_or_default();

        Ok(ChatResponse {
            id: api_response.id,
            model: api_response.model,
            choices,
            usage: Usage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            },
        })
    }
}

#[async_trait]
impl ChatProvider for OpenRouterClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        let api_request = ApiRequest {
            model: request.model,
            messages: request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            top_p: request.top_p,
        };

        self.execute_request(&api_request).await
    }
}

/// Internal request structure for the OpenRouter API.
#[derive(Debug, Clone, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
}

/// Internal response structure from the OpenRouter API.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    id: String,
    model: String,
    choices: Vec<ApiChoice>,
    usage: Option<ApiUsage>,
}

/// Internal choice structure from the API response.
#[derive(Debug, Deserialize)]
struct ApiChoice {
    index: u32,
    message: ApiMessage,
    finish_reason: Option<String>,
}

/// Internal message structure from the API response.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    role: String,
    content: String,
}

/// Internal usage structure from the API response.
#[derive(Debug, Default, Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Error response from the API.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

/// Error detail from the API.
#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openrouter_client_new() {
        let client = OpenRouterClient::new("test-api-key".to_string());

        assert_eq!(client.base_url(), OPENROUTER_BASE_URL);
        assert_eq!(client.api_key_masked(), "test...-key");
    }

    #[test]
    fn test_openrouter_client_with_base_url() {
        let client = OpenRouterClient::with_base_url(
            "test-key".to_string(),
            "https://custom.api.com/v1".to_string(),
        );

        assert_eq!(client.base_url(), "https://custom.api.com/v1");
    }

    #[test]
    fn test_api_key_masked_short() {
        let client = OpenRouterClient::new("abc".to_string());
        assert_eq!(client.api_key_masked(), "***");
    }

    #[test]
    fn test_api_key_masked_normal() {
        let client = OpenRouterClient::new("sk-1234567890abcdef".to_string());
        assert_eq!(client.api_key_masked(), "sk-1...cdef");
    }

    #[tokio::test]
    async fn test_complete_connection_error() {
        let client = OpenRouterClient::with_base_url(
            "test-key".to_string(),
            "http://localhost:65535".to_string(),
        );

        let request = ChatRequest::new("test-model", vec![Message::user("test")]);
        let result = client.complete(request).await;

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, LlmError::RequestFailed(_)));
    }

    #[test]
    fn test_api_request_serialization() {
        let request = ApiRequest {
            model: "test-model".to_string(),
            messages: vec![Message::user("Hello")],
            temperature: Some(0.8),
            max_tokens: Some(400),
            top_p: None,
        };

        let json = serde_json::to_string(&request).expect("serialization should succeed");
        assert!(json.contains("\"model\":\"test-model\""));
        assert!(json.contains("\"temperature\":0.8"));
        assert!(json.contains("\"max_tokens\":400"));
        assert!(!json.contains("top_p"));
    }
}

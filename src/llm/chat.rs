//! Chat-completion types shared by all LLM providers.
//!
//! Models the OpenAI-style chat completion wire shape used by OpenRouter:
//! a list of role-tagged messages in, a list of choices out.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// A message in a conversation with an LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender (e.g., "system", "user", "assistant").
    pub role: String,
    /// Content of the message.
    pub content: String,
}

impl Message {
    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Request for a chat completion from an LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier to use for the completion.
    pub model: String,
    /// Conversation messages.
    pub messages: Vec<Message>,
    /// Sampling temperature (0.0 - 2.0). Higher values = more random.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum number of tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Nucleus sampling parameter (0.0 - 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

impl ChatRequest {
    /// Create a new chat request with default sampling parameters.
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
            top_p: None,
        }
    }

    /// Set the temperature for this request.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the max tokens for this request.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the top_p for this request.
    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

/// Response from a chat completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Unique identifier for this response.
    pub id: String,
    /// Model that produced this response.
    pub model: String,
    /// Generated choices/completions.
    pub choices: Vec<Choice>,
    /// Token usage statistics. Some gateways omit this field.
    #[serde(default)]
    pub usage: Usage,
}

impl ChatResponse {
    /// Get the content of the first choice, if available.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// A single generated choice from the LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Index of this choice in the response.
    pub index: u32,
    /// Generated message.
    pub message: Message,
    /// Reason the generation stopped (e.g., "stop", "length").
    pub finish_reason: String,
}

/// Token usage statistics for a chat completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    /// Number of tokens in the prompt.
    pub prompt_tokens: u32,
    /// Number of tokens generated.
    pub completion_tokens: u32,
    /// Total tokens used.
    pub total_tokens: u32,
}

/// Trait for LLM providers that can complete a chat conversation.
///
/// Implementations perform exactly one attempt per call. Retry and model
/// fallback policy live in [`FallbackChain`](crate::llm::FallbackChain),
/// which owns the model list and drives providers through this trait.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Complete the given chat request.
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let system = Message::system("You are a coach");
        assert_eq!(system.role, "system");
        assert_eq!(system.content, "You are a coach");

        let user = Message::user("My argument");
        assert_eq!(user.role, "user");

        let assistant = Message::assistant("A rebuttal");
        assert_eq!(assistant.role, "assistant");
    }

    #[test]
    fn test_chat_request_builder() {
        let request = ChatRequest::new("test-model", vec![Message::user("hi")])
            .with_temperature(0.8)
            .with_max_tokens(400)
            .with_top_p(0.95);

        assert_eq!(request.model, "test-model");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.temperature, Some(0.8));
        assert_eq!(request.max_tokens, Some(400));
        assert_eq!(request.top_p, Some(0.95));
    }

    #[test]
    fn test_chat_request_skips_unset_parameters() {
        let request = ChatRequest::new("test-model", vec![Message::user("hi")]);

        let json = serde_json::to_string(&request).expect("serialization should succeed");
        assert!(!json.contains("temperature"));
        assert!(!json.contains("max_tokens"));
        assert!(!json.contains("top_p"));
    }

    #[test]
    fn test_first_content() {
        let response = ChatResponse {
            id: "resp-1".to_string(),
            model: "test-model".to_string(),
            choices: vec![Choice {
                index: 0,
                message: Message::assistant("Hello there"),
                finish_reason: "stop".to_string(),
            }],
            usage: Usage::default(),
        };

        assert_eq!(response.first_content(), Some("Hello there"));
    }

    #[test]
    fn test_first_content_empty_choices() {
        let response = ChatResponse {
            id: "resp-2".to_string(),
            model: "test-model".to_string(),
            choices: vec![],
            usage: Usage::default(),
        };

        assert_eq!(response.first_content(), None);
    }

    #[test]
    fn test_response_deserializes_without_usage() {
        let json = r#"{
            "id": "resp-3",
            "model": "test-model",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "ok"}, "finish_reason": "stop"}
            ]
        }"#;

        let response: ChatResponse =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(response.usage.total_tokens, 0);
        assert_eq!(response.first_content(), Some("ok"));
    }
}

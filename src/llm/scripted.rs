//! Scripted chat provider for tests and offline practice.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::LlmError;
use crate::llm::{ChatProvider, ChatRequest, ChatResponse, Choice, Message, Usage};

/// A provider that replays canned replies instead of calling a real API.
///
/// Replies are served in order and cycle once exhausted, so a single
/// instance can drive an arbitrarily long session. Also usable as the
/// backing provider for offline practice, where the sparring partner
/// does not need to be smart, just present.
pub struct ScriptedProvider {
    /// Replies served in order, cycling when exhausted.
    replies: Vec<String>,
    /// Next reply to serve.
    cursor: AtomicUsize,
    /// Total number of `complete` calls observed.
    calls: AtomicUsize,
    /// Number of initial calls that fail before replies start flowing.
    fail_attempts: usize,
    /// Whether every call fails, regardless of `fail_attempts`.
    always_fail: bool,
    /// Error message used for failing calls.
    failure_message: String,
}

impl ScriptedProvider {
    /// Create a provider that cycles through the given replies.
    pub fn new(replies: Vec<String>) -> Self {
        Self {
            replies,
            cursor: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            fail_attempts: 0,
            always_fail: false,
            failure_message: String::new(),
        }
    }

    /// Create a provider that always returns the same reply.
    pub fn constant(reply: impl Into<String>) -> Self {
        Self::new(vec![reply.into()])
    }

    /// Create a provider whose every call fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            replies: Vec::new(),
            cursor: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            fail_attempts: 0,
            always_fail: true,
            failure_message: message.into(),
        }
    }

    /// Create a provider whose first `fail_attempts` calls fail before
    /// the replies start flowing.
    pub fn flaky(fail_attempts: usize, replies: Vec<String>) -> Self {
        Self {
            replies,
            cursor: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            fail_attempts,
            always_fail: false,
            failure_message: "scripted transient failure".to_string(),
        }
    }

    /// Total number of `complete` calls observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        if self.always_fail || call < self.fail_attempts {
            return Err(LlmError::RequestFailed(self.failure_message.clone()));
        }

        let index = self.cursor.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .replies
            .get(index % self.replies.len().max(1))
            .cloned()
            .unwrap_or_default();

        Ok(ChatResponse {
            id: format!("scripted-{}", call),
            model: request.model,
            choices: vec![Choice {
                index: 0,
                message: Message::assistant(reply),
                finish_reason: "stop".to_string(),
            }],
            usage: Usage::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_replies_in_order() {
        let provider = ScriptedProvider::new(vec!["first".to_string(), "second".to_string()]);

        let request = ChatRequest::new("test-model", vec![Message::user("hi")]);
        let first = provider.complete(request.clone()).await.expect("first call");
        let second = provider.complete(request.clone()).await.expect("second call");
        let third = provider.complete(request).await.expect("third call cycles");

        assert_eq!(first.first_content(), Some("first"));
        assert_eq!(second.first_content(), Some("second"));
        assert_eq!(third.first_content(), Some("first"));
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test]
    async fn test_constant_provider() {
        let provider = ScriptedProvider::constant("same every time");

        for _ in 0..3 {
            let request = ChatRequest::new("test-model", vec![Message::user("hi")]);
            let response = provider.complete(request).await.expect("call succeeds");
            assert_eq!(response.first_content(), Some("same every time"));
        }
    }

    #[tokio::test]
    async fn test_failing_provider() {
        let provider = ScriptedProvider::failing("wire down");

        let request = ChatRequest::new("test-model", vec![Message::user("hi")]);
        let result = provider.complete(request).await;

        assert!(matches!(result, Err(LlmError::RequestFailed(msg)) if msg == "wire down"));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_flaky_provider_recovers() {
        let provider = ScriptedProvider::flaky(2, vec!["finally".to_string()]);

        let request = ChatRequest::new("test-model", vec![Message::user("hi")]);
        assert!(provider.complete(request.clone()).await.is_err());
        assert!(provider.complete(request.clone()).await.is_err());

        let response = provider.complete(request).await.expect("third call succeeds");
        assert_eq!(response.first_content(), Some("finally"));
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test]
    async fn test_response_echoes_model() {
        let provider = ScriptedProvider::constant("ok");

        let request = ChatRequest::new("some/model", vec![Message::user("hi")]);
        let response = provider.complete(request).await.expect("call succeeds");

        assert_eq!(response.model, "some/model");
    }
}

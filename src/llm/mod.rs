//! LLM integration for debate-coach.
//!
//! This module provides the chat-completion transport for the coaching
//! flows: shared wire types, an OpenRouter client, and an ordered model
//! fallback chain that keeps sessions alive through provider outages.
//!
//! # Model Fallback
//!
//! All coaching completions go through a [`FallbackChain`], which walks an
//! ordered model list and settles for the first non-blank completion:
//!
//! ```ignore
//! use debate_coach::llm::{FallbackChain, Message, OpenRouterClient, SamplingParams};
//! use std::sync::Arc;
//!
//! let client = Arc::new(OpenRouterClient::new("api-key".to_string()));
//! let chain = FallbackChain::new(client);
//!
//! let messages = vec![Message::user("Open the debate on nuclear energy")];
//! let text = chain.complete_text(messages, &SamplingParams::default()).await?;
//! ```

pub mod chat;
pub mod fallback;
pub mod openrouter;
pub mod scripted;

pub use chat::{ChatProvider, ChatRequest, ChatResponse, Choice, Message, Usage};
pub use fallback::{FallbackChain, SamplingParams, DEFAULT_MODELS};
pub use openrouter::OpenRouterClient;
pub use scripted::ScriptedProvider;

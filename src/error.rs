//! Error types for debate-coach operations.
//!
//! Defines error types for the major subsystems:
//! - LLM API interactions and model fallback
//! - Debate session lifecycle

use thiserror::Error;

/// Errors that can occur during LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing API key: OPENROUTER_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse LLM response: {0}")]
    ParseError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Model '{0}' returned an empty completion")]
    EmptyCompletion(String),

    #[error("API error ({code}): {message}")]
    ApiError { code: u16, message: String },

    #[error("All {attempts} models failed, last error: {last_error}")]
    ModelsExhausted { attempts: usize, last_error: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during debate session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Debate already started, reset the session before opening again")]
    AlreadyStarted,

    #[error("Debate not started, open the session before submitting arguments")]
    NotStarted,

    #[error("Argument text is empty")]
    EmptyArgument,

    #[error("Debate finished: all {0} rounds have been played")]
    DebateFinished(u32),
}

//! debate-coach: Coached debate practice against an AI sparring partner.
//!
//! This library provides a heuristic argument scorer for instant feedback,
//! an OpenRouter-backed completion client with ordered model fallback,
//! coached debate sessions, a topic catalog, and practice drills.

// Core modules
pub mod cli;
pub mod coach;
pub mod config;
pub mod error;
pub mod llm;
pub mod practice;
pub mod scorer;
pub mod session;
pub mod storage;
pub mod topics;

// Re-export commonly used error types
pub use error::{LlmError, SessionError};

//! AI sparring partner and coaching operations.
//!
//! This module holds everything that shapes the opponent's behavior: the
//! personalities and their difficulty levels, the per-exchange debate
//! context, prompt construction, and the [`DebateCoach`] service that
//! drives completions through the model fallback chain.

pub mod context;
pub mod personality;
pub mod prompts;
pub mod service;

pub use context::{DebateContext, DebatePosition};
pub use personality::{Difficulty, Personality};
pub use prompts::{
    build_analysis_prompt, build_feedback_prompt, build_opening_prompt, build_rebuttal_prompt,
    PromptPair,
};
pub use service::{
    DebateCoach, StrengthAssessment, CONNECTION_APOLOGY, DEFAULT_ANALYSIS_SCORE,
    DEFAULT_ANALYSIS_TEXT,
};

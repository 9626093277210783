//! Local argument strength scoring.
//!
//! Everything here runs without network access: the analyzer gives a
//! student instant feedback on a draft, while the LLM-backed assessment in
//! [`crate::coach`] arrives later with a considered judgement.

pub mod analyzer;
pub mod lexicon;

pub use analyzer::{ArgumentAnalyzer, ScoreResult};
pub use lexicon::ScoringLexicon;

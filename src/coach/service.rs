//! LLM-backed coaching operations.
//!
//! Every operation here returns plain text rather than `Result`: a live
//! debate must keep flowing, so when the whole fallback chain is down the
//! student gets a polite apology instead of an error screen. Callers that
//! need to distinguish degradation can compare against
//! [`CONNECTION_APOLOGY`].

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::context::{DebateContext, DebatePosition};
use super::personality::Personality;
use super::prompts::{self, PromptPair};
use crate::llm::{FallbackChain, Message, SamplingParams};

/// Shown in place of a reply when every model in the chain has failed.
pub const CONNECTION_APOLOGY: &str = "Atsiprašau, šiuo metu negaliu prisijungti prie AI sistemos. Pabandykite dar kartą po kelių minučių.";

/// Score assumed when the analysis response carries no SCORE tag.
pub const DEFAULT_ANALYSIS_SCORE: u8 = 75;

/// Analysis text assumed when the response carries no ANALYSIS tag.
pub const DEFAULT_ANALYSIS_TEXT: &str = "Geras argumentas su aiškia logika.";

/// Model judgement of an argument's strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthAssessment {
    /// Strength score on a 0-100 scale.
    pub score: u8,
    /// Short prose judgement in the student's language.
    pub analysis: String,
}

/// The AI sparring partner and coach.
///
/// Wraps a [`FallbackChain`] with the four coaching operations: opening
/// statements, counterarguments, feedback, and strength analysis.
pub struct DebateCoach {
    /// Model chain executing the completions.
    chain: FallbackChain,
    /// Sampling parameters applied to every coaching request.
    params: SamplingParams,
}

impl DebateCoach {
    /// Creates a coach with default sampling parameters.
    pub fn new(chain: FallbackChain) -> Self {
        Self {
            chain,
            params: SamplingParams::default(),
        }
    }

    /// Creates a coach with explicit sampling parameters.
    pub fn with_params(chain: FallbackChain, params: SamplingParams) -> Self {
        Self { chain, params }
    }

    /// Generates the partner's opening argument for its side of the topic.
    pub async fn generate_opening_statement(
        &self,
        topic: &str,
        position: DebatePosition,
        personality: &Personality,
    ) -> String {
        let pair = prompts::build_opening_prompt(personality, topic, position);
        self.request_text(pair).await
    }

    /// Generates a counterargument to the student's latest move.
    pub async fn generate_debate_response(
        &self,
        context: &DebateContext,
        user_argument: &str,
        personality: &Personality,
    ) -> String {
        let pair = prompts::build_rebuttal_prompt(personality, context, user_argument);
        self.request_text(pair).await
    }

    /// Generates short coaching feedback on the student's argument.
    pub async fn generate_feedback(&self, argument: &str, topic: &str, round: u32) -> String {
        let pair = prompts::build_feedback_prompt(argument, topic, round);
        self.request_text(pair).await
    }

    /// Asks the model to rate the argument and parses the tagged reply.
    ///
    /// The reply is expected as `SCORE: <n>` and `ANALYSIS: <text>` lines,
    /// but each tag is parsed independently and falls back to a safe
    /// default on its own, so a half-formed reply still yields something
    /// usable.
    pub async fn analyze_argument_strength(
        &self,
        argument: &str,
        topic: &str,
        position: DebatePosition,
    ) -> StrengthAssessment {
        let pair = prompts::build_analysis_prompt(argument, topic, position);
        let response = self.request_text(pair).await;
        parse_assessment(&response)
    }

    async fn request_text(&self, pair: PromptPair) -> String {
        let messages = vec![Message::system(pair.system), Message::user(pair.user)];

        match self.chain.complete_text(messages, &self.params).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Coaching request failed, serving connection apology");
                CONNECTION_APOLOGY.to_string()
            }
        }
    }
}

/// Parses a tagged strength assessment, tag by tag.
fn parse_assessment(response: &str) -> StrengthAssessment {
    let score_re = Regex::new(r"(?i)SCORE:\s*(\d+)").expect("Invalid regex for score tag");
    let analysis_re = Regex::new(r"(?is)ANALYSIS:\s*(.+)").expect("Invalid regex for analysis tag");

    let score = score_re
        .captures(response)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .map(|n| n.min(100) as u8)
        .unwrap_or(DEFAULT_ANALYSIS_SCORE);

    let analysis = analysis_re
        .captures(response)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_ANALYSIS_TEXT.to_string());

    StrengthAssessment { score, analysis }
}

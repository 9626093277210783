//! Heuristic argument strength scoring.
//!
//! Scores a block of free text on a 0-100 scale using additive keyword and
//! structure rules. The whole pass is a handful of substring scans, cheap
//! enough to run on every keystroke while a student drafts an argument.

use serde::{Deserialize, Serialize};

use super::lexicon::ScoringLexicon;

/// Arguments longer than this many characters earn the length award.
const LENGTH_THRESHOLD_CHARS: usize = 50;

/// Minimum number of sentences for the structure award.
const MIN_SENTENCES: usize = 2;

/// Points awarded per rule.
const LENGTH_POINTS: u32 = 20;
const EVIDENCE_POINTS: u32 = 25;
const LOGIC_POINTS: u32 = 20;
const PERSPECTIVE_POINTS: u32 = 15;
const STRUCTURE_POINTS: u32 = 10;
const CONCLUSION_POINTS: u32 = 10;

/// Upper bound for the final score.
const MAX_SCORE: u32 = 100;

/// Outcome of scoring a single argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Total score, clamped to [0, 100].
    pub score: u8,
    /// One summary sentence keyed by the score tier. Empty for blank input.
    pub feedback: Vec<String>,
    /// Qualities the argument demonstrated.
    pub strengths: Vec<String>,
    /// Concrete suggestions for the qualities it missed.
    pub improvements: Vec<String>,
}

/// Scores arguments against a keyword lexicon.
///
/// Each rule awards a fixed number of points and contributes either a
/// strength or an improvement entry. Two rules (perspective-taking and
/// concluding moves) are award-only: missing them costs nothing and
/// produces no suggestion, so beginners are not flooded with advice.
pub struct ArgumentAnalyzer {
    /// Keyword lists consulted by the scoring rules.
    lexicon: ScoringLexicon,
}

impl Default for ArgumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgumentAnalyzer {
    /// Creates an analyzer with the built-in English lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: ScoringLexicon::english(),
        }
    }

    /// Creates an analyzer with a custom lexicon.
    pub fn with_lexicon(lexicon: ScoringLexicon) -> Self {
        Self { lexicon }
    }

    /// Score a single argument.
    ///
    /// Blank input (empty or whitespace-only) returns the zero result with
    /// no feedback at all, matching a meter that clears while the input
    /// field is empty.
    pub fn analyze(&self, argument: &str) -> ScoreResult {
        if argument.trim().is_empty() {
            return ScoreResult::default();
        }

        let lowered = argument.to_lowercase();
        let mut score: u32 = 0;
        let mut strengths = Vec::new();
        let mut improvements = Vec::new();

        if argument.chars().count() > LENGTH_THRESHOLD_CHARS {
            score += LENGTH_POINTS;
            strengths.push("Good argument length".to_string());
        } else {
            improvements.push("Try to elaborate more on your point".to_string());
        }

        if contains_any(&lowered, &self.lexicon.evidence) {
            score += EVIDENCE_POINTS;
            strengths.push("Uses evidence or research".to_string());
        } else {
            improvements.push("Consider adding evidence or examples".to_string());
        }

        if contains_any(&lowered, &self.lexicon.logic) {
            score += LOGIC_POINTS;
            strengths.push("Shows logical reasoning".to_string());
        } else {
            improvements.push("Use logical connectors to strengthen reasoning".to_string());
        }

        if contains_any(&lowered, &self.lexicon.perspective) {
            score += PERSPECTIVE_POINTS;
            strengths.push("Considers different perspectives".to_string());
        }

        if sentence_count(argument) >= MIN_SENTENCES {
            score += STRUCTURE_POINTS;
            strengths.push("Well-structured argument".to_string());
        } else {
            improvements.push("Try breaking your argument into multiple points".to_string());
        }

        if contains_any(&lowered, &self.lexicon.conclusion) {
            score += CONCLUSION_POINTS;
            strengths.push("Strong conclusion".to_string());
        }

        let score = score.min(MAX_SCORE) as u8;

        ScoreResult {
            score,
            feedback: vec![feedback_for(score).to_string()],
            strengths,
            improvements,
        }
    }
}

/// Checks whether any lexicon keyword occurs in the lowercased text.
fn contains_any(lowered: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| lowered.contains(k.as_str()))
}

/// Counts sentences as non-blank segments between terminal punctuation.
fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|part| !part.trim().is_empty())
        .count()
}

/// Summary sentence for a score tier.
fn feedback_for(score: u8) -> &'static str {
    match score {
        80..=100 => "Excellent argument! Strong evidence and reasoning.",
        60..=79 => "Good argument with room for improvement.",
        40..=59 => "Developing argument. Focus on evidence and structure.",
        _ => "Keep building! Add more details and reasoning.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> ArgumentAnalyzer {
        ArgumentAnalyzer::new()
    }

    #[test]
    fn test_blank_input_scores_zero_with_no_feedback() {
        let result = analyzer().analyze("");
        assert_eq!(result, ScoreResult::default());

        let result = analyzer().analyze("   \n\t  ");
        assert_eq!(result.score, 0);
        assert!(result.feedback.is_empty());
        assert!(result.strengths.is_empty());
        assert!(result.improvements.is_empty());
    }

    #[test]
    fn test_every_rule_fires_for_full_marks() {
        let argument = "Because the data shows clear improvement, and consider the broader \
                        context, this proves the policy works. In conclusion, it is effective.";
        let result = analyzer().analyze(argument);

        assert_eq!(result.score, 100);
        assert_eq!(
            result.feedback,
            vec!["Excellent argument! Strong evidence and reasoning.".to_string()]
        );
        assert_eq!(result.strengths.len(), 6);
        assert!(result.improvements.is_empty());
    }

    #[test]
    fn test_length_boundary_is_strict() {
        // Exactly 50 characters: no award, suggestion instead.
        let at_limit = "a".repeat(50);
        let result = analyzer().analyze(&at_limit);
        assert!(!result.strengths.iter().any(|s| s == "Good argument length"));
        assert!(result
            .improvements
            .iter()
            .any(|s| s == "Try to elaborate more on your point"));

        // One character over the limit earns the award.
        let over_limit = "a".repeat(51);
        let result = analyzer().analyze(&over_limit);
        assert_eq!(result.score, 20);
        assert!(result.strengths.iter().any(|s| s == "Good argument length"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 51 characters of multi-byte Lithuanian text.
        let argument = "ąčęėįšųūž ąčęėįšųūž ąčęėįšųūž ąčęėįšųūž ąčęėįšųūž ą";
        assert_eq!(argument.chars().count(), 51);

        let result = analyzer().analyze(argument);
        assert!(result.strengths.iter().any(|s| s == "Good argument length"));
    }

    #[test]
    fn test_evidence_keywords_detected() {
        let result = analyzer().analyze("According to recent research, this is true.");
        assert!(result
            .strengths
            .iter()
            .any(|s| s == "Uses evidence or research"));
    }

    #[test]
    fn test_logic_connector_scores_twenty() {
        let result = analyzer().analyze("We should act because it matters.");

        assert_eq!(result.score, 20);
        assert!(result.strengths.iter().any(|s| s == "Shows logical reasoning"));
        assert_eq!(
            result.feedback,
            vec!["Keep building! Add more details and reasoning.".to_string()]
        );
    }

    #[test]
    fn test_award_only_rules_produce_no_suggestions() {
        // Misses every rule: exactly the four suggestion-bearing rules
        // should speak, nothing about perspectives or conclusions.
        let result = analyzer().analyze("Short text");

        assert_eq!(result.score, 0);
        assert_eq!(result.improvements.len(), 4);
        assert!(!result
            .improvements
            .iter()
            .any(|s| s.contains("perspective") || s.contains("conclusion")));
    }

    #[test]
    fn test_structure_needs_two_sentences() {
        let result = analyzer().analyze("Cats are good. Dogs are loyal.");
        assert!(result
            .strengths
            .iter()
            .any(|s| s == "Well-structured argument"));

        let result = analyzer().analyze("Cats are good");
        assert!(result
            .improvements
            .iter()
            .any(|s| s == "Try breaking your argument into multiple points"));
    }

    #[test]
    fn test_therefore_counts_as_logic_and_conclusion() {
        let result = analyzer().analyze("Therefore we must act.");

        assert_eq!(result.score, 30);
        assert!(result.strengths.iter().any(|s| s == "Shows logical reasoning"));
        assert!(result.strengths.iter().any(|s| s == "Strong conclusion"));
    }

    #[test]
    fn test_tier_boundaries() {
        // 20 (length) + 25 (evidence) + 20 (logic) + 15 (perspective) = 80.
        let excellent = "According to research, this works because we tried it; however \
                         results vary widely indeed ok.";
        let result = analyzer().analyze(excellent);
        assert_eq!(result.score, 80);
        assert_eq!(
            result.feedback,
            vec!["Excellent argument! Strong evidence and reasoning.".to_string()]
        );

        // 20 (length) + 25 (evidence) + 15 (perspective) = 60.
        let good = "According to experts, we might consider the other side here.";
        let result = analyzer().analyze(good);
        assert_eq!(result.score, 60);
        assert_eq!(
            result.feedback,
            vec!["Good argument with room for improvement.".to_string()]
        );

        // 20 (length) + 20 (logic) = 40.
        let developing = "This policy helps students because it gives them more freedom daily.";
        let result = analyzer().analyze(developing);
        assert_eq!(result.score, 40);
        assert_eq!(
            result.feedback,
            vec!["Developing argument. Focus on evidence and structure.".to_string()]
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = analyzer().analyze("BECAUSE THEREFORE");
        assert!(result.strengths.iter().any(|s| s == "Shows logical reasoning"));
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let argument = "Research shows that phones distract. However, bans work. Ultimately it helps.";
        let first = analyzer().analyze(argument);
        let second = analyzer().analyze(argument);
        assert_eq!(first, second);
    }
}

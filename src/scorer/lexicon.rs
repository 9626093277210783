//! Keyword lexicon backing the heuristic argument scorer.

/// Keyword lists that signal argumentative qualities in free text.
///
/// Matching is case-insensitive substring containment, so multi-word
/// phrases like "according to" are valid entries. Keywords are
/// normalized to lowercase on construction.
#[derive(Debug, Clone)]
pub struct ScoringLexicon {
    /// Markers of evidence or research backing.
    pub evidence: Vec<String>,
    /// Logical connectors linking claims to reasons.
    pub logic: Vec<String>,
    /// Markers of perspective-taking and counter-consideration.
    pub perspective: Vec<String>,
    /// Markers of a concluding move.
    pub conclusion: Vec<String>,
}

impl ScoringLexicon {
    /// Create a lexicon from raw keyword lists, normalizing to lowercase.
    pub fn new(
        evidence: Vec<String>,
        logic: Vec<String>,
        perspective: Vec<String>,
        conclusion: Vec<String>,
    ) -> Self {
        let normalize = |words: Vec<String>| -> Vec<String> {
            words.into_iter().map(|w| w.to_lowercase()).collect()
        };

        Self {
            evidence: normalize(evidence),
            logic: normalize(logic),
            perspective: normalize(perspective),
            conclusion: normalize(conclusion),
        }
    }

    /// The built-in English lexicon used for classroom arguments.
    pub fn english() -> Self {
        let to_owned = |words: &[&str]| -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        };

        Self::new(
            to_owned(&[
                "study",
                "research",
                "data",
                "statistics",
                "evidence",
                "according to",
                "shows that",
            ]),
            to_owned(&[
                "because",
                "therefore",
                "since",
                "as a result",
                "consequently",
                "furthermore",
                "moreover",
            ]),
            to_owned(&[
                "why",
                "how",
                "what if",
                "consider",
                "however",
                "although",
                "while",
            ]),
            to_owned(&[
                "in conclusion",
                "therefore",
                "ultimately",
                "as a result",
                "this shows",
            ]),
        )
    }
}

impl Default for ScoringLexicon {
    fn default() -> Self {
        Self::english()
    }
}

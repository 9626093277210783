//! Timed practice drills for debate skills.
//!
//! Drills come in two shapes. Multiple-choice exercises (fallacy
//! spotting, evidence grading) check the picked option against the
//! answer key. Free-form exercises (quick responses, counter-arguments)
//! award points for any substantive answer and rely on the explanation
//! text for self-assessment.

pub mod exercises;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coach::Difficulty;

pub use exercises::{all, shuffled, PRACTICE_EXERCISES};

/// Minimum trimmed character count for a free-form answer to earn points.
const MIN_RESPONSE_CHARS: usize = 20;

// ============================================================================
// Exercise Kinds
// ============================================================================

/// The drill format of a practice exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseKind {
    /// Spot the logical fallacy in a quoted argument.
    Fallacy,

    /// Draft a fast rebuttal to an opposing claim.
    QuickResponse,

    /// Grade the strength of a piece of evidence.
    EvidenceAnalysis,

    /// Construct a full counter-argument.
    CounterArgument,
}

impl ExerciseKind {
    /// Returns all exercise kinds.
    pub fn all() -> &'static [ExerciseKind] {
        &[
            ExerciseKind::Fallacy,
            ExerciseKind::QuickResponse,
            ExerciseKind::EvidenceAnalysis,
            ExerciseKind::CounterArgument,
        ]
    }

    /// Returns the kebab-case identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::Fallacy => "fallacy",
            ExerciseKind::QuickResponse => "quick-response",
            ExerciseKind::EvidenceAnalysis => "evidence-analysis",
            ExerciseKind::CounterArgument => "counter-argument",
        }
    }

    /// Whether exercises of this kind present an answer key.
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, ExerciseKind::Fallacy | ExerciseKind::EvidenceAnalysis)
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Practice Exercises
// ============================================================================

/// A single practice drill with its question, answer key, and scoring.
#[derive(Debug, Clone, Serialize)]
pub struct PracticeExercise {
    /// Stable identifier.
    pub id: &'static str,

    /// Drill format.
    pub kind: ExerciseKind,

    /// Short display title.
    pub title: &'static str,

    /// One-line description of the skill being drilled.
    pub description: &'static str,

    /// Difficulty tier.
    pub difficulty: Difficulty,

    /// Suggested time budget in seconds.
    pub time_limit_secs: u32,

    /// The prompt shown to the student.
    pub question: &'static str,

    /// Answer options for multiple-choice drills, empty otherwise.
    pub options: &'static [&'static str],

    /// Zero-based index into `options` for the correct pick.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<usize>,

    /// Shown after answering, regardless of outcome.
    pub explanation: &'static str,

    /// Points awarded for a successful answer.
    pub points: u32,
}

impl PracticeExercise {
    /// Whether this exercise expects an option pick rather than free text.
    pub fn is_multiple_choice(&self) -> bool {
        self.kind.is_multiple_choice()
    }

    /// Scores a multiple-choice pick. The correct option earns the full
    /// point value, anything else (including no pick) earns zero.
    pub fn evaluate_choice(&self, chosen: Option<usize>) -> u32 {
        match (chosen, self.correct_answer) {
            (Some(chosen), Some(correct)) if chosen == correct => self.points,
            _ => 0,
        }
    }

    /// Scores a free-form answer. Any response longer than a token
    /// effort earns the full point value.
    pub fn evaluate_response(&self, response: &str) -> u32 {
        if response.trim().chars().count() > MIN_RESPONSE_CHARS {
            self.points
        } else {
            0
        }
    }
}

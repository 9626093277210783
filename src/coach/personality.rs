//! Sparring partner personalities for debate practice.
//!
//! Each personality pairs a difficulty level with a system prompt that
//! shapes how the AI opponent argues. Prompts are written in Lithuanian
//! because that is the language the coached debates run in; the rest of
//! the engine is language-agnostic.

use serde::{Deserialize, Serialize};

// ============================================================================
// Difficulty Levels
// ============================================================================

/// How hard the sparring partner pushes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Gentle, supportive counterplay for first-time debaters.
    Beginner,
    /// Firm counterarguments that still leave room to recover.
    Intermediate,
    /// Full-strength academic opposition.
    Advanced,
}

impl Difficulty {
    /// Returns all difficulty levels, easiest first.
    pub fn all() -> Vec<Self> {
        vec![Self::Beginner, Self::Intermediate, Self::Advanced]
    }

    /// Returns the display name for this difficulty.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Returns the rebuttal style instruction woven into prompts.
    pub fn response_style(&self) -> &'static str {
        match self {
            Self::Beginner => "encouraging and educational",
            Self::Intermediate => "challenging but fair",
            Self::Advanced => "sophisticated and thorough",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" | "easy" => Ok(Difficulty::Beginner),
            "intermediate" | "medium" => Ok(Difficulty::Intermediate),
            "advanced" | "hard" => Ok(Difficulty::Advanced),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

// ============================================================================
// Personalities
// ============================================================================

/// A named sparring partner with a fixed argumentation style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personality {
    /// Display name shown to the student.
    pub name: String,
    /// One-line description of the coaching style.
    pub description: String,
    /// System prompt that defines the partner's voice and behavior.
    pub system_prompt: String,
    /// Difficulty level this partner is tuned for.
    pub difficulty: Difficulty,
}

impl Personality {
    /// Creates a new personality.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        system_prompt: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            system_prompt: system_prompt.into(),
            difficulty,
        }
    }

    /// Returns the built-in personalities, easiest first.
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::new(
                "Draugiškas Mentorius",
                "Palaikantis treneris su konstruktyviais patarimais",
                MENTOR_SYSTEM_PROMPT,
                Difficulty::Beginner,
            ),
            Self::new(
                "Reiklus Oponentas",
                "Patyręs debatorius su aštriais kontrargumentais",
                OPPONENT_SYSTEM_PROMPT,
                Difficulty::Intermediate,
            ),
            Self::new(
                "Akademinis Ekspertas",
                "Universiteto profesoriaus lygio giluminė analizė",
                EXPERT_SYSTEM_PROMPT,
                Difficulty::Advanced,
            ),
        ]
    }

    /// Returns the default personality for new sessions.
    pub fn default_personality() -> Self {
        Self::for_difficulty(Difficulty::Beginner)
    }

    /// Returns the built-in personality tuned for the given difficulty.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::builtin()
            .into_iter()
            .find(|p| p.difficulty == difficulty)
            .unwrap_or_else(|| {
                Self::new(
                    "Draugiškas Mentorius",
                    "Palaikantis treneris su konstruktyviais patarimais",
                    MENTOR_SYSTEM_PROMPT,
                    Difficulty::Beginner,
                )
            })
    }

    /// Looks up a built-in personality by display name.
    pub fn by_name(name: &str) -> Option<Self> {
        Self::builtin().into_iter().find(|p| p.name == name)
    }
}

// ============================================================================
// System Prompts for Each Personality
// ============================================================================

const MENTOR_SYSTEM_PROMPT: &str = "Tu esi patyrusi debatų mentorė Sofija. Esi šilta, padrąsinanti ir aiškiai aiškini samprotavimo principus. Padedi studentams palaipsniui tobulėti, teiki tikslų grįžtamąjį ryšį ir motyvuoji. Atsakyk lietuviškai, 2-3 sakiniais. Naudok pavyzdžius ir analogijas. Akcentuok teigiamus aspektus, bet nevenk konstruktyvios kritikos.";

const OPPONENT_SYSTEM_PROMPT: &str = "Tu esi Robertas - patyręs advokatų mokyklos lektorius. Esi reiklus, bet teisingas. Naudoji Sokratišką metodą, kvestionuoji prielaidas ir ieškosi logikos spragų. Pateiki tvirtus, bet ne griaunančius kontrargumentus. Atsakyk lietuviškai, 2-3 sakiniais. Naudok realius duomenis ir precedentus. Būk iššūkis, bet mokytojas.";

const EXPERT_SYSTEM_PROMPT: &str = "Tu esi prof. dr. Renata Kazlauskienė - tarptautinių debatų teisėja ir retorikos ekspertė. Analizuoji argumentų struktūrą, retorinį poveikį, logikos koherenciją. Cituoji klasikinę retoriką, naudoji akademinę terminologiją. Atsakyk lietuviškai 3-4 sakiniais. Įvertini ne tik turinį, bet ir pateikimo meistryškumą. Teiki gilius, sistemingus įžvalgas.";

//! Debate positions and per-exchange context.

use serde::{Deserialize, Serialize};

/// Side taken on a debate topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebatePosition {
    /// Argues for the topic.
    Pro,
    /// Argues against the topic.
    Con,
}

impl DebatePosition {
    /// Returns the opposing side.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Pro => Self::Con,
            Self::Con => Self::Pro,
        }
    }

    /// Returns the lowercase identifier used in prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pro => "pro",
            Self::Con => "con",
        }
    }

    /// Returns the Lithuanian side label shown to students.
    pub fn side_label(&self) -> &'static str {
        match self {
            Self::Pro => "Už",
            Self::Con => "Prieš",
        }
    }

    /// Returns the stance verb used in opening prompts.
    pub fn stance_verb(&self) -> &'static str {
        match self {
            Self::Pro => "Support",
            Self::Con => "Oppose",
        }
    }

    /// Returns the full stance instruction used in rebuttal prompts.
    pub fn stance_instruction(&self) -> &'static str {
        match self {
            Self::Pro => "Support the topic",
            Self::Con => "Oppose the topic",
        }
    }
}

impl std::fmt::Display for DebatePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DebatePosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pro" | "for" | "uz" | "už" => Ok(DebatePosition::Pro),
            "con" | "against" | "pries" | "prieš" => Ok(DebatePosition::Con),
            other => Err(format!("Unknown position: {}", other)),
        }
    }
}

/// Everything the sparring partner needs to know for one exchange.
///
/// The partner always argues the side opposite to the student, so
/// contexts are normally built with [`DebateContext::for_user`] rather
/// than assembled by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateContext {
    /// Topic under debate.
    pub topic: String,
    /// Side argued by the sparring partner.
    pub position: DebatePosition,
    /// Current round number, starting at 1.
    pub round: u32,
    /// Prior transcript text, oldest first.
    pub previous_arguments: Vec<String>,
    /// Side argued by the student.
    pub user_position: DebatePosition,
}

impl DebateContext {
    /// Builds a context for the partner opposing the given student side.
    pub fn for_user(topic: impl Into<String>, user_position: DebatePosition, round: u32) -> Self {
        Self {
            topic: topic.into(),
            position: user_position.opposite(),
            round,
            previous_arguments: Vec::new(),
            user_position,
        }
    }

    /// Attaches the transcript of earlier exchanges.
    pub fn with_previous_arguments(mut self, previous_arguments: Vec<String>) -> Self {
        self.previous_arguments = previous_arguments;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opposite_is_involution() {
        assert_eq!(DebatePosition::Pro.opposite(), DebatePosition::Con);
        assert_eq!(DebatePosition::Con.opposite(), DebatePosition::Pro);
        assert_eq!(DebatePosition::Pro.opposite().opposite(), DebatePosition::Pro);
    }

    #[test]
    fn test_for_user_derives_opposing_side() {
        let context = DebateContext::for_user("Mokesčiai", DebatePosition::Pro, 2);

        assert_eq!(context.user_position, DebatePosition::Pro);
        assert_eq!(context.position, DebatePosition::Con);
        assert_eq!(context.round, 2);
        assert!(context.previous_arguments.is_empty());
    }

    #[test]
    fn test_with_previous_arguments() {
        let context = DebateContext::for_user("Tema", DebatePosition::Con, 3)
            .with_previous_arguments(vec!["first".to_string(), "second".to_string()]);

        assert_eq!(context.previous_arguments.len(), 2);
        assert_eq!(context.previous_arguments[0], "first");
    }

    #[test]
    fn test_position_labels() {
        assert_eq!(DebatePosition::Pro.side_label(), "Už");
        assert_eq!(DebatePosition::Con.side_label(), "Prieš");
        assert_eq!(DebatePosition::Pro.stance_instruction(), "Support the topic");
        assert_eq!(DebatePosition::Con.stance_verb(), "Oppose");
    }

    #[test]
    fn test_position_from_str() {
        assert_eq!(
            DebatePosition::from_str("PRO").expect("valid"),
            DebatePosition::Pro
        );
        assert_eq!(
            DebatePosition::from_str("prieš").expect("valid alias"),
            DebatePosition::Con
        );
        assert!(DebatePosition::from_str("neutral").is_err());
    }
}

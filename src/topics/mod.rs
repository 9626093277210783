//! Curated debate topic catalog.
//!
//! Topics are organized into eight themed categories with three difficulty
//! tiers. Titles, descriptions and key points are Lithuanian since that is
//! the language the debates run in.

pub mod catalog;

use serde::{Deserialize, Serialize};

use crate::coach::Difficulty;

pub use catalog::{all, by_category, by_difficulty, by_id, random, DEBATE_TOPICS};

/// Themed topic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicCategory {
    Education,
    Technology,
    Environment,
    Social,
    Ethics,
    Politics,
    Health,
    Economics,
}

impl TopicCategory {
    /// Returns all categories in display order.
    pub fn all() -> Vec<TopicCategory> {
        vec![
            TopicCategory::Education,
            TopicCategory::Technology,
            TopicCategory::Environment,
            TopicCategory::Social,
            TopicCategory::Ethics,
            TopicCategory::Politics,
            TopicCategory::Health,
            TopicCategory::Economics,
        ]
    }

    /// Returns the category identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicCategory::Education => "education",
            TopicCategory::Technology => "technology",
            TopicCategory::Environment => "environment",
            TopicCategory::Social => "social",
            TopicCategory::Ethics => "ethics",
            TopicCategory::Politics => "politics",
            TopicCategory::Health => "health",
            TopicCategory::Economics => "economics",
        }
    }

    /// Returns the Lithuanian display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            TopicCategory::Education => "Švietimas ir mokymasis",
            TopicCategory::Technology => "Technologijos ir AI",
            TopicCategory::Environment => "Aplinka ir klimatas",
            TopicCategory::Social => "Socialiniai klausimai",
            TopicCategory::Ethics => "Etika ir filosofija",
            TopicCategory::Politics => "Politika ir valdžia",
            TopicCategory::Health => "Sveikata ir medicina",
            TopicCategory::Economics => "Ekonomika ir verslas",
        }
    }

    /// Returns the icon shown next to the category.
    pub fn icon(&self) -> &'static str {
        match self {
            TopicCategory::Education => "🎓",
            TopicCategory::Technology => "💻",
            TopicCategory::Environment => "🌍",
            TopicCategory::Social => "👥",
            TopicCategory::Ethics => "⚖️",
            TopicCategory::Politics => "🏛️",
            TopicCategory::Health => "🏥",
            TopicCategory::Economics => "💼",
        }
    }
}

impl std::fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TopicCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "education" => Ok(TopicCategory::Education),
            "technology" | "tech" => Ok(TopicCategory::Technology),
            "environment" => Ok(TopicCategory::Environment),
            "social" => Ok(TopicCategory::Social),
            "ethics" => Ok(TopicCategory::Ethics),
            "politics" => Ok(TopicCategory::Politics),
            "health" => Ok(TopicCategory::Health),
            "economics" => Ok(TopicCategory::Economics),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// Suggested starting points for each side of a topic.
#[derive(Debug, Clone, Serialize)]
pub struct KeyPoints {
    /// Points for arguing in favor.
    pub pro: &'static [&'static str],
    /// Points for arguing against.
    pub con: &'static [&'static str],
}

/// A single debate topic.
#[derive(Debug, Clone, Serialize)]
pub struct DebateTopic {
    /// Stable topic identifier (e.g., "nuclear-energy").
    pub id: &'static str,
    /// Topic question as shown to the student.
    pub title: &'static str,
    /// One-line framing of what to explore.
    pub description: &'static str,
    /// Category the topic belongs to.
    pub category: TopicCategory,
    /// Recommended difficulty tier.
    pub difficulty: Difficulty,
    /// Suggested starting points for both sides.
    pub key_points: KeyPoints,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_eight_categories() {
        assert_eq!(TopicCategory::all().len(), 8);
    }

    #[test]
    fn test_category_ids_are_unique() {
        let mut ids: Vec<&str> = TopicCategory::all().iter().map(|c| c.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_category_round_trips_through_from_str() {
        for category in TopicCategory::all() {
            let parsed = TopicCategory::from_str(category.as_str()).expect("valid id");
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_serializes_as_id() {
        let json = serde_json::to_string(&TopicCategory::Education).expect("serialize");
        assert_eq!(json, "\"education\"");
    }
}

//! # Difficulty Profiles
//!
//! Named bundles of allowed directions and decoy counts.

use crate::{Direction, WordSearchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How hard a puzzle should be.
///
/// Harder profiles allow backwards and diagonal words and add more decoys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyProfile {
    /// Left-to-right and top-to-bottom only
    VeryEasy,
    /// Adds the downward diagonal
    Easy,
    /// Adds a backwards diagonal and a few decoys
    #[default]
    Medium,
    /// All straight lines both ways plus two diagonals
    Hard,
    /// Every direction
    VeryHard,
    /// Every direction with a heavy decoy load
    Extreme,
    /// Caller-chosen directions and decoy count
    Custom {
        directions: Vec<Direction>,
        decoys: usize,
    },
}

impl DifficultyProfile {
    /// Returns the directions this profile allows.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch::{Direction, DifficultyProfile};
    ///
    /// let dirs = DifficultyProfile::Medium.directions();
    /// assert!(dirs.contains(&Direction::Northwest));
    /// assert_eq!(DifficultyProfile::Extreme.directions().len(), 8);
    /// ```
    pub fn directions(&self) -> Vec<Direction> {
        use Direction::*;

        match self {
            DifficultyProfile::VeryEasy => vec![East, South],
            DifficultyProfile::Easy => vec![East, South, Southeast],
            DifficultyProfile::Medium => vec![East, South, Southeast, Northwest],
            DifficultyProfile::Hard => vec![East, West, South, North, Southeast, Northwest],
            DifficultyProfile::VeryHard | DifficultyProfile::Extreme => Direction::all(),
            DifficultyProfile::Custom { directions, .. } => directions.clone(),
        }
    }

    /// Returns how many decoy fragments this profile asks for.
    pub fn decoy_count(&self) -> usize {
        match self {
            DifficultyProfile::VeryEasy | DifficultyProfile::Easy => 0,
            DifficultyProfile::Medium => 3,
            DifficultyProfile::Hard => 5,
            DifficultyProfile::VeryHard => 8,
            DifficultyProfile::Extreme => 12,
            DifficultyProfile::Custom { decoys, .. } => *decoys,
        }
    }

    /// The named (non-custom) profiles from easiest to hardest.
    pub fn named() -> Vec<DifficultyProfile> {
        vec![
            DifficultyProfile::VeryEasy,
            DifficultyProfile::Easy,
            DifficultyProfile::Medium,
            DifficultyProfile::Hard,
            DifficultyProfile::VeryHard,
            DifficultyProfile::Extreme,
        ]
    }
}

impl fmt::Display for DifficultyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyProfile::VeryEasy => f.write_str("very-easy"),
            DifficultyProfile::Easy => f.write_str("easy"),
            DifficultyProfile::Medium => f.write_str("medium"),
            DifficultyProfile::Hard => f.write_str("hard"),
            DifficultyProfile::VeryHard => f.write_str("very-hard"),
            DifficultyProfile::Extreme => f.write_str("extreme"),
            DifficultyProfile::Custom { directions, decoys } => {
                let codes: Vec<&str> = directions.iter().map(|d| d.code()).collect();
                write!(f, "custom[{}; {} decoys]", codes.join(","), decoys)
            }
        }
    }
}

impl FromStr for DifficultyProfile {
    type Err = WordSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "veryeasy" => Ok(DifficultyProfile::VeryEasy),
            "easy" => Ok(DifficultyProfile::Easy),
            "medium" => Ok(DifficultyProfile::Medium),
            "hard" => Ok(DifficultyProfile::Hard),
            "veryhard" => Ok(DifficultyProfile::VeryHard),
            "extreme" => Ok(DifficultyProfile::Extreme),
            _ => Err(WordSearchError::Parse(format!(
                "unknown difficulty '{}'",
                s.trim()
            ))),
        }
    }
}

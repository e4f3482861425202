//! # Direction Table
//!
//! The eight straight-line directions a word can run in, with their unit vectors.

use crate::{Position, WordSearchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A compass direction in grid terms: rows grow southward, columns eastward.
///
/// # Examples
///
/// ```
/// use wordsearch::Direction;
///
/// assert_eq!(Direction::East.delta(), (0, 1));
/// assert_eq!(Direction::Northwest.delta(), (-1, -1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    West,
    South,
    North,
    Southeast,
    Northwest,
    Northeast,
    Southwest,
}

impl Direction {
    /// Returns the `(Δrow, Δcol)` unit vector for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
            Direction::North => (-1, 0),
            Direction::Southeast => (1, 1),
            Direction::Northwest => (-1, -1),
            Direction::Northeast => (-1, 1),
            Direction::Southwest => (1, -1),
        }
    }

    /// Returns the position reached after `steps` moves from `origin`.
    pub fn step(self, origin: Position, steps: usize) -> Position {
        let (dr, dc) = self.delta();
        let steps = steps as i32;
        Position::new(origin.row + dr * steps, origin.col + dc * steps)
    }

    /// Short compass label, e.g. `"SE"`.
    pub fn code(self) -> &'static str {
        match self {
            Direction::East => "E",
            Direction::West => "W",
            Direction::South => "S",
            Direction::North => "N",
            Direction::Southeast => "SE",
            Direction::Northwest => "NW",
            Direction::Northeast => "NE",
            Direction::Southwest => "SW",
        }
    }

    /// Returns all 8 directions in canonical order.
    pub fn all() -> Vec<Direction> {
        vec![
            Direction::East,
            Direction::West,
            Direction::South,
            Direction::North,
            Direction::Southeast,
            Direction::Northwest,
            Direction::Northeast,
            Direction::Southwest,
        ]
    }

    /// Parses a comma separated list such as `"E,S,SE"` or `"H,V,D1"`.
    ///
    /// Duplicates are collapsed while keeping first-seen order.
    pub fn parse_list(input: &str) -> Result<Vec<Direction>, WordSearchError> {
        let mut directions = Vec::new();
        for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let direction: Direction = token.parse()?;
            if !directions.contains(&direction) {
                directions.push(direction);
            }
        }
        Ok(directions)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Direction {
    type Err = WordSearchError;

    /// Accepts compass codes (`SE`), full names (`southeast`) and the legacy
    /// orientation codes `H, HR, V, VR, D1, D2, D3, D4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e" | "east" | "h" => Ok(Direction::East),
            "w" | "west" | "hr" => Ok(Direction::West),
            "s" | "south" | "v" => Ok(Direction::South),
            "n" | "north" | "vr" => Ok(Direction::North),
            "se" | "southeast" | "d1" => Ok(Direction::Southeast),
            "nw" | "northwest" | "d2" => Ok(Direction::Northwest),
            "ne" | "northeast" | "d3" => Ok(Direction::Northeast),
            "sw" | "southwest" | "d4" => Ok(Direction::Southwest),
            other => Err(WordSearchError::Parse(format!(
                "unknown direction '{}'",
                other
            ))),
        }
    }
}

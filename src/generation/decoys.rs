//! # Decoy Injection
//!
//! Writes short, meaningless fragments into empty cells so that solvers run
//! into false starts. Decoys only ever land on empty cells; they never touch a
//! placed word or an earlier decoy. Falling short of the requested count is fine.

use crate::config::{DECOY_FRAGMENT_BUDGET, MAX_DECOY_LEN, MIN_DECOY_LEN};
use crate::{
    attempt_random_placement, place_word, Alphabet, Cell, Direction, Grid, Placement, Position,
    WordSearchResult,
};
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Where decoy fragments come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecoySource {
    /// Substrings sliced out of already-placed words
    PlacedWords,
    /// Random draws from the filler alphabet and letters already in the grid
    RandomLetters,
    /// Either of the above, chosen per fragment
    Mixed,
}

impl std::str::FromStr for DecoySource {
    type Err = crate::WordSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "words" | "placed-words" => Ok(DecoySource::PlacedWords),
            "random" | "random-letters" => Ok(DecoySource::RandomLetters),
            "mixed" => Ok(DecoySource::Mixed),
            other => Err(crate::WordSearchError::Parse(format!(
                "unknown decoy source '{}'",
                other
            ))),
        }
    }
}

/// A decoy committed to the grid.
///
/// Decoys are kept apart from real placements; they exist only so callers can
/// inspect where they went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoyFragment {
    pub text: String,
    pub direction: Direction,
    pub origin: Position,
    pub coordinates: Vec<Position>,
}

/// Inserts decoy fragments into a partially built grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoyInjector {
    /// How fragments are produced
    pub source: DecoySource,
    /// Random attempts per fragment before it is discarded
    pub max_attempts: u32,
}

impl DecoyInjector {
    /// Creates an injector with the given fragment source and attempt ceiling.
    pub fn new(source: DecoySource, max_attempts: u32) -> Self {
        Self {
            source,
            max_attempts,
        }
    }

    /// Tries to insert `count` decoys and returns the ones that landed.
    ///
    /// At most `count * DECOY_FRAGMENT_BUDGET` fragments are drawn. With
    /// [`DecoySource::PlacedWords`] and no word of at least three letters,
    /// nothing is inserted.
    pub fn inject<R: Rng>(
        &self,
        grid: &mut Grid,
        placements: &[Placement],
        count: usize,
        directions: &[Direction],
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> WordSearchResult<Vec<DecoyFragment>> {
        let mut decoys = Vec::new();
        let budget = count.saturating_mul(DECOY_FRAGMENT_BUDGET);

        for _ in 0..budget {
            if decoys.len() >= count {
                break;
            }

            let Some(fragment) = self.draw_fragment(grid, placements, alphabet, rng) else {
                trace!("No source material for decoys, stopping");
                break;
            };

            let inserted = attempt_random_placement(
                grid,
                rng,
                directions,
                fragment.len(),
                self.max_attempts,
                |grid, origin, direction| cells_empty(grid, origin, direction, fragment.len()),
                |grid, origin, direction| {
                    let coordinates = place_word(grid, &fragment, origin, direction)?;
                    Ok(DecoyFragment {
                        text: fragment.iter().collect(),
                        direction,
                        origin,
                        coordinates,
                    })
                },
            )?;

            match inserted {
                Some(decoy) => {
                    trace!("Decoy {} at {} heading {}", decoy.text, decoy.origin, decoy.direction);
                    decoys.push(decoy);
                }
                None => trace!("Discarded decoy {}", fragment.iter().collect::<String>()),
            }
        }

        debug!("Inserted {} of {} requested decoy(s)", decoys.len(), count);
        Ok(decoys)
    }

    /// Produces the next fragment according to the configured source.
    fn draw_fragment<R: Rng>(
        &self,
        grid: &Grid,
        placements: &[Placement],
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Option<Vec<char>> {
        match self.source {
            DecoySource::PlacedWords => slice_placed_word(placements, rng),
            DecoySource::RandomLetters => Some(random_fragment(grid, alphabet, rng)),
            DecoySource::Mixed => {
                if rng.gen_bool(0.5) {
                    slice_placed_word(placements, rng)
                        .or_else(|| Some(random_fragment(grid, alphabet, rng)))
                } else {
                    Some(random_fragment(grid, alphabet, rng))
                }
            }
        }
    }
}

impl Default for DecoyInjector {
    fn default() -> Self {
        Self::new(
            DecoySource::PlacedWords,
            crate::config::DEFAULT_DECOY_ATTEMPTS,
        )
    }
}

/// Returns true if all `len` cells from `origin` along `direction` are in bounds and empty.
fn cells_empty(grid: &Grid, origin: Position, direction: Direction, len: usize) -> bool {
    (0..len).all(|i| {
        grid.get_cell(direction.step(origin, i))
            .map_or(false, Cell::is_empty)
    })
}

/// Slices a 3 to 6 letter run out of a random placed word long enough to supply one.
fn slice_placed_word<R: Rng>(placements: &[Placement], rng: &mut R) -> Option<Vec<char>> {
    let sources: Vec<Vec<char>> = placements
        .iter()
        .map(|p| p.letters.chars().collect::<Vec<char>>())
        .filter(|letters| letters.len() >= MIN_DECOY_LEN)
        .collect();
    let letters = sources.choose(rng)?;

    let len = rng.gen_range(MIN_DECOY_LEN..=MAX_DECOY_LEN.min(letters.len()));
    let start = rng.gen_range(0..=letters.len() - len);
    Some(letters[start..start + len].to_vec())
}

/// Builds a 3 to 6 letter run, mixing alphabet draws with letters already on the grid.
fn random_fragment<R: Rng>(grid: &Grid, alphabet: &Alphabet, rng: &mut R) -> Vec<char> {
    let on_grid = grid.letters();
    let len = rng.gen_range(MIN_DECOY_LEN..=MAX_DECOY_LEN);

    (0..len)
        .map(|_| match on_grid.choose(rng) {
            Some(&ch) if rng.gen_bool(0.5) => ch,
            _ => alphabet.choose(rng),
        })
        .collect()
}

//! # Word Placement
//!
//! Placement validation, committing words into the grid, and the search that
//! decides where each word goes.
//!
//! Two search strategies are offered:
//! 1. **Random retry**: pick a random allowed direction and a random origin that
//!    keeps the word in bounds, validate, and commit on the first success
//! 2. **Best fit**: scan every (direction, origin) pair and keep the valid
//!    candidate that reuses the most existing letters
//!
//! Words that cannot be placed are reported back, never treated as errors.

use crate::{Cell, Direction, Grid, Position, Word, WordSearchResult};
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A word committed to the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The word as it should be shown in a word list
    pub word: String,
    /// The letters written into the grid, in path order
    pub letters: String,
    /// Direction the word runs in
    pub direction: Direction,
    /// Cell holding the first letter
    pub origin: Position,
    /// Every occupied cell, first letter first
    pub coordinates: Vec<Position>,
}

/// Strategies for choosing where a word goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementStrategy {
    /// Random direction and origin, retried up to the attempt ceiling
    RandomRetry,
    /// Exhaustive scan scored by the number of reused letters
    BestFit,
}

impl std::str::FromStr for PlacementStrategy {
    type Err = crate::WordSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "random-retry" | "retry" => Ok(PlacementStrategy::RandomRetry),
            "best-fit" | "bestfit" | "exhaustive" => Ok(PlacementStrategy::BestFit),
            other => Err(crate::WordSearchError::Parse(format!(
                "unknown placement strategy '{}'",
                other
            ))),
        }
    }
}

/// Checks whether `letters` fits at `origin` running in `direction`.
///
/// Every target cell must be inside the grid and either empty or already
/// holding the same letter, which is what lets words cross each other.
///
/// # Examples
///
/// ```
/// use wordsearch::{can_place, Direction, Grid, Position};
///
/// let grid = Grid::new(5, 5);
/// let cat: Vec<char> = "CAT".chars().collect();
/// assert!(can_place(&grid, &cat, Position::new(0, 0), Direction::East));
/// assert!(!can_place(&grid, &cat, Position::new(0, 3), Direction::East));
/// ```
pub fn can_place(grid: &Grid, letters: &[char], origin: Position, direction: Direction) -> bool {
    overlap_score(grid, letters, origin, direction).is_some()
}

/// Counts how many letters of a candidate placement are already in the grid.
///
/// Returns None if the placement is out of bounds or conflicts with an existing letter.
pub fn overlap_score(
    grid: &Grid,
    letters: &[char],
    origin: Position,
    direction: Direction,
) -> Option<usize> {
    let mut score = 0;
    for (i, &ch) in letters.iter().enumerate() {
        match grid.get_cell(direction.step(origin, i))? {
            Cell::Empty => {}
            Cell::Letter(existing) if existing == ch => score += 1,
            Cell::Letter(_) => return None,
        }
    }
    Some(score)
}

/// Writes `letters` into the grid and returns the occupied coordinates in order.
///
/// The caller is expected to have validated the placement with [`can_place`];
/// writing a letter over the same letter is a no-op.
pub fn place_word(
    grid: &mut Grid,
    letters: &[char],
    origin: Position,
    direction: Direction,
) -> WordSearchResult<Vec<Position>> {
    let coordinates = origin.path(direction, letters.len());
    for (&pos, &ch) in coordinates.iter().zip(letters) {
        grid.set_cell(pos, Cell::Letter(ch))?;
    }
    Ok(coordinates)
}

/// Runs bounded random placement attempts for anything spanning `span` cells.
///
/// Each attempt picks a random direction from `directions` and a random origin
/// from which the full span stays inside the grid, then asks `validate`. The
/// first accepted candidate is handed to `commit`. Returns `Ok(None)` once
/// `max_attempts` candidates have been rejected.
pub fn attempt_random_placement<R, V, C, T>(
    grid: &mut Grid,
    rng: &mut R,
    directions: &[Direction],
    span: usize,
    max_attempts: u32,
    mut validate: V,
    commit: C,
) -> WordSearchResult<Option<T>>
where
    R: Rng,
    V: FnMut(&Grid, Position, Direction) -> bool,
    C: FnOnce(&mut Grid, Position, Direction) -> WordSearchResult<T>,
{
    if span == 0 {
        return Ok(None);
    }

    for _ in 0..max_attempts {
        let Some(&direction) = directions.choose(rng) else {
            return Ok(None);
        };
        let Some(origin) = random_origin(grid, rng, direction, span) else {
            continue;
        };

        if validate(grid, origin, direction) {
            return commit(grid, origin, direction).map(Some);
        }
    }

    Ok(None)
}

/// Picks a random origin from which `span` cells in `direction` stay in bounds.
fn random_origin<R: Rng>(
    grid: &Grid,
    rng: &mut R,
    direction: Direction,
    span: usize,
) -> Option<Position> {
    let (dr, dc) = direction.delta();
    let rows = origin_range(grid.rows(), dr, span)?;
    let cols = origin_range(grid.cols(), dc, span)?;
    Some(Position::new(rng.gen_range(rows), rng.gen_range(cols)))
}

/// Start indices along one axis from which `span` steps of `delta` stay inside `0..extent`.
fn origin_range(extent: usize, delta: i32, span: usize) -> Option<Range<i32>> {
    let extent = extent as i32;
    let reach = span.saturating_sub(1) as i32;
    let range = match delta {
        1 => 0..extent - reach,
        -1 => reach..extent,
        _ => 0..extent,
    };
    (range.start < range.end).then_some(range)
}

/// Scans every allowed direction and origin for the best valid spot.
///
/// Candidates are visited direction by direction in the given order, then in
/// row-major order. The highest overlap score wins; ties keep the earliest
/// candidate.
pub fn find_best_position(
    grid: &Grid,
    letters: &[char],
    directions: &[Direction],
) -> Option<(Position, Direction, usize)> {
    let mut best: Option<(Position, Direction, usize)> = None;

    for &direction in directions {
        for origin in grid.positions() {
            let Some(score) = overlap_score(grid, letters, origin, direction) else {
                continue;
            };
            if best.map_or(true, |(_, _, best_score)| score > best_score) {
                best = Some((origin, direction, score));
            }
        }
    }

    best
}

/// Words placed by a search run, and the ones that did not fit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub placements: Vec<Placement>,
    pub unplaced: Vec<String>,
}

/// Places a batch of words using one [`PlacementStrategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementSearch {
    /// Strategy for choosing a spot
    pub strategy: PlacementStrategy,
    /// Random attempts per word (ignored by best fit)
    pub max_attempts: u32,
}

impl PlacementSearch {
    /// Creates a search with the given strategy and attempt ceiling.
    pub fn new(strategy: PlacementStrategy, max_attempts: u32) -> Self {
        Self {
            strategy,
            max_attempts,
        }
    }

    /// Shuffles `words`, keeps at most `limit` of them, and places each in turn.
    pub fn place_all<R: Rng>(
        &self,
        grid: &mut Grid,
        words: &[Word],
        directions: &[Direction],
        limit: Option<usize>,
        rng: &mut R,
    ) -> WordSearchResult<SearchOutcome> {
        let mut order: Vec<&Word> = words.iter().collect();
        order.shuffle(rng);
        if let Some(limit) = limit {
            order.truncate(limit);
        }

        let mut outcome = SearchOutcome::default();
        for word in order {
            match self.place_one(grid, word, directions, rng)? {
                Some(placement) => {
                    trace!(
                        "Placed {} at {} heading {}",
                        placement.word,
                        placement.origin,
                        placement.direction
                    );
                    outcome.placements.push(placement);
                }
                None => {
                    trace!("No room for {}", word.display);
                    outcome.unplaced.push(word.display.clone());
                }
            }
        }

        debug!(
            "{:?} search placed {} word(s), {} unplaced",
            self.strategy,
            outcome.placements.len(),
            outcome.unplaced.len()
        );
        Ok(outcome)
    }

    /// Places a single word, or returns None if no valid spot was found.
    pub fn place_one<R: Rng>(
        &self,
        grid: &mut Grid,
        word: &Word,
        directions: &[Direction],
        rng: &mut R,
    ) -> WordSearchResult<Option<Placement>> {
        match self.strategy {
            PlacementStrategy::RandomRetry => self.place_randomly(grid, word, directions, rng),
            PlacementStrategy::BestFit => self.place_best_fit(grid, word, directions),
        }
    }

    fn place_randomly<R: Rng>(
        &self,
        grid: &mut Grid,
        word: &Word,
        directions: &[Direction],
        rng: &mut R,
    ) -> WordSearchResult<Option<Placement>> {
        let letters = &word.letters;
        attempt_random_placement(
            grid,
            rng,
            directions,
            letters.len(),
            self.max_attempts,
            |grid, origin, direction| can_place(grid, letters, origin, direction),
            |grid, origin, direction| commit_placement(grid, word, origin, direction),
        )
    }

    fn place_best_fit(
        &self,
        grid: &mut Grid,
        word: &Word,
        directions: &[Direction],
    ) -> WordSearchResult<Option<Placement>> {
        match find_best_position(grid, &word.letters, directions) {
            Some((origin, direction, _)) => {
                commit_placement(grid, word, origin, direction).map(Some)
            }
            None => Ok(None),
        }
    }
}

impl Default for PlacementSearch {
    fn default() -> Self {
        Self::new(
            PlacementStrategy::RandomRetry,
            crate::config::DEFAULT_PLACEMENT_ATTEMPTS,
        )
    }
}

fn commit_placement(
    grid: &mut Grid,
    word: &Word,
    origin: Position,
    direction: Direction,
) -> WordSearchResult<Placement> {
    let coordinates = place_word(grid, &word.letters, origin, direction)?;
    Ok(Placement {
        word: word.display.clone(),
        letters: word.text(),
        direction,
        origin,
        coordinates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_can_place_bounds() {
        let grid = Grid::new(5, 5);
        let word = chars("HELLO");
        assert!(can_place(&grid, &word, Position::new(0, 0), Direction::East));
        assert!(can_place(&grid, &word, Position::new(4, 4), Direction::Northwest));
        assert!(!can_place(&grid, &word, Position::new(0, 1), Direction::East));
        assert!(!can_place(&grid, &word, Position::new(3, 0), Direction::South));
        assert!(!can_place(&grid, &word, Position::new(-1, 0), Direction::East));
    }

    #[test]
    fn test_overlap_accepts_matching_letters_only() {
        let mut grid = Grid::new(8, 8);
        place_word(&mut grid, &chars("CATS"), Position::new(2, 0), Direction::East).unwrap();

        // "ATE" down from the A in CATS shares one matching cell
        let ate = chars("ATE");
        assert_eq!(
            overlap_score(&grid, &ate, Position::new(2, 1), Direction::South),
            Some(1)
        );
        // Along the row A and T match but E would overwrite S
        assert!(!can_place(&grid, &ate, Position::new(2, 1), Direction::East));
        // Starting on C conflicts immediately
        assert!(!can_place(&grid, &ate, Position::new(2, 0), Direction::South));
    }

    #[test]
    fn test_place_word_returns_path() {
        let mut grid = Grid::new(5, 5);
        let coords = place_word(&mut grid, &chars("DOG"), Position::new(4, 0), Direction::Northeast).unwrap();
        assert_eq!(
            coords,
            vec![Position::new(4, 0), Position::new(3, 1), Position::new(2, 2)]
        );
        assert_eq!(grid.letter_at(Position::new(3, 1)), Some('O'));
    }

    #[test]
    fn test_origin_range() {
        assert_eq!(origin_range(5, 1, 3), Some(0..3));
        assert_eq!(origin_range(5, -1, 3), Some(2..5));
        assert_eq!(origin_range(5, 0, 3), Some(0..5));
        assert_eq!(origin_range(5, 1, 5), Some(0..1));
        assert_eq!(origin_range(5, 1, 6), None);
    }

    #[test]
    fn test_find_best_position_prefers_overlap() {
        let mut grid = Grid::new(6, 6);
        place_word(&mut grid, &chars("CAT"), Position::new(0, 0), Direction::East).unwrap();

        let (origin, direction, score) =
            find_best_position(&grid, &chars("TOP"), &[Direction::East, Direction::South]).unwrap();
        assert_eq!(score, 1);
        assert_eq!(origin, Position::new(0, 2));
        // East from the T is found before South from the T
        assert_eq!(direction, Direction::East);
    }

    #[test]
    fn test_find_best_position_ties_keep_first() {
        let grid = Grid::new(5, 5);
        let (origin, direction, score) =
            find_best_position(&grid, &chars("AB"), &[Direction::South, Direction::East]).unwrap();
        assert_eq!((origin, direction, score), (Position::new(0, 0), Direction::South, 0));
    }

    #[test]
    fn test_find_best_position_none_when_too_long() {
        let grid = Grid::new(3, 3);
        assert!(find_best_position(&grid, &chars("LONG"), &Direction::all()).is_none());
    }

    #[test]
    fn test_attempt_random_placement_exhausts_budget() {
        let mut grid = Grid::new(5, 5);
        let mut rng = StdRng::seed_from_u64(1);
        let mut calls = 0;
        let result = attempt_random_placement(
            &mut grid,
            &mut rng,
            &[Direction::East],
            3,
            20,
            |_, _, _| {
                calls += 1;
                false
            },
            |_, _, _| Ok(()),
        )
        .unwrap();
        assert!(result.is_none());
        assert_eq!(calls, 20);
    }

    #[test]
    fn test_random_search_places_in_allowed_directions() {
        let mut grid = Grid::new(10, 10);
        let mut rng = StdRng::seed_from_u64(7);
        let words = vec![Word::new("cat").unwrap(), Word::new("dog").unwrap()];
        let search = PlacementSearch::default();
        let outcome = search
            .place_all(&mut grid, &words, &[Direction::East, Direction::South], None, &mut rng)
            .unwrap();

        assert_eq!(outcome.placements.len(), 2);
        assert!(outcome.unplaced.is_empty());
        for placement in &outcome.placements {
            assert!(matches!(placement.direction, Direction::East | Direction::South));
            assert_eq!(placement.coordinates.len(), 3);
            assert_eq!(placement.origin, placement.coordinates[0]);
        }
    }

    #[test]
    fn test_best_fit_search_limit() {
        let mut grid = Grid::new(6, 6);
        let mut rng = StdRng::seed_from_u64(3);
        let words: Vec<Word> = ["one", "two", "six"].iter().filter_map(|w| Word::new(w)).collect();
        let search = PlacementSearch::new(PlacementStrategy::BestFit, 1);
        let outcome = search
            .place_all(&mut grid, &words, &Direction::all(), Some(2), &mut rng)
            .unwrap();
        assert_eq!(outcome.placements.len(), 2);
    }

    #[test]
    fn test_unplaceable_word_is_reported() {
        let mut grid = Grid::new(5, 5);
        let mut rng = StdRng::seed_from_u64(11);
        let words = vec![Word::new("abcdef").unwrap()];
        for strategy in [PlacementStrategy::RandomRetry, PlacementStrategy::BestFit] {
            let outcome = PlacementSearch::new(strategy, 50)
                .place_all(&mut grid, &words, &Direction::all(), None, &mut rng)
                .unwrap();
            assert!(outcome.placements.is_empty());
            assert_eq!(outcome.unplaced, vec!["ABCDEF".to_string()]);
        }
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("best-fit".parse::<PlacementStrategy>().unwrap(), PlacementStrategy::BestFit);
        assert_eq!("random".parse::<PlacementStrategy>().unwrap(), PlacementStrategy::RandomRetry);
        assert!("greedy".parse::<PlacementStrategy>().is_err());
    }
}

//! # Puzzle Assembly
//!
//! Runs the generation phases in order over a fresh grid and packages the result.

use crate::config::{DEFAULT_DECOY_ATTEMPTS, DEFAULT_PLACEMENT_ATTEMPTS};
use crate::{
    fill_grid, prepare_words, Alphabet, DecoyFragment, DecoyInjector, DecoySource,
    Direction, GenerationConfig, Generator, Grid, Placement, PlacementSearch, PlacementStrategy,
    Position, WordSearchError, WordSearchResult,
};
use log::{debug, info};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// A finished word-search puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// The fully filled letter grid
    pub grid: Grid,
    /// Words that made it into the grid, in placement order
    pub placements: Vec<Placement>,
    /// Decoy fragments written before the filler pass
    pub decoys: Vec<DecoyFragment>,
    /// Words that were too long or found no room
    pub dropped: Vec<String>,
}

impl Puzzle {
    /// Returns the union of all placement coordinates (the answer key cells).
    pub fn highlight_coordinates(&self) -> HashSet<Position> {
        self.placements
            .iter()
            .flat_map(|placement| placement.coordinates.iter().copied())
            .collect()
    }

    /// Returns the placed words in placement order.
    pub fn words(&self) -> Vec<&str> {
        self.placements.iter().map(|p| p.word.as_str()).collect()
    }

    /// Finds the placement for a word, matching either the display or grid form.
    pub fn find(&self, word: &str) -> Option<&Placement> {
        let wanted = word.trim().to_uppercase();
        self.placements
            .iter()
            .find(|p| p.word == wanted || p.letters == wanted)
    }

    /// Checks that the puzzle agrees with its own grid.
    ///
    /// The grid must be full. Every placement and decoy must lie on a straight
    /// in-bounds path spelling its letters in the grid, crossing words must
    /// agree on shared cells, and decoys must not touch word cells.
    pub fn check_consistency(&self) -> WordSearchResult<()> {
        let grid = &self.grid;
        if !grid.is_full() {
            return Err(WordSearchError::GenerationFailed(
                "grid has empty cells".to_string(),
            ));
        }

        let mut claimed: HashMap<Position, char> = HashMap::new();
        for placement in &self.placements {
            check_path(
                grid,
                &placement.word,
                &placement.letters,
                placement.origin,
                placement.direction,
                &placement.coordinates,
            )?;

            for (&pos, ch) in placement.coordinates.iter().zip(placement.letters.chars()) {
                if let Some(&other) = claimed.get(&pos) {
                    if other != ch {
                        return Err(WordSearchError::GenerationFailed(format!(
                            "conflicting letters at {}",
                            pos
                        )));
                    }
                }
                claimed.insert(pos, ch);
            }
        }

        for decoy in &self.decoys {
            check_path(
                grid,
                &decoy.text,
                &decoy.text,
                decoy.origin,
                decoy.direction,
                &decoy.coordinates,
            )?;
            if let Some(pos) = decoy.coordinates.iter().find(|pos| claimed.contains_key(*pos)) {
                return Err(WordSearchError::GenerationFailed(format!(
                    "decoy {} overlaps a word at {}",
                    decoy.text, pos
                )));
            }
        }

        Ok(())
    }

    /// Serializes the puzzle to pretty-printed JSON.
    pub fn to_json(&self) -> WordSearchResult<String> {
        serde_json::to_string_pretty(self).map_err(WordSearchError::from)
    }

    /// Restores a puzzle from JSON.
    ///
    /// The restored puzzle must pass [`Puzzle::check_consistency`]; anything
    /// else is reported as a `Parse` error.
    pub fn from_json(json: &str) -> WordSearchResult<Self> {
        let puzzle: Puzzle = serde_json::from_str(json)?;
        puzzle.check_consistency().map_err(|err| match err {
            WordSearchError::GenerationFailed(reason) => WordSearchError::Parse(reason),
            other => other,
        })?;
        Ok(puzzle)
    }

    /// Writes the puzzle as JSON to `path`.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> WordSearchResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Reads a puzzle previously written by [`Puzzle::save_to_file`].
    pub fn load_from_file(path: impl AsRef<Path>) -> WordSearchResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Orchestrates placement search, decoy injection and the filler pass.
///
/// The generator holds only strategy settings, so it can be shared freely;
/// each call allocates its own grid and draws from the caller's random source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleGenerator {
    /// Strategy for placing words
    pub placement_strategy: PlacementStrategy,
    /// Where decoy fragments come from
    pub decoy_source: DecoySource,
    /// Random attempts per word before it is dropped
    pub max_placement_attempts: u32,
    /// Random attempts per decoy fragment before it is discarded
    pub max_decoy_attempts: u32,
}

impl PuzzleGenerator {
    /// Creates a generator using random retry placement and word-sliced decoys.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch::{PlacementStrategy, PuzzleGenerator};
    ///
    /// let generator = PuzzleGenerator::new();
    /// assert_eq!(generator.placement_strategy, PlacementStrategy::RandomRetry);
    /// ```
    pub fn new() -> Self {
        Self {
            placement_strategy: PlacementStrategy::RandomRetry,
            decoy_source: DecoySource::PlacedWords,
            max_placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            max_decoy_attempts: DEFAULT_DECOY_ATTEMPTS,
        }
    }

    /// Creates a generator using the exhaustive overlap-scoring search.
    pub fn best_fit() -> Self {
        Self {
            placement_strategy: PlacementStrategy::BestFit,
            ..Self::new()
        }
    }

    /// Creates a generator with small budgets for tests.
    pub fn for_testing() -> Self {
        Self {
            placement_strategy: PlacementStrategy::RandomRetry,
            decoy_source: DecoySource::Mixed,
            max_placement_attempts: 100,
            max_decoy_attempts: 20,
        }
    }

    /// Sets the placement strategy.
    pub fn with_strategy(mut self, strategy: PlacementStrategy) -> Self {
        self.placement_strategy = strategy;
        self
    }

    /// Sets the decoy source.
    pub fn with_decoy_source(mut self, source: DecoySource) -> Self {
        self.decoy_source = source;
        self
    }

    fn check_budgets(&self) -> WordSearchResult<()> {
        if self.placement_strategy == PlacementStrategy::RandomRetry
            && self.max_placement_attempts == 0
        {
            return Err(WordSearchError::InvalidConfig(
                "random retry placement needs at least one attempt".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<Puzzle> for PuzzleGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WordSearchResult<Puzzle> {
        config.validate()?;
        self.check_budgets()?;

        let mut grid = Grid::new(config.rows, config.cols);
        let alphabet = Alphabet::new(&config.extra_filler);

        let prepared = prepare_words(&config.words, grid.max_dimension());
        debug!(
            "{} eligible word(s), {} too long for {}x{}",
            prepared.eligible.len(),
            prepared.too_long.len(),
            config.rows,
            config.cols
        );

        // Placement search
        let search = PlacementSearch::new(self.placement_strategy, self.max_placement_attempts);
        let outcome = search.place_all(
            &mut grid,
            &prepared.eligible,
            &config.directions,
            config.max_words,
            rng,
        )?;

        // Decoys
        let decoys = if config.decoy_count > 0 {
            DecoyInjector::new(self.decoy_source, self.max_decoy_attempts).inject(
                &mut grid,
                &outcome.placements,
                config.decoy_count,
                &config.directions,
                &alphabet,
                rng,
            )?
        } else {
            Vec::new()
        };

        // Filler
        fill_grid(&mut grid, &alphabet, rng)?;

        let mut dropped = prepared.too_long;
        dropped.extend(outcome.unplaced);

        info!(
            "Generated {}x{} puzzle: {} word(s) placed, {} dropped, {} decoy(s)",
            config.rows,
            config.cols,
            outcome.placements.len(),
            dropped.len(),
            decoys.len()
        );

        Ok(Puzzle {
            grid,
            placements: outcome.placements,
            decoys,
            dropped,
        })
    }

    fn validate(&self, puzzle: &Puzzle, config: &GenerationConfig) -> WordSearchResult<()> {
        let grid = &puzzle.grid;
        if grid.rows() != config.rows || grid.cols() != config.cols {
            return Err(WordSearchError::GenerationFailed(format!(
                "grid is {}x{}, expected {}x{}",
                grid.rows(),
                grid.cols(),
                config.rows,
                config.cols
            )));
        }

        for placement in &puzzle.placements {
            if placement.letters.chars().count() > grid.max_dimension() {
                return Err(WordSearchError::GenerationFailed(format!(
                    "{} is longer than the grid allows",
                    placement.word
                )));
            }

            if !config.directions.contains(&placement.direction) {
                return Err(WordSearchError::GenerationFailed(format!(
                    "{} runs {} which is not allowed",
                    placement.word, placement.direction
                )));
            }
        }

        puzzle.check_consistency()
    }

    fn generator_type(&self) -> &'static str {
        "PuzzleGenerator"
    }
}

/// Checks that `coordinates` is the in-bounds straight path from `origin` and
/// that the grid spells `letters` along it.
fn check_path(
    grid: &Grid,
    label: &str,
    letters: &str,
    origin: Position,
    direction: Direction,
    coordinates: &[Position],
) -> WordSearchResult<()> {
    let len = letters.chars().count();
    if !grid.is_valid_position(origin) || len > grid.max_dimension() {
        return Err(WordSearchError::GenerationFailed(format!(
            "{} does not fit the grid from {}",
            label, origin
        )));
    }

    if origin.path(direction, len) != coordinates {
        return Err(WordSearchError::GenerationFailed(format!(
            "{} coordinates are not a straight path",
            label
        )));
    }

    for (&pos, ch) in coordinates.iter().zip(letters.chars()) {
        if grid.letter_at(pos) != Some(ch) {
            return Err(WordSearchError::GenerationFailed(format!(
                "{} does not match the grid at {}",
                label, pos
            )));
        }
    }
    Ok(())
}

/// Generates a puzzle with the default generator, seeding from the config.
pub fn generate_puzzle(config: &GenerationConfig) -> WordSearchResult<Puzzle> {
    let mut rng = crate::generation::utils::create_rng(config);
    PuzzleGenerator::new().generate(config, &mut rng)
}

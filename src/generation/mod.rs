//! # Generation Module
//!
//! Puzzle generation: word placement, decoy injection and the filler pass.
//!
//! [`GenerationConfig`] describes *what* to build (grid size, words, directions,
//! decoys), while the generator types carry *how* to build it (search strategy,
//! attempt budgets). Every phase takes the random source as an explicit argument.

pub mod decoys;
pub mod filler;
pub mod placement;
pub mod profile;
pub mod puzzle;
pub mod words;

pub use decoys::*;
pub use filler::*;
pub use placement::*;
pub use profile::*;
pub use puzzle::*;
pub use words::*;

use crate::config::MIN_GRID_DIMENSION;
use crate::{Direction, WordSearchError, WordSearchResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for a single puzzle generation.
///
/// # Examples
///
/// ```
/// use wordsearch::{DifficultyProfile, GenerationConfig};
///
/// let config = GenerationConfig::new(12, 12, vec!["export".into(), "import".into()])
///     .with_profile(&DifficultyProfile::Medium)
///     .with_seed(99);
/// assert_eq!(config.decoy_count, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
    /// Raw words as entered by the user
    pub words: Vec<String>,
    /// Directions words and decoys may run in
    pub directions: Vec<Direction>,
    /// Extra characters added to the filler alphabet (e.g. accented letters)
    pub extra_filler: String,
    /// Number of decoy fragments to attempt
    pub decoy_count: usize,
    /// Upper bound on how many of the shuffled eligible words are attempted
    pub max_words: Option<usize>,
    /// Random seed for reproducible generation; None draws from OS entropy
    pub seed: Option<u64>,
}

impl GenerationConfig {
    /// Creates a configuration allowing all 8 directions and no decoys.
    pub fn new(rows: usize, cols: usize, words: Vec<String>) -> Self {
        Self {
            rows,
            cols,
            words,
            directions: Direction::all(),
            extra_filler: String::new(),
            decoy_count: 0,
            max_words: None,
            seed: None,
        }
    }

    /// Creates a small, seeded configuration for tests.
    pub fn for_testing(seed: u64) -> Self {
        Self::new(
            10,
            10,
            vec![
                "export".to_string(),
                "import".to_string(),
                "invoice".to_string(),
                "shipment".to_string(),
                "freight".to_string(),
            ],
        )
        .with_seed(seed)
    }

    /// Applies a difficulty profile's directions and decoy count.
    pub fn with_profile(mut self, profile: &DifficultyProfile) -> Self {
        self.directions = profile.directions();
        self.decoy_count = profile.decoy_count();
        self
    }

    /// Sets the allowed directions.
    pub fn with_directions(mut self, directions: Vec<Direction>) -> Self {
        self.directions = directions;
        self
    }

    /// Sets the number of decoys to attempt.
    pub fn with_decoys(mut self, decoy_count: usize) -> Self {
        self.decoy_count = decoy_count;
        self
    }

    /// Sets the extra filler characters.
    pub fn with_extra_filler(mut self, extra: impl Into<String>) -> Self {
        self.extra_filler = extra.into();
        self
    }

    /// Caps the number of words attempted.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = Some(max_words);
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the configuration before any grid is allocated.
    pub fn validate(&self) -> WordSearchResult<()> {
        if self.rows < MIN_GRID_DIMENSION || self.cols < MIN_GRID_DIMENSION {
            return Err(WordSearchError::InvalidConfig(format!(
                "grid must be at least {min}x{min}, got {}x{}",
                self.rows,
                self.cols,
                min = MIN_GRID_DIMENSION
            )));
        }

        if self.directions.is_empty() {
            return Err(WordSearchError::InvalidConfig(
                "at least one direction must be allowed".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::for_testing(42)
    }
}

/// Trait for puzzle generators.
///
/// Generators own their strategy settings; the configuration and random source
/// are supplied per call so one generator can serve many independent requests.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WordSearchResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> WordSearchResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a random number generator from the config.
    ///
    /// A configured seed gives a reproducible stream; otherwise the generator is
    /// seeded from OS entropy.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_generation_config_creation() {
        let config = GenerationConfig::new(8, 12, vec!["cat".to_string()]);
        assert_eq!(config.rows, 8);
        assert_eq!(config.cols, 12);
        assert_eq!(config.directions.len(), 8);
        assert_eq!(config.decoy_count, 0);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_small_grid() {
        let config = GenerationConfig::new(0, 10, Vec::new());
        assert!(matches!(
            config.validate(),
            Err(WordSearchError::InvalidConfig(_))
        ));

        let config = GenerationConfig::new(10, MIN_GRID_DIMENSION - 1, Vec::new());
        assert!(config.validate().is_err());

        let config = GenerationConfig::new(MIN_GRID_DIMENSION, MIN_GRID_DIMENSION, Vec::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_empty_directions() {
        let config = GenerationConfig::for_testing(1).with_directions(Vec::new());
        assert!(matches!(
            config.validate(),
            Err(WordSearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_with_profile() {
        let config = GenerationConfig::for_testing(1).with_profile(&DifficultyProfile::VeryEasy);
        assert_eq!(config.directions, vec![Direction::East, Direction::South]);
        assert_eq!(config.decoy_count, 0);
    }

    #[test]
    fn test_utils_rng_is_seeded() {
        let config = GenerationConfig::for_testing(12345);
        let mut a = utils::create_rng(&config);
        let mut b = utils::create_rng(&config);
        let xs: Vec<u32> = (0..8).map(|_| a.gen()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen()).collect();
        assert_eq!(xs, ys);
    }
}

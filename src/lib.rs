//! # Wordsearch
//!
//! Word-search puzzle generation: words are placed into a letter grid along a
//! configurable set of directions, optional decoy fragments are sprinkled in to
//! raise the difficulty, and every remaining cell is filled with random letters.
//!
//! ## Architecture Overview
//!
//! Generation runs as a straight sequence of phases over a freshly allocated grid:
//!
//! - **Placement Search**: shuffles the eligible words and places each one, either by
//!   bounded random retries or by an exhaustive best-fit scan that rewards overlaps
//! - **Decoy Injection**: writes short misleading fragments into empty cells only
//! - **Filler Pass**: fills every cell that is still empty from the filler alphabet
//!
//! The [`PuzzleGenerator`] orchestrates the phases and returns a [`Puzzle`] holding
//! the grid, the placements and the decoys. Rendering to screen or paper is left to
//! the caller; [`rendering`] only offers a plain-text view and an answer key.
//!
//! ## Randomness
//!
//! Every phase draws from an explicit random source handed in by the caller, so a
//! fixed seed reproduces the same puzzle exactly.
//!
//! ```
//! use wordsearch::{GenerationConfig, Generator, PuzzleGenerator};
//! use wordsearch::generation::utils::create_rng;
//!
//! let config = GenerationConfig::new(10, 10, vec!["CAT".into(), "DOG".into()]).with_seed(7);
//! let mut rng = create_rng(&config);
//! let puzzle = PuzzleGenerator::new().generate(&config, &mut rng).unwrap();
//! assert_eq!(puzzle.placements.len(), 2);
//! assert!(puzzle.grid.is_full());
//! ```

pub mod generation;
pub mod grid;
pub mod rendering;

pub use generation::*;
pub use grid::*;
pub use rendering::*;

/// Core error type for the word-search engine.
#[derive(thiserror::Error, Debug)]
pub enum WordSearchError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generation configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A cell write landed outside the grid
    #[error("Position ({row}, {col}) is outside the grid")]
    InvalidPosition { row: i32, col: i32 },

    /// A direction, profile or strategy name could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Generated content violates a puzzle invariant
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the wordsearch codebase.
pub type WordSearchResult<T> = Result<T, WordSearchError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation configuration constants.
pub mod config {
    /// Smallest accepted number of rows or columns
    pub const MIN_GRID_DIMENSION: usize = 5;

    /// Default grid size used by the command line front end
    pub const DEFAULT_GRID_SIZE: usize = 10;

    /// Random attempts per word before it is dropped
    pub const DEFAULT_PLACEMENT_ATTEMPTS: u32 = 250;

    /// Random attempts per decoy fragment before it is discarded
    pub const DEFAULT_DECOY_ATTEMPTS: u32 = 50;

    /// Fragments drawn per requested decoy before the injector gives up
    pub const DECOY_FRAGMENT_BUDGET: usize = 4;

    /// Shortest decoy fragment
    pub const MIN_DECOY_LEN: usize = 3;

    /// Longest decoy fragment
    pub const MAX_DECOY_LEN: usize = 6;

    /// Letters every filler alphabet starts from
    pub const BASE_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
}

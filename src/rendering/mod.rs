//! # Rendering Module
//!
//! Plain-text views of a finished puzzle: the grid to solve, the word list, and
//! an answer key that shows only the letters belonging to placed words.
//!
//! Richer presentation (HTML tables, paginated documents) is left to callers,
//! who get everything they need from [`crate::Puzzle`] and its highlight set.

pub mod text;

pub use text::*;

//! # Word Preparation
//!
//! Normalizes raw user input into placeable words and applies the length filter.

use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A normalized word ready for placement.
///
/// `display` keeps the uppercased input including inner spaces (`"ICE CREAM"`),
/// while `letters` is what actually goes into the grid (`ICECREAM`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    pub display: String,
    pub letters: Vec<char>,
}

impl Word {
    /// Normalizes a raw word. Returns None if nothing placeable remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch::Word;
    ///
    /// let word = Word::new("  ice cream ").unwrap();
    /// assert_eq!(word.display, "ICE CREAM");
    /// assert_eq!(word.text(), "ICECREAM");
    /// assert!(Word::new("   ").is_none());
    /// ```
    pub fn new(raw: &str) -> Option<Self> {
        let display = raw.trim().to_uppercase();
        let letters: Vec<char> = display.chars().filter(|c| !c.is_whitespace()).collect();
        if letters.is_empty() {
            return None;
        }
        Some(Self { display, letters })
    }

    /// Number of grid cells the word occupies.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; empty words are rejected by [`Word::new`].
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letters as a string, without whitespace.
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }

    /// Returns true if the word can fit in a grid whose longer side is `max_dimension`.
    pub fn is_eligible(&self, max_dimension: usize) -> bool {
        self.len() <= max_dimension
    }
}

/// Result of preparing a raw word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparedWords {
    /// Words that passed normalization, deduplication and the length filter
    pub eligible: Vec<Word>,
    /// Uppercased words rejected for being longer than the grid allows
    pub too_long: Vec<String>,
}

/// Normalizes, deduplicates and length-filters a raw word list.
///
/// Blank entries are skipped. Repeats of an already-seen word (compared by
/// placed letters) are skipped. Words longer than `max_dimension` are reported
/// in `too_long` and never placed.
pub fn prepare_words(raw: &[String], max_dimension: usize) -> PreparedWords {
    let mut prepared = PreparedWords::default();
    let mut seen: HashSet<Vec<char>> = HashSet::new();

    for entry in raw {
        let Some(word) = Word::new(entry) else {
            continue;
        };

        if !seen.insert(word.letters.clone()) {
            trace!("Skipping duplicate word {}", word.display);
            continue;
        }

        if !word.is_eligible(max_dimension) {
            trace!(
                "Dropping {}: length {} exceeds grid dimension {}",
                word.display,
                word.len(),
                max_dimension
            );
            prepared.too_long.push(word.display);
            continue;
        }

        prepared.eligible.push(word);
    }

    prepared
}

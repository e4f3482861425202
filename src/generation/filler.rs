//! # Filler Pass
//!
//! Fills every cell left empty after placement and decoys with random letters.

use crate::config::BASE_ALPHABET;
use crate::{Cell, Grid, WordSearchError, WordSearchResult};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The characters filler and random decoys are drawn from.
///
/// Always contains `A`–`Z`, plus any extra characters supplied by the caller
/// (uppercased, whitespace ignored, duplicates dropped). A deserialized
/// alphabet with no letters is rejected.
///
/// # Examples
///
/// ```
/// use wordsearch::Alphabet;
///
/// let alphabet = Alphabet::new("éñ a");
/// assert_eq!(alphabet.len(), 28);
/// assert!(alphabet.contains('É'));
/// assert!(alphabet.contains('Ñ'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AlphabetRepr")]
pub struct Alphabet {
    letters: Vec<char>,
}

#[derive(Deserialize)]
struct AlphabetRepr {
    letters: Vec<char>,
}

impl TryFrom<AlphabetRepr> for Alphabet {
    type Error = WordSearchError;

    fn try_from(repr: AlphabetRepr) -> Result<Self, Self::Error> {
        if repr.letters.is_empty() {
            return Err(WordSearchError::Parse(
                "alphabet needs at least one letter".to_string(),
            ));
        }
        Ok(Self {
            letters: repr.letters,
        })
    }
}

impl Alphabet {
    /// Builds the base alphabet extended with `extra`.
    pub fn new(extra: &str) -> Self {
        let mut letters: Vec<char> = BASE_ALPHABET.chars().collect();
        for ch in extra.chars().filter(|c| !c.is_whitespace()) {
            for upper in ch.to_uppercase() {
                if !letters.contains(&upper) {
                    letters.push(upper);
                }
            }
        }
        Self { letters }
    }

    /// All characters in the alphabet.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of characters in the alphabet.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; every constructor leaves at least one letter.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns true if `ch` is part of the alphabet.
    pub fn contains(&self, ch: char) -> bool {
        self.letters.contains(&ch)
    }

    /// Draws a uniformly random character.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> char {
        self.letters[rng.gen_range(0..self.letters.len())]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new("")
    }
}

/// Writes random alphabet characters into every empty cell.
///
/// Occupied cells are never touched, so running the pass twice is harmless.
/// Returns the number of cells filled.
pub fn fill_grid<R: Rng>(
    grid: &mut Grid,
    alphabet: &Alphabet,
    rng: &mut R,
) -> WordSearchResult<usize> {
    let empty = grid.empty_positions();
    for &pos in &empty {
        grid.set_cell(pos, Cell::Letter(alphabet.choose(rng)))?;
    }

    debug!("Filler pass wrote {} cell(s)", empty.len());
    Ok(empty.len())
}

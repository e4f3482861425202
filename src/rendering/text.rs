//! # Text Rendering
//!
//! Renders puzzles as monospace text suitable for a terminal or a plain file.

use crate::{Cell, Grid, Position, Puzzle};
use std::collections::HashSet;
use std::fmt::Write;

/// Renders grids and answer keys as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRenderer {
    /// Placed between letters on a row
    pub separator: String,
    /// Shown for cells hidden in the answer key (and for empty cells)
    pub blank: char,
}

impl TextRenderer {
    /// Creates a renderer that separates letters with a single space.
    pub fn new() -> Self {
        Self {
            separator: " ".to_string(),
            blank: '.',
        }
    }

    /// Renders every cell of the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch::{Cell, Grid, Position, TextRenderer};
    ///
    /// let mut grid = Grid::new(2, 3);
    /// grid.set_cell(Position::new(0, 1), Cell::Letter('A')).unwrap();
    /// assert_eq!(TextRenderer::new().render_grid(&grid), ". A .\n. . .\n");
    /// ```
    pub fn render_grid(&self, grid: &Grid) -> String {
        self.render_cells(grid, |_, cell| cell.letter())
    }

    /// Renders only the highlighted cells; everything else shows as the blank marker.
    pub fn render_answer_key(&self, grid: &Grid, highlight: &HashSet<Position>) -> String {
        self.render_cells(grid, |pos, cell| {
            if highlight.contains(&pos) {
                cell.letter()
            } else {
                None
            }
        })
    }

    /// Lists each placed word with its origin and direction.
    pub fn render_word_list(&self, puzzle: &Puzzle) -> String {
        let mut out = String::new();
        for placement in &puzzle.placements {
            let _ = writeln!(
                out,
                "{} at {} {}",
                placement.word, placement.origin, placement.direction
            );
        }
        out
    }

    /// Renders the full sheet: puzzle, word list, dropped words and solution view.
    pub fn render_puzzle(&self, puzzle: &Puzzle) -> String {
        let mut out = String::new();
        out.push_str("Word Search Puzzle\n\n");
        out.push_str(&self.render_grid(&puzzle.grid));

        if !puzzle.placements.is_empty() {
            out.push_str("\nWords Placed\n");
            out.push_str(&self.render_word_list(puzzle));
        }

        if !puzzle.dropped.is_empty() {
            let _ = writeln!(out, "\nNot placed: {}", puzzle.dropped.join(", "));
        }

        out.push_str("\nSolution View\n\n");
        out.push_str(&self.render_answer_key(&puzzle.grid, &puzzle.highlight_coordinates()));
        out
    }

    fn render_cells<F>(&self, grid: &Grid, mut visible: F) -> String
    where
        F: FnMut(Position, Cell) -> Option<char>,
    {
        let mut out = String::new();
        for (r, row) in grid.row_cells().iter().enumerate() {
            let line: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(c, &cell)| {
                    visible(Position::new(r as i32, c as i32), cell)
                        .unwrap_or(self.blank)
                        .to_string()
                })
                .collect();
            out.push_str(&line.join(&self.separator));
            out.push('\n');
        }
        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{place_word, Direction, Placement};

    fn sample_puzzle() -> Puzzle {
        let mut grid = Grid::new(3, 3);
        let letters: Vec<char> = "CAT".chars().collect();
        let coordinates = place_word(&mut grid, &letters, Position::new(1, 0), Direction::East).unwrap();
        for pos in grid.empty_positions() {
            grid.set_cell(pos, Cell::Letter('X')).unwrap();
        }
        Puzzle {
            grid,
            placements: vec![Placement {
                word: "CAT".to_string(),
                letters: "CAT".to_string(),
                direction: Direction::East,
                origin: Position::new(1, 0),
                coordinates,
            }],
            decoys: Vec::new(),
            dropped: vec!["ELEPHANT".to_string()],
        }
    }

    #[test]
    fn test_render_grid() {
        let puzzle = sample_puzzle();
        let text = TextRenderer::new().render_grid(&puzzle.grid);
        assert_eq!(text, "X X X\nC A T\nX X X\n");
    }

    #[test]
    fn test_render_answer_key() {
        let puzzle = sample_puzzle();
        let key = TextRenderer::new().render_answer_key(&puzzle.grid, &puzzle.highlight_coordinates());
        assert_eq!(key, ". . .\nC A T\n. . .\n");
    }

    #[test]
    fn test_custom_separator() {
        let renderer = TextRenderer {
            separator: String::new(),
            blank: '-',
        };
        let puzzle = sample_puzzle();
        assert_eq!(
            renderer.render_answer_key(&puzzle.grid, &puzzle.highlight_coordinates()),
            "---\nCAT\n---\n"
        );
    }

    #[test]
    fn test_render_puzzle_sheet() {
        let sheet = TextRenderer::new().render_puzzle(&sample_puzzle());
        assert!(sheet.starts_with("Word Search Puzzle\n"));
        assert!(sheet.contains("CAT at (1, 0) E\n"));
        assert!(sheet.contains("Not placed: ELEPHANT"));
        assert!(sheet.ends_with("Solution View\n\n. . .\nC A T\n. . .\n"));
    }
}

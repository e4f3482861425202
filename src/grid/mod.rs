//! # Grid Module
//!
//! The letter grid a puzzle is built on, and the coordinates used to address it.
//!
//! Cells hold a single Unicode scalar value, so accented letters such as `É`
//! occupy exactly one cell wherever they appear.

pub mod direction;

pub use direction::*;

use crate::{WordSearchError, WordSearchResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(row, col)` coordinate in the grid.
///
/// Coordinates are signed so that walking off an edge produces a position that
/// is simply out of bounds instead of wrapping.
///
/// # Examples
///
/// ```
/// use wordsearch::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.row, 2);
/// assert_eq!(pos.col, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the ordered path of `len` positions starting here and running in `direction`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch::{Direction, Position};
    ///
    /// let path = Position::new(1, 1).path(Direction::Southeast, 3);
    /// assert_eq!(path, vec![Position::new(1, 1), Position::new(2, 2), Position::new(3, 3)]);
    /// ```
    pub fn path(self, direction: Direction, len: usize) -> Vec<Position> {
        (0..len).map(|i| direction.step(self, i)).collect()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing written yet
    #[default]
    Empty,
    /// A letter belonging to a word, a decoy or filler
    Letter(char),
}

impl Cell {
    /// Returns true if nothing has been written to this cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the letter in this cell, if any.
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Letter(ch) => Some(ch),
        }
    }

    /// Returns true if the cell is empty or already holds `ch`.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Letter(existing) => existing == ch,
        }
    }
}

/// A fixed-size `rows × cols` grid of cells.
///
/// The grid is allocated once per generation and only ever written through
/// [`Grid::set_cell`], which rejects coordinates outside the grid. Deserialized
/// grids must have exactly `rows` rows of `cols` cells each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

/// Unchecked wire form of [`Grid`].
#[derive(Deserialize)]
struct GridRepr {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = WordSearchError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        if repr.cells.len() != repr.rows {
            return Err(WordSearchError::Parse(format!(
                "grid declares {} rows but has {}",
                repr.rows,
                repr.cells.len()
            )));
        }
        if let Some((r, row)) = repr
            .cells
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != repr.cols)
        {
            return Err(WordSearchError::Parse(format!(
                "grid row {} has {} cells, expected {}",
                r,
                row.len(),
                repr.cols
            )));
        }
        if i32::try_from(repr.rows).is_err() || i32::try_from(repr.cols).is_err() {
            return Err(WordSearchError::Parse(format!(
                "grid {}x{} is too large",
                repr.rows, repr.cols
            )));
        }

        Ok(Self {
            rows: repr.rows,
            cols: repr.cols,
            cells: repr.cells,
        })
    }
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch::Grid;
    ///
    /// let grid = Grid::new(4, 6);
    /// assert_eq!(grid.rows(), 4);
    /// assert_eq!(grid.cols(), 6);
    /// assert_eq!(grid.empty_positions().len(), 24);
    /// ```
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![Cell::Empty; cols]; rows],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The longer of the two dimensions; words longer than this can never fit.
    pub fn max_dimension(&self) -> usize {
        self.rows.max(self.cols)
    }

    /// Checks if a position lies inside the grid.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.col >= 0 && (pos.row as usize) < self.rows && (pos.col as usize) < self.cols
    }

    /// Gets the cell at a position, or None if the position is out of bounds.
    pub fn get_cell(&self, pos: Position) -> Option<Cell> {
        if !self.is_valid_position(pos) {
            return None;
        }
        Some(self.cells[pos.row as usize][pos.col as usize])
    }

    /// Gets the letter at a position, or None if the position is empty or out of bounds.
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.get_cell(pos).and_then(Cell::letter)
    }

    /// Writes a cell.
    pub fn set_cell(&mut self, pos: Position, cell: Cell) -> WordSearchResult<()> {
        if !self.is_valid_position(pos) {
            return Err(WordSearchError::InvalidPosition {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[pos.row as usize][pos.col as usize] = cell;
        Ok(())
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| Position::new(r as i32, c as i32)))
    }

    /// Returns every position that is still empty, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions()
            .filter(|&pos| self.get_cell(pos).map_or(false, Cell::is_empty))
            .collect()
    }

    /// Returns true once no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Returns the distinct letters currently in the grid, in first-seen order.
    pub fn letters(&self) -> Vec<char> {
        let mut letters = Vec::new();
        for ch in self.cells.iter().flatten().filter_map(|cell| cell.letter()) {
            if !letters.contains(&ch) {
                letters.push(ch);
            }
        }
        letters
    }

    /// Returns each row as a vector of cells.
    pub fn row_cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }
}

//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell is empty (`0`) or holds a power of two.
//! Uses a flat array in row-major order so the board is `Copy` and moves never allocate.
//! Coordinates: (row, col) where both range 0..3, (0, 0) is the top-left corner.
//!
//! A move collapses each line perpendicular to its direction with one shared
//! algorithm (compact, single merge pass, compact again). The direction only
//! decides which cells form a line and in which order they are read, starting
//! from the edge tiles slide toward.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{
    is_tile_value, Cell, Direction, GameError, Position, Result, BOARD_SIZE, CELL_COUNT,
};

/// Cells of one row or column, ordered from the origin edge outward
type Line = [Cell; BOARD_SIZE];

/// Result of applying a direction to a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Board after sliding and merging (no spawn)
    pub board: Board,
    /// Sum of every tile produced by a merge during this move
    pub score_delta: u32,
    /// False when the move left every cell untouched
    pub changed: bool,
}

/// The game board - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * BOARD_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a board from rows, rejecting values that are not valid tiles
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self> {
        let mut board = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value != 0 && !is_tile_value(value) {
                    return Err(GameError::InvalidTile { row, col, value });
                }
                board.cells[Self::index(row, col)] = value;
            }
        }
        Ok(board)
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        row * BOARD_SIZE + col
    }

    /// Flat indices of line `line` for `direction`, origin edge first
    #[inline(always)]
    fn line_indices(direction: Direction, line: usize) -> [usize; BOARD_SIZE] {
        let mut out = [0; BOARD_SIZE];
        for (step, slot) in out.iter_mut().enumerate() {
            let far = BOARD_SIZE - 1 - step;
            *slot = match direction {
                Direction::Left => Self::index(line, step),
                Direction::Right => Self::index(line, far),
                Direction::Up => Self::index(step, line),
                Direction::Down => Self::index(far, line),
            };
        }
        out
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(self.cells[Self::index(row, col)])
    }

    /// Set cell at (row, col) to empty (`0`) or a tile value
    /// Returns false if out of bounds or `value` is not a valid tile
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> bool {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return false;
        }
        if value != 0 && !is_tile_value(value) {
            return false;
        }
        self.cells[Self::index(row, col)] = value;
        true
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid out as rows
    pub fn rows(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (row, values) in rows.iter_mut().enumerate() {
            let start = row * BOARD_SIZE;
            values.copy_from_slice(&self.cells[start..start + BOARD_SIZE]);
        }
        rows
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }

    /// Slide and merge every line toward the edge `direction` points at.
    ///
    /// The receiver is left untouched; the moved board is returned in the outcome.
    pub fn apply(&self, direction: Direction) -> MoveOutcome {
        let mut board = *self;
        let mut score_delta = 0;

        for line in 0..BOARD_SIZE {
            let indices = Self::line_indices(direction, line);
            let values = indices.map(|i| self.cells[i]);
            let (collapsed, score) = collapse_line(values);
            for (&i, value) in indices.iter().zip(collapsed) {
                board.cells[i] = value;
            }
            score_delta += score;
        }

        MoveOutcome {
            board,
            score_delta,
            changed: board.cells != self.cells,
        }
    }

    /// Whether `apply(direction)` would change anything
    pub fn can_move(&self, direction: Direction) -> bool {
        self.apply(direction).changed
    }

    /// All empty positions in row-major order (stack-only)
    pub fn empty_cells(&self) -> ArrayVec<Position, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == 0)
            .map(|(i, _)| (i / BOARD_SIZE, i % BOARD_SIZE))
            .collect()
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 0).count()
    }

    /// True if any cell holds `value`
    pub fn contains(&self, value: Cell) -> bool {
        self.cells.contains(&value)
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True while at least one direction can still change the board:
    /// an empty cell exists, or two orthogonal neighbours hold the same tile.
    pub fn has_any_move(&self) -> bool {
        if self.cells.contains(&0) {
            return true;
        }

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = self.cells[Self::index(row, col)];
                if col + 1 < BOARD_SIZE && self.cells[Self::index(row, col + 1)] == value {
                    return true;
                }
                if row + 1 < BOARD_SIZE && self.cells[Self::index(row + 1, col)] == value {
                    return true;
                }
            }
        }

        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, values) in self.rows().iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, value) in values.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if *value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
        }
        Ok(())
    }
}

/// Collapse one line toward index 0.
///
/// Returns the new line and the score earned by its merges. A tile produced by
/// a merge is skipped for the rest of the pass, so `[2, 2, 2, 0]` becomes
/// `[4, 2, 0, 0]` rather than merging three tiles.
fn collapse_line(line: Line) -> (Line, u32) {
    let compacted: ArrayVec<Cell, BOARD_SIZE> =
        line.iter().copied().filter(|&value| value != 0).collect();

    let mut out = [0; BOARD_SIZE];
    let mut write = 0;
    let mut score = 0;
    let mut read = 0;

    while read < compacted.len() {
        let value = compacted[read];
        if read + 1 < compacted.len() && compacted[read + 1] == value {
            // Inputs are capped at MAX_TILE_VALUE, so doubling stays in range.
            let merged = value * 2;
            out[write] = merged;
            score += merged;
            read += 2;
        } else {
            out[write] = value;
            read += 1;
        }
        write += 1;
    }

    (out, score)
}

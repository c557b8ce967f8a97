//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! They are plain data with no I/O, usable from the core rules, the terminal
//! frontend and any other host that drives a game.
//!
//! # Board Dimensions
//!
//! The puzzle is played on a fixed 4x4 grid. Positions are `(row, col)` with
//! `(0, 0)` in the top-left corner; every iteration over the grid is row-major.
//!
//! # Spawn Policy Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TILES` | 2 | Tiles spawned on a fresh board |
//! | `SPAWN_FOUR_PERCENT` | 10 | Chance (in percent) that a spawned tile is a 4 |
//! | `MAX_TILE_VALUE` | 131072 | Largest tile or mode accepted from a host |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GameMode, GameStatus, BOARD_SIZE};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! let mode = GameMode::new(4096).unwrap();
//! assert_eq!(mode.value(), 4096);
//! assert!(GameMode::new(100).is_err());
//!
//! assert_eq!(GameAction::from_str("undo"), Some(GameAction::Undo));
//! assert!(GameStatus::Won.is_terminal());
//! assert_eq!(BOARD_SIZE, 4);
//! ```

use std::fmt;

use thiserror::Error;

/// Side length of the square board (4 cells)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of tiles spawned when a board is (re)started
pub const INITIAL_TILES: usize = 2;

/// Chance, in percent, that a spawned tile is a 4 instead of a 2
pub const SPAWN_FOUR_PERCENT: u32 = 10;

/// Smallest value a mode may target
pub const MIN_MODE_VALUE: u32 = 4;

/// Largest tile a 4x4 board can build (2^17), and the largest accepted tile or mode.
///
/// Two of these merge into 2^18, and a whole move scores at most 8 such merges,
/// so neither tiles nor score deltas come near `u32::MAX`.
pub const MAX_TILE_VALUE: Cell = 1 << 17;

/// Win target used when nothing else is configured
pub const DEFAULT_MODE_VALUE: u32 = 2048;

/// Modes bound to the number keys, in key order
pub const MODE_PRESETS: [u32; 3] = [2048, 4096, 8192];

/// A cell on the game board
///
/// - `0`: Empty cell
/// - otherwise: a tile holding that power of two
pub type Cell = u32;

/// Board position as `(row, col)`
pub type Position = (usize, usize);

/// Errors raised while building game values from host-supplied input.
///
/// Gameplay itself never fails; only construction and parsing can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("mode {0} is not a power of two between 4 and 131072")]
    InvalidMode(u32),
    #[error("tile {value} at ({row}, {col}) is not a power of two between 2 and 131072")]
    InvalidTile { row: usize, col: usize, value: Cell },
    #[error("unrecognized {kind}: {input:?}")]
    Parse { kind: &'static str, input: String },
}

pub type Result<T> = std::result::Result<T, GameError>;

/// True for the values a tile may hold (powers of two from 2 to [`MAX_TILE_VALUE`]).
pub const fn is_tile_value(value: Cell) -> bool {
    value >= 2 && value <= MAX_TILE_VALUE && value.is_power_of_two()
}

/// Slide directions
///
/// Each direction collapses the lines perpendicular to it toward its origin
/// edge: rows for Left/Right, columns for Up/Down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "left" | "l", "right" | "r",
    /// "up" | "u", "down" | "d".
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("Up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("d"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// The direction pointing the other way
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// True for Left/Right, whose lines are rows
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Win target of a session
///
/// A mode is any power of two from [`MIN_MODE_VALUE`] to [`MAX_TILE_VALUE`]. It only changes
/// the win check; move mechanics are identical across modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameMode(u32);

impl GameMode {
    /// Validate and wrap a target value
    ///
    /// ```
    /// use tui_2048_types::{GameError, GameMode};
    ///
    /// assert_eq!(GameMode::new(8192).unwrap().value(), 8192);
    /// assert_eq!(GameMode::new(2), Err(GameError::InvalidMode(2)));
    /// assert_eq!(GameMode::new(3000), Err(GameError::InvalidMode(3000)));
    /// assert_eq!(GameMode::new(1 << 18), Err(GameError::InvalidMode(1 << 18)));
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if value >= MIN_MODE_VALUE && is_tile_value(value) {
            Ok(Self(value))
        } else {
            Err(GameError::InvalidMode(value))
        }
    }

    /// The tile value that wins the game
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The preset modes, smallest first
    pub fn presets() -> [GameMode; 3] {
        MODE_PRESETS.map(GameMode)
    }
}

impl Default for GameMode {
    fn default() -> Self {
        Self(DEFAULT_MODE_VALUE)
    }
}

impl std::str::FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().parse::<u32>().map_err(|_| GameError::Parse {
            kind: "mode",
            input: s.to_string(),
        })?;
        Self::new(value)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session status
///
/// `Won` and `Lost` are terminal: moves are rejected until an undo, reset or
/// mode switch reopens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Commands a host can send to a session
///
/// These are exactly the four state mutators of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile toward one edge
    Move(Direction),
    /// Revert the most recent committed move
    Undo,
    /// Start a fresh board in the current mode
    Restart,
    /// Switch win target (also starts a fresh board)
    SetMode(GameMode),
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction, GameMode};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(
    ///     GameAction::from_str("mode4096"),
    ///     Some(GameAction::SetMode(GameMode::new(4096).unwrap()))
    /// );
    /// assert_eq!(GameAction::from_str("mode100"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if let Some(dir) = lower.strip_prefix("move") {
            return Direction::from_str(dir).map(GameAction::Move);
        }
        if let Some(value) = lower.strip_prefix("mode") {
            return value.parse::<GameMode>().ok().map(GameAction::SetMode);
        }
        match lower.as_str() {
            "undo" => Some(GameAction::Undo),
            "restart" | "reset" => Some(GameAction::Restart),
            _ => None,
        }
    }
}

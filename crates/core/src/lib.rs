//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Generators can be injected, positions can be loaded directly
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Board moves work on a `Copy` grid and never allocate
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid, the line-collapse move and terminal queries
//! - [`session`]: score, win target, undo history and the move pipeline
//! - [`rng`]: random tile spawning (2 at 90%, 4 at 10%)
//! - [`snapshot`]: undo entries and the render-facing game snapshot
//!
//! # Game Rules
//!
//! - **Slide**: every tile moves as far as possible toward the chosen edge
//! - **Merge**: two equal neighbours in a line merge once per move, the one
//!   nearer the edge wins; a merged tile never merges again in the same move
//! - **Spawn**: each move that changes the board adds one tile on a random empty cell
//! - **Win**: a tile reaches the mode value (checked before loss)
//! - **Loss**: the board is full and no neighbours are equal
//! - **Undo**: unlimited, restores board and score and reopens a finished game
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameSession;
//! use tui_2048_types::{Direction, GameAction, GameMode};
//!
//! // Create a reproducible game
//! let mut game = GameSession::with_seed(GameMode::default(), 12345);
//!
//! // Apply host commands
//! for dir in Direction::ALL {
//!     game.apply_action(GameAction::Move(dir));
//! }
//!
//! // Read state back for rendering
//! let snap = game.snapshot();
//! assert_eq!(snap.score, game.score());
//! assert!(game.undo() || !snap.can_undo);
//! ```

pub mod board;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveOutcome};
pub use rng::{seeded, spawn_tile, spawn_value};
pub use session::GameSession;
pub use snapshot::{GameSnapshot, UndoSnapshot};

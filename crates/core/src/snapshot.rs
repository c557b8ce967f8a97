use crate::board::Board;
use crate::types::{Cell, GameMode, GameStatus, BOARD_SIZE};

/// Saved (board, score) pair, pushed right before a move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UndoSnapshot {
    pub board: Board,
    pub score: u32,
}

/// Everything a host needs to draw the game after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub mode: GameMode,
    pub status: GameStatus,
    pub can_undo: bool,
    pub undo_depth: u32,
    pub move_count: u32,
    pub episode_id: u32,
    pub max_tile: Cell,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.board
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&value| value != 0)
            .count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            mode: GameMode::default(),
            status: GameStatus::InProgress,
            can_undo: false,
            undo_depth: 0,
            move_count: 0,
            episode_id: 0,
            max_tile: 0,
        }
    }
}

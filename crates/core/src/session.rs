//! Game session module - manages the complete game state
//!
//! A session ties the board to everything around it: score, win target, undo
//! history and the tile spawner. Each committed move runs the same pipeline:
//! snapshot, apply, spawn, re-derive status. Commands that cannot change
//! anything (moves after the game ended, no-op slides, undo with no history)
//! leave the session untouched.

use rand::rngs::StdRng;
use rand::Rng;

use crate::board::Board;
use crate::rng::{from_entropy, seeded, spawn_tile};
use crate::snapshot::{GameSnapshot, UndoSnapshot};
use crate::types::{Direction, GameAction, GameMode, GameStatus, INITIAL_TILES};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    board: Board,
    score: u32,
    mode: GameMode,
    status: GameStatus,
    /// Most recent snapshot last.
    history: Vec<UndoSnapshot>,
    rng: R,
    /// Committed moves in the current episode (undo rewinds it).
    move_count: u32,
    /// Monotonic episode id (increments on reset and mode switch).
    episode_id: u32,
}

impl GameSession<StdRng> {
    /// Start a game with an entropy-seeded generator
    pub fn new(mode: GameMode) -> Self {
        Self::with_rng(mode, from_entropy())
    }

    /// Start a reproducible game from a seed
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::with_rng(mode, seeded(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a game with a caller-supplied generator
    pub fn with_rng(mode: GameMode, rng: R) -> Self {
        let mut session = Self::with_board(mode, Board::new(), rng);
        session.spawn_initial_tiles();
        session
    }

    /// Resume from an existing position.
    ///
    /// History starts empty and no tiles are spawned; status is derived from
    /// the board with the usual win-before-loss rule.
    pub fn with_board(mode: GameMode, board: Board, rng: R) -> Self {
        let mut session = Self {
            board,
            score: 0,
            mode,
            status: GameStatus::InProgress,
            history: Vec::new(),
            rng,
            move_count: 0,
            episode_id: 0,
        };
        session.status = session.derive_status();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.rows();
        out.score = self.score;
        out.mode = self.mode;
        out.status = self.status;
        out.can_undo = self.can_undo();
        out.undo_depth = self.history.len() as u32;
        out.move_count = self.move_count;
        out.episode_id = self.episode_id;
        out.max_tile = self.board.max_tile();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Slide the board in `direction`.
    ///
    /// Returns true when the move was committed (board changed, score added,
    /// tile spawned, status re-derived). Moves on a finished game and slides
    /// that change nothing return false and mutate nothing.
    pub fn make_move(&mut self, direction: Direction) -> bool {
        if self.status.is_terminal() {
            log::trace!("move {} ignored: game is {}", direction, self.status.as_str());
            return false;
        }

        self.history.push(UndoSnapshot {
            board: self.board,
            score: self.score,
        });

        let outcome = self.board.apply(direction);
        if !outcome.changed {
            self.history.pop();
            return false;
        }

        self.board = outcome.board;
        self.score = self.score.saturating_add(outcome.score_delta);
        self.move_count = self.move_count.wrapping_add(1);
        self.spawn();
        self.status = self.derive_status();

        log::trace!(
            "move {} merged {} (score {}), board:\n{}",
            direction,
            outcome.score_delta,
            self.score,
            self.board
        );
        if self.status.is_terminal() {
            log::debug!(
                "game {} after {} moves with score {}",
                self.status.as_str(),
                self.move_count,
                self.score
            );
        }

        true
    }

    /// Revert the most recent committed move.
    ///
    /// The restored position is always playable, even if the undone move had
    /// ended the game. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };

        self.board = previous.board;
        self.score = previous.score;
        self.status = GameStatus::InProgress;
        self.move_count = self.move_count.saturating_sub(1);
        log::debug!("undo: score back to {}, {} left", self.score, self.history.len());
        true
    }

    /// Discard the game and start a fresh board in the current mode
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.move_count = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawn_initial_tiles();
        log::debug!("episode {} started in mode {}", self.episode_id, self.mode);
    }

    /// Change the win target and start a fresh board
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// Apply a host command
    ///
    /// Returns whether the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.make_move(direction),
            GameAction::Undo => self.undo(),
            GameAction::Restart => {
                self.reset();
                true
            }
            GameAction::SetMode(mode) => {
                self.set_mode(mode);
                true
            }
        }
    }

    fn spawn_initial_tiles(&mut self) {
        for _ in 0..INITIAL_TILES {
            self.spawn();
        }
    }

    fn spawn(&mut self) {
        if spawn_tile(&mut self.board, &mut self.rng).is_none() {
            log::debug!("no empty cell, spawn skipped");
        }
    }

    fn derive_status(&self) -> GameStatus {
        if self.board.contains(self.mode.value()) {
            GameStatus::Won
        } else if !self.board.has_any_move() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameSession<StdRng> {
    fn default() -> Self {
        Self::with_seed(GameMode::default(), 1)
    }
}

//! RNG module - random tile spawning
//!
//! New tiles land on a uniformly chosen empty cell. The value is a 2 nine times
//! out of ten and a 4 otherwise.
//!
//! Every function takes the generator explicitly so games can be replayed from
//! a seed (see [`seeded`]) or driven by a scripted generator in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::types::{Cell, Position, SPAWN_FOUR_PERCENT};

/// Deterministic generator for a given seed
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from operating system entropy
pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Draw the value of a new tile: 2 (90%) or 4 (10%)
pub fn spawn_value<R: Rng + ?Sized>(rng: &mut R) -> Cell {
    if rng.gen_range(0..100) < SPAWN_FOUR_PERCENT {
        4
    } else {
        2
    }
}

/// Place one random tile on a random empty cell.
///
/// Returns where the tile went and its value, or `None` when the board has no
/// empty cell (nothing is drawn from the generator in that case).
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<(Position, Cell)> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = spawn_value(rng);
    board.set(row, col, value);
    Some(((row, col), value))
}

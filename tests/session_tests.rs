//! Session tests - move pipeline, undo history and resets

use rand::rngs::mock::StepRng;

use tui_2048::core::{Board, GameSession};
use tui_2048::types::{Direction, GameAction, GameMode, GameStatus};

fn mode(value: u32) -> GameMode {
    GameMode::new(value).unwrap()
}

fn scripted(rows: [[u32; 4]; 4], target: u32) -> GameSession<StepRng> {
    GameSession::with_board(mode(target), Board::from_rows(rows).unwrap(), StepRng::new(0, 0))
}

fn assert_fresh<R: rand::Rng>(session: &GameSession<R>) {
    assert_eq!(session.score(), 0);
    assert!(!session.can_undo());
    assert_eq!(session.status(), GameStatus::InProgress);
    let tiles: Vec<u32> = session.board().cells().iter().copied().filter(|&v| v != 0).collect();
    assert_eq!(tiles.len(), 2, "board:\n{}", session.board());
    assert!(tiles.iter().all(|&v| v == 2 || v == 4));
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let mut a = GameSession::with_seed(GameMode::default(), 7);
    let mut b = GameSession::with_seed(GameMode::default(), 7);
    assert_eq!(a.board(), b.board());

    for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down].repeat(5) {
        assert_eq!(a.make_move(direction), b.make_move(direction));
        assert_eq!(a.board(), b.board());
        assert_eq!(a.score(), b.score());
    }
}

#[test]
fn test_move_then_undo_restores_exactly() {
    let mut session = GameSession::with_seed(GameMode::default(), 99);
    let mut history = Vec::new();

    for direction in Direction::ALL.iter().cycle().take(40) {
        let before = (*session.board(), session.score());
        if session.make_move(*direction) {
            history.push(before);
        }
        if session.status().is_terminal() {
            break;
        }
    }
    assert_eq!(session.undo_depth(), history.len());

    while let Some((board, score)) = history.pop() {
        assert!(session.undo());
        assert_eq!(*session.board(), board);
        assert_eq!(session.score(), score);
        assert_eq!(session.status(), GameStatus::InProgress);
    }
    assert!(!session.undo());
    assert_eq!(session.move_count(), 0);
}

#[test]
fn test_noop_move_changes_nothing() {
    let mut session = scripted([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]], 2048);
    let before = *session.board();

    for direction in [Direction::Left, Direction::Right, Direction::Up] {
        assert!(!session.make_move(direction));
        assert_eq!(*session.board(), before);
        assert_eq!(session.score(), 0);
        assert_eq!(session.undo_depth(), 0);
    }
}

#[test]
fn test_win_takes_precedence_over_loss() {
    // Left merges 4+4 into the target; the spawn fills the last gap and leaves
    // no equal neighbours, so the same move both wins and locks the board.
    let mut session = scripted(
        [
            [4, 4, 16, 32],
            [64, 128, 256, 512],
            [128, 64, 512, 256],
            [64, 128, 256, 512],
        ],
        8,
    );
    assert_eq!(session.status(), GameStatus::InProgress);

    assert!(session.make_move(Direction::Left));
    assert_eq!(session.board().rows()[0], [8, 16, 32, 4]);
    assert!(!session.board().has_any_move());
    assert_eq!(session.status(), GameStatus::Won);

    // Finished games ignore moves until undone.
    assert!(!session.make_move(Direction::Right));
    assert!(session.undo());
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_reaching_target_in_larger_mode() {
    let mut session = scripted([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]], 2048);
    assert!(session.make_move(Direction::Right));
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.score(), 2048);

    let mut session = scripted([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]], 4096);
    assert!(session.make_move(Direction::Right));
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_reset_starts_a_fresh_board() {
    let mut session = GameSession::with_seed(GameMode::default(), 5);
    for direction in Direction::ALL {
        session.make_move(direction);
    }

    session.reset();
    assert_fresh(&session);
    assert_eq!(session.mode().value(), 2048);
    assert_eq!(session.move_count(), 0);
}

#[test]
fn test_set_mode_switches_target_and_resets() {
    let mut session = GameSession::with_seed(GameMode::default(), 11);
    session.make_move(Direction::Down);

    for preset in GameMode::presets() {
        session.set_mode(preset);
        assert_eq!(session.mode(), preset);
        assert_fresh(&session);
    }
}

#[test]
fn test_apply_action_reports_change() {
    let mut session = scripted([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 2048);

    assert!(!session.apply_action(GameAction::Undo));
    assert!(session.apply_action(GameAction::Move(Direction::Left)));
    assert!(session.apply_action(GameAction::Undo));
    assert_eq!(session.board().rows()[0], [2, 2, 0, 0]);

    assert!(session.apply_action(GameAction::SetMode(mode(4096))));
    assert_eq!(session.mode().value(), 4096);
    assert_eq!(session.episode_id(), 1);

    assert!(session.apply_action(GameAction::Restart));
    assert_eq!(session.episode_id(), 2);
    assert_fresh(&session);
}

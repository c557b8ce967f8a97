use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{seeded, spawn_tile, Board, GameSession, GameSnapshot};
use tui_2048::term::{FrameBuffer, GameView, Viewport};
use tui_2048::types::{Direction, GameMode};

fn busy_board() -> Board {
    Board::from_rows([[2, 2, 4, 8], [0, 4, 4, 8], [16, 0, 16, 2], [2, 4, 8, 16]])
        .unwrap_or_default()
}

fn bench_board_apply(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("board_apply_all_directions", |b| {
        b.iter(|| {
            for direction in Direction::ALL {
                black_box(black_box(&board).apply(direction));
            }
        })
    });
}

fn bench_has_any_move(c: &mut Criterion) {
    let stuck = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
        .unwrap_or_default();

    c.bench_function("has_any_move_full_board", |b| {
        b.iter(|| black_box(&stuck).has_any_move())
    });
}

fn bench_spawn_tile(c: &mut Criterion) {
    let mut rng = seeded(12345);

    c.bench_function("spawn_tile", |b| {
        b.iter(|| {
            let mut board = busy_board();
            black_box(spawn_tile(&mut board, &mut rng));
        })
    });
}

fn bench_session_move_undo(c: &mut Criterion) {
    let mut session = GameSession::with_seed(GameMode::default(), 12345);

    c.bench_function("session_move_undo", |b| {
        b.iter(|| {
            for direction in Direction::ALL {
                if session.make_move(direction) {
                    session.undo();
                }
            }
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let session = GameSession::with_seed(GameMode::default(), 12345);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_board_apply,
    bench_has_any_move,
    bench_spawn_tile,
    bench_session_move_undo,
    bench_render_frame
);
criterion_main!(benches);

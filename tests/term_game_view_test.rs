use tui_2048::core::{Board, GameSession, GameSnapshot};
use tui_2048::term::{tile_color, AnchorY, FrameBuffer, GameView, Viewport};
use tui_2048::types::{GameMode, GameStatus};

fn snapshot(rows: [[u32; 4]; 4]) -> GameSnapshot {
    let board = Board::from_rows(rows).unwrap();
    GameSession::with_board(GameMode::default(), board, tui_2048::core::seeded(1)).snapshot()
}

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    span(fb, 0, y, fb.width())
}

fn span(fb: &FrameBuffer, x: u16, y: u16, len: u16) -> String {
    (x..x + len).map(|x| fb.get(x, y).unwrap().ch).collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = snapshot([[0; 4]; 4]);
    let view = GameView::default();

    // 4 tiles of 7x3 plus the border => 30x14.
    let fb = view.render(&snap, Viewport::new(30, 14));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(29, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(29, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_tile_value() {
    let snap = snapshot([[2048, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]);
    let fb = GameView::default().render(&snap, Viewport::new(30, 14));

    // Tile (0,0) covers x 1..8, y 1..4; the value sits on its middle row.
    assert_eq!(span(&fb, 1, 2, 7), " 2048  ");
    let tile = fb.get(1, 1).unwrap();
    assert_eq!(tile.ch, ' ');
    assert_eq!(tile.style.bg, tile_color(2048));

    // Tile (3,3) covers x 22..29, y 10..13.
    assert_eq!(fb.get(25, 11).unwrap().ch, '4');
    assert_eq!(fb.get(25, 11).unwrap().style.bg, tile_color(4));
}

#[test]
fn term_view_marks_empty_cells() {
    let snap = snapshot([[0; 4]; 4]);
    let fb = GameView::default().render(&snap, Viewport::new(30, 14));
    assert_eq!(fb.get(4, 2).unwrap().ch, '·');
    assert_eq!(fb.get(1, 1).unwrap().style.bg, tile_color(0));
}

#[test]
fn term_view_side_panel_shows_score_and_mode() {
    let mut snap = snapshot([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    snap.score = 1234;

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(60, 30));

    // Board is centered horizontally: (60 - 30) / 2 = 15, panel at 15 + 30 + 2.
    let panel_x: u16 = 47;
    assert!(span(&fb, panel_x, 0, 13).starts_with("SCORE"));
    assert!(span(&fb, panel_x, 1, 13).starts_with("1234"));
    assert!(span(&fb, panel_x, 6, 13).starts_with("MODE"));
    assert!(span(&fb, panel_x, 7, 13).starts_with("2048"));
}

#[test]
fn term_view_overlays_terminal_status() {
    let mut snap = snapshot([[0; 4]; 4]);
    let view = GameView::default();
    let vp = Viewport::new(30, 14);

    snap.status = GameStatus::Won;
    assert!(row_text(&view.render(&snap, vp), 7).contains("YOU WON!"));

    snap.status = GameStatus::Lost;
    assert!(row_text(&view.render(&snap, vp), 7).contains("GAME OVER"));

    snap.status = GameStatus::InProgress;
    let fb = view.render(&snap, vp);
    assert!(!row_text(&fb, 7).contains("GAME OVER"));
}

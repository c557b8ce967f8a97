//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{digit_count, CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, GameStatus, BOARD_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const FRAME_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const HELP: [&str; 5] = [
    "arrows/hjkl  slide",
    "u  undo",
    "r  reset",
    "1 2 3  mode",
    "q  quit",
];

/// Background colour of a tile.
pub fn tile_color(value: Cell) -> Rgb {
    match value {
        0 => EMPTY_BG,
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        4096 => Rgb::new(94, 218, 146),
        8192 => Rgb::new(36, 186, 99),
        _ => Rgb::new(60, 58, 50),
    }
}

/// Text colour of a tile: dark on the two pale starting tiles, light above.
pub fn tile_text_color(value: Cell) -> Rgb {
    if value > 4 {
        LIGHT_TEXT
    } else {
        DARK_TEXT
    }
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a six-digit tile with padding and looks roughly square.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_SIZE as u16) * self.cell_w + 2,
            (BOARD_SIZE as u16) * self.cell_h + 2,
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(120, 110, 100), FRAME_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, values) in snap.board.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.status {
            GameStatus::Won => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "YOU WON!")
            }
            GameStatus::Lost => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            GameStatus::InProgress => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: Cell,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        let mid_y = py + self.cell_h / 2;
        let bg = tile_color(value);

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle::new(bg, bg));

        if value == 0 {
            let dot = CellStyle::new(FRAME_BG, bg);
            fb.put_char(px + self.cell_w / 2, mid_y, '·', dot);
            return;
        }

        let text = CellStyle::new(tile_text_color(value), bg).bold();
        let width = digit_count(value);
        if width > self.cell_w {
            // Too narrow for the number; mark the tile instead.
            fb.put_char(px + self.cell_w / 2, mid_y, '+', text);
        } else {
            fb.put_u32(px + (self.cell_w - width) / 2, mid_y, value, text);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();

        let mut y = start_y;
        let stat = |fb: &mut FrameBuffer, y: &mut u16, name: &str, n: u32| {
            fb.put_str(panel_x, *y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            *y = y.saturating_add(3);
        };

        stat(fb, &mut y, "SCORE", snap.score);
        stat(fb, &mut y, "BEST TILE", snap.max_tile);
        stat(fb, &mut y, "MODE", snap.mode.value());
        stat(fb, &mut y, "MOVES", snap.move_count);

        fb.put_str(panel_x, y, "UNDO", label);
        y = y.saturating_add(1);
        if snap.can_undo {
            fb.put_u32(panel_x, y, snap.undo_depth, value);
        } else {
            fb.put_str(panel_x, y, "-", dim);
        }
        y = y.saturating_add(2);

        if panel_w < 18 {
            return;
        }
        for line in HELP {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16 + 2;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_char(x, mid_y, ' ', style);
        fb.put_str(x + 1, mid_y, text, style);
        fb.put_char(x + text_w - 1, mid_y, ' ', style);
    }
}

//! Terminal rendering for the 2048 board.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! [`GameView`] paints a `GameSnapshot` into a [`FrameBuffer`] (pure, testable)
//! and [`TerminalRenderer`] diffs consecutive frames and writes only the
//! changed runs to the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_color, tile_text_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s. Every key press
//! is one command: a slide has no repeat timing, so there is no held-key state.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};

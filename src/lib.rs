//! TUI 2048 (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `tui_2048::{core,input,term,types}` and owns the runtime
//! configuration used by the binary.

pub mod config;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

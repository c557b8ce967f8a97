//! Terminal 2048 runner (default binary).
//!
//! Input comes from crossterm; frames go through the framebuffer renderer.
//! The game is turn based, so the loop blocks on the next event instead of
//! ticking.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::config::AppConfig;
use tui_2048::core::{GameSession, GameSnapshot};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env().context("read TUI_2048_* configuration")?;

    // Logs go to stderr; redirect it (2> tui-2048.log) to keep the screen clean.
    if let Some(level) = config.log_level {
        let mut builder = colog::default_builder();
        builder.filter_level(level);
        builder.try_init().context("install logger")?;
    }

    let session = match config.seed {
        Some(seed) => GameSession::with_seed(config.mode, seed),
        None => GameSession::new(config.mode),
    };
    log::info!("starting in mode {} (seed {:?})", config.mode, config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: GameSession) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read().context("read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    log::info!(
                        "quit with score {} after {} moves",
                        session.score(),
                        session.move_count()
                    );
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

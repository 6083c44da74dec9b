//! Terminal falling-block game (default binary).
//!
//! Reads configuration from the environment, then runs the frame loop: draw,
//! wait for input until the next frame is due, feed elapsed time to gravity.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use blockfall::core::{FieldSession, FieldSnapshot};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;
use blockfall::{logging, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;
    info!(
        width = config.width,
        height = config.height,
        drop_interval_ms = config.drop_interval_ms,
        seed = config.seed,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut session = FieldSession::with_config(
        config.width,
        config.height,
        config.drop_interval_ms,
        config.seed,
    );

    let view = GameView::default();
    let mut snapshot = FieldSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input until the next frame is due. Each event is applied on its own,
        // before gravity runs.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!(
                            pieces = session.pieces_spawned(),
                            top_outs = session.top_outs(),
                            "quit"
                        );
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        session.apply(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            session.advance_time(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}

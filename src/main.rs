//! Terminal runner (default binary).
//!
//! Polls crossterm for key presses until the next frame tick, feeds them to the
//! session, fires due animation frames, and redraws through the diffing
//! framebuffer renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{info, warn};

use blockdrop::config::{Args, Settings};
use blockdrop::engine::Game;
use blockdrop::input::handle_key_event;
use blockdrop::logging;
use blockdrop::term::{Canvas, FrameBuffer, GameView, Scene, TerminalRenderer, Viewport};
use blockdrop::types::KeyAction;

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(&args)?;
    logging::init(&settings)?;

    let seed = settings.seed.unwrap_or_else(clock_seed);
    info!(seed, frame_ms = settings.frame_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, Duration::from_millis(settings.frame_ms));

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!(error = %e, "failed to restore terminal");
    }
    if let Err(e) = &result {
        warn!(error = %e, "game loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, seed: u32, frame: Duration) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut game = Game::new(Canvas::board(), seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let scene = Scene {
            canvas: game.ctx(),
            hud: game.hud(),
            next: Some(game.board().next()),
        };
        view.render_into(&scene, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match handle_key_event(key) {
                    Some(KeyAction::Quit) => {
                        info!(score = game.account().score(), "quit");
                        return Ok(());
                    }
                    Some(action) => {
                        game.handle_key(action, now_ms());
                    }
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Frame.
        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            game.on_frame(now_ms());
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

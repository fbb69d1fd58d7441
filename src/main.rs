//! Terminal falling-blocks runner.
//!
//! Polls crossterm for keys between fixed ticks, feeds commands to the
//! engine and redraws the board from the engine's renderer callbacks.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use falling_blocks::core::{GameConfig, Tetris};
use falling_blocks::input::{handle_key_event, should_quit, SoftDropLatch};
use falling_blocks::term::{FrameBuffer, GameView, Screen, TerminalRenderer, Viewport};
use falling_blocks::types::{
    Command, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_INTERVAL_MS, MIN_INTERVAL_MS, TICK_MS,
};

#[derive(Debug, Parser)]
#[command(about, version)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: usize,

    /// Seed for the piece generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Gravity interval at level 1, in milliseconds
    #[arg(long, default_value_t = MAX_INTERVAL_MS)]
    max_interval_ms: u64,

    /// Lower bound the gravity interval approaches, in milliseconds
    #[arg(long, default_value_t = MIN_INTERVAL_MS)]
    min_interval_ms: u64,
}

impl Args {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::default()
            .with_size(self.width, self.height)
            .with_intervals(
                Duration::from_millis(self.max_interval_ms),
                Duration::from_millis(self.min_interval_ms),
            );
        config.seed = self.seed;
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let game = Tetris::with_renderer(args.config(), Screen::new())
        .context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: Tetris<Screen>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut latch = SoftDropLatch::new();

    // Enter starts a game only from the idle screen or after a game ended.
    let mut start_enabled = true;

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game.renderer(), game.status(), Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key).and_then(|c| latch.filter(c)) {
                        Some(Command::Start) if start_enabled => {
                            start_enabled = false;
                            game.start();
                        }
                        Some(Command::Start) => {}
                        Some(command) => game.apply(command),
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();

            if let Some(command) = latch.update(elapsed.as_millis() as u32) {
                game.apply(command);
            }
            game.advance(elapsed);

            if game.renderer_mut().take_ended() {
                start_enabled = true;
            }
        }
    }
}

//! Terminal runner (default binary).
//!
//! Reads keys with crossterm, drives the engine from wall-clock time and
//! draws through the framebuffer renderer.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::prelude::*;

use blockfall::engine::{GameEngine, GameSnapshot};
use blockfall::input::{accepts_event_kind, handle_key_event, should_quit};
use blockfall::logging::{level_filter, VERBOSE_HELP};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

#[derive(Parser, Debug)]
#[command(name = "blockfall", about = "Falling-block puzzle game in the terminal")]
struct Cli {
    /// Seed for the piece sequence (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Frame interval in milliseconds
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u32,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = VERBOSE_HELP)]
    verbose: u8,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!(seed, tick_ms = cli.tick_ms, "starting blockfall");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, cli.tick_ms.max(1));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(level_filter(cli.verbose))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u32, tick_ms: u32) -> Result<()> {
    let mut engine = GameEngine::new(seed);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout).context("polling terminal events")? {
            match event::read().context("reading terminal event")? {
                Event::Key(key) if accepts_event_kind(key.kind) => {
                    if should_quit(key) {
                        info!(score = engine.score(), "quit");
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        let changed = engine.apply(command);
                        debug!(command = command.as_str(), changed, "command");
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the real elapsed time.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            engine.tick(elapsed_ms);
        }
    }
}

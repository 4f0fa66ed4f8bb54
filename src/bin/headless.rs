//! Scripted runner without a terminal.
//!
//! Reads one command per line (see `blockfall::script`) and prints the game
//! snapshot as a JSON line after every applied step.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::prelude::*;

use blockfall::engine::{GameEngine, GameSnapshot};
use blockfall::logging::{level_filter, VERBOSE_HELP};
use blockfall::script::parse_line;

#[derive(Parser, Debug)]
#[command(name = "blockfall-headless", about = "Run a command script and print JSON snapshots")]
struct Cli {
    /// Seed for the piece sequence
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Script file (defaults to stdin)
    #[arg(long)]
    script: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = VERBOSE_HELP)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(level_filter(cli.verbose))
        .init();

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening script {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut engine = GameEngine::new(cli.seed);
    let mut snap = GameSnapshot::default();

    for (idx, line) in input.lines().enumerate() {
        let lineno = idx + 1;
        let line = line.with_context(|| format!("reading line {lineno}"))?;
        let Some(step) = parse_line(&line).with_context(|| format!("line {lineno}"))? else {
            continue;
        };

        let changed = step.apply(&mut engine);
        debug!(lineno, ?step, changed, "step");

        engine.snapshot_into(&mut snap);
        serde_json::to_writer(&mut out, &snap).context("encoding snapshot")?;
        out.write_all(b"\n").context("writing snapshot")?;
    }

    out.flush().context("flushing output")?;
    Ok(())
}

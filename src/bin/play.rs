use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use kings_bishops::chess::config::load_board;
use kings_bishops::chess::piece::Side;
use kings_bishops::play::{prompt_for_board, run_play, PlayEnd};

/// Play Kings & Bishops against the computer.
#[derive(Parser, Debug)]
#[command(name = "play", version)]
struct Args {
    /// Initial configuration; prompted for when omitted
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Seed for the computer's random moves
    #[arg(short, long)]
    seed: Option<u64>,

    /// Side the human plays (White always moves first)
    #[arg(long, value_enum, default_value = "white")]
    human: HumanSide,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum HumanSide {
    White,
    Black,
}

impl From<HumanSide> for Side {
    fn from(h: HumanSide) -> Side {
        match h {
            HumanSide::White => Side::White,
            HumanSide::Black => Side::Black,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let board = match &args.board {
        Some(path) => Some(
            load_board(path).with_context(|| format!("loading {}", path.display()))?,
        ),
        None => prompt_for_board(&mut input, &mut out)?,
    };
    let Some(mut board) = board else {
        return Ok(());
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let end = run_play(&mut board, args.human.into(), &mut input, &mut out, &mut rng)
        .context("game session failed")?;
    if let PlayEnd::Saved(path) = &end {
        tracing::info!(path = %path.display(), "session ended with a save");
    }
    tracing::debug!(?end, "session over");
    Ok(())
}

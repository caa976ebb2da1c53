//! Strictly Minimax - command-line driver
//!
//! Asks the engine for best moves, plays a human against it, or lets it
//! play itself.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use strictly_minimax::{Board, Mark, search};
use strictly_minimax_cli::{Cli, Command, EnginePlayer, HumanPlayer, MatchRunner, PlayConfig, Player, Side};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Best { board, json } => run_best(&board, json),
        Command::Play {
            config,
            human,
            hints,
        } => run_play(config, human, hints),
        Command::Selfplay => run_selfplay(),
    }
}

/// Print the optimal move for a board given on the command line
#[instrument]
fn run_best(board: &str, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let result = search(&board);
    debug!(?result, "Search finished");

    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        return Ok(());
    }

    writeln!(out, "{}\n", board)?;
    match result.best_move {
        Some(pos) => {
            writeln!(out, "Best move: {} (row {}, col {})", pos, pos.row(), pos.col())?;
            writeln!(out, "Value: {}", result.value)?;
        }
        None => writeln!(
            out,
            "No move: game is over ({})",
            strictly_minimax::outcome(&board)
        )?,
    }
    Ok(())
}

/// Play a human on stdin against the engine
#[instrument]
fn run_play(
    config: Option<std::path::PathBuf>,
    human: Option<Side>,
    hints: bool,
) -> Result<()> {
    let mut config = match config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    };
    if let Some(side) = human {
        config = config.with_human(side.into());
    }
    if hints {
        config = config.with_hints(true);
    }
    info!(?config, "Starting interactive game");

    let human_player: Box<dyn Player> = Box::new(HumanPlayer::new(
        config.human_name().clone(),
        *config.hints(),
        io::stdin().lock(),
        io::stdout(),
    ));
    let engine_player: Box<dyn Player> = Box::new(EnginePlayer::new(config.engine_name().clone()));

    let mut runner = match config.human() {
        Mark::X => MatchRunner::new(human_player, engine_player),
        Mark::O => MatchRunner::new(engine_player, human_player),
    };
    runner.run(&mut io::stdout())?;
    Ok(())
}

/// Let the engine play both sides
#[instrument]
fn run_selfplay() -> Result<()> {
    let mut runner = MatchRunner::new(
        Box::new(EnginePlayer::new("Minimax X")),
        Box::new(EnginePlayer::new("Minimax O")),
    );
    let outcome = runner.run(&mut io::stdout())?;
    info!(%outcome, "Self-play finished");
    Ok(())
}

//! Strictly Ultimate - terminal front end
//!
//! Two players share one terminal and take turns typing moves.

#![warn(missing_docs)]

mod cli;
mod config;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use play::Session;
use strictly_ultimate::GameState;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    }
    .with_overrides(cli.no_constraint);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(config),
        Command::Rules => run_rules(),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(config: PlayConfig) -> Result<()> {
    info!(constraint = *config.constraint(), "Starting session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let score = Session::new(*config.constraint(), stdin.lock(), stdout.lock()).run()?;

    println!("Final score: {}", score);
    Ok(())
}

/// Print the empty board and how to play
fn run_rules() -> Result<()> {
    println!("{}", GameState::default().display());
    println!();
    println!("Win three micro boards in a row to win the game.");
    println!("The cell you play picks the board your opponent must play in next.");
    println!("If that board is already decided or full, they may play anywhere.");
    println!("Moves are typed as `<board> <cell>`, both numbered 1-9.");
    Ok(())
}

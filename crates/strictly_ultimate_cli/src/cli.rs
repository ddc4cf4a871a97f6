//! Command-line interface for strictly_ultimate.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Ultimate - ultimate tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_ultimate")]
#[command(about = "Play ultimate tic-tac-toe against a friend in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable the forced-board rule (overrides the settings file)
    #[arg(long, global = true)]
    pub no_constraint: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive two-player game (default)
    Play,

    /// Print the empty board and the input format, then exit
    Rules,
}

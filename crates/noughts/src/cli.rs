//! Command-line interface.

use clap::{Parser, Subcommand};
use noughts_core::Player;
use std::path::PathBuf;

/// Two-player tic-tac-toe on one keyboard.
#[derive(Debug, Parser)]
#[command(name = "noughts", version, about)]
pub struct Cli {
    /// Path to a TOML config file (default: ./noughts.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Who moves first: circle (o) or cross (x)
    #[arg(long, global = true)]
    pub first: Option<Player>,

    /// What to run (default: play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Modes of operation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Subcommand)]
pub enum Command {
    /// Play in the terminal UI
    #[default]
    Play,

    /// Read JSON actions from stdin, write JSON states to stdout
    Pipe {
        /// Also print the board grid to stderr after every action
        #[arg(long)]
        verbose_board: bool,
    },
}

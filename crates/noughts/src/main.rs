//! Noughts - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, Config, init_file_logging, init_stderr_logging, run_pipe, run_tui};
use std::io;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?.with_first_player(cli.first);

    match cli.command.unwrap_or_default() {
        Command::Play => {
            init_file_logging(config.log_file(), config.log_filter())?;
            info!(first_player = %config.first_player(), "Starting Noughts");
            run_tui(config.initial_state())
        }
        Command::Pipe { verbose_board } => {
            init_stderr_logging(config.log_filter())?;
            let state = run_pipe(
                config.initial_state(),
                io::stdin().lock(),
                io::stdout().lock(),
                verbose_board,
            )
            .context("Pipe mode failed")?;
            info!(status = ?state.status(), "Done");
            Ok(())
        }
    }
}

//! Line-oriented JSON driver: one action in, one state out.

use anyhow::{Context, Result};
use noughts_core::{Action, GameState, reduce, render_board};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Feeds every action line from `input` through the game.
///
/// Each decoded action produces one JSON state line on `output`. Blank
/// lines are skipped; undecodable lines are logged and skipped, leaving the
/// state as it was. Returns the final state.
///
/// # Errors
///
/// Fails only on I/O errors reading `input` or writing `output`.
#[instrument(skip_all, fields(first_player = %initial.current_player()))]
pub fn run_pipe<R, W>(
    initial: GameState,
    input: R,
    mut output: W,
    echo_board: bool,
) -> Result<GameState>
where
    R: BufRead,
    W: Write,
{
    info!("Reading actions");
    let mut state = initial;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("Failed to read action line")?;
        if line.trim().is_empty() {
            continue;
        }

        let action = match Action::from_json(&line) {
            Ok(action) => action,
            Err(error) => {
                warn!(line = index + 1, %error, "Skipping undecodable action");
                continue;
            }
        };

        let next = reduce(state, action);
        if next == state {
            debug!(line = index + 1, ?action, "Action ignored");
        }
        state = next;

        serde_json::to_writer(&mut output, &state).context("Failed to encode state")?;
        writeln!(output).context("Failed to write state")?;

        if echo_board {
            eprintln!("{}\n", render_board(state.board()));
        }
    }

    output.flush().context("Failed to flush output")?;
    info!(status = ?state.status(), "Input exhausted");
    Ok(state)
}

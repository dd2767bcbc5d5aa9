//! Noughts - local two-player tic-tac-toe.
//!
//! The game rules live in [`noughts_core`]; this crate wraps them in the
//! things a runnable program needs.
//!
//! # Architecture
//!
//! - **Cli**: `play` (terminal UI, default) and `pipe` (JSON actions on stdin)
//! - **Config**: `noughts.toml` plus command-line overrides
//! - **Tui**: holds the current state, dispatches input, redraws
//! - **Pipe**: scriptable driver, one JSON state per action

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod pipe;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{Config, ConfigError};

// Crate-level exports - Logging
pub use logging::{init_file as init_file_logging, init_stderr as init_stderr_logging};

// Crate-level exports - Frontends
pub use pipe::run_pipe;
pub use tui::{App, Flow, run_tui};

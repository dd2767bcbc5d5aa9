//! Game configuration loaded from `noughts.toml`.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{GameState, Player};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Player who moves first in every new game.
    first_player: Player,

    /// Tracing filter used when `RUST_LOG` is not set.
    log_filter: String,

    /// Log destination while the terminal UI owns the screen.
    log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_player: GameState::STARTING_PLAYER,
            log_filter: "info".to_string(),
            log_file: PathBuf::from("noughts.log"),
        }
    }
}

impl Config {
    /// File read when no path is given explicitly.
    pub const DEFAULT_PATH: &'static str = "noughts.toml";

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(first_player = %config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the configuration for this run.
    ///
    /// An explicit path must exist. Without one, [`Config::DEFAULT_PATH`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(Self::DEFAULT_PATH);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Overrides the first player when one is given.
    #[must_use]
    pub fn with_first_player(mut self, first_player: Option<Player>) -> Self {
        if let Some(player) = first_player {
            self.first_player = player;
        }
        self
    }

    /// The state every new game starts from.
    pub fn initial_state(&self) -> GameState {
        GameState::new(self.first_player)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

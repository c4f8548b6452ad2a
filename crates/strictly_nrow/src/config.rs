//! Board configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest board the engine accepts.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest board the engine accepts.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Size and win length of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Width and height of the square board.
    #[serde(default = "default_size")]
    size: usize,

    /// Number of consecutive marks needed to win.
    #[serde(default = "default_win_length")]
    win_length: usize,
}

fn default_size() -> usize {
    3
}

fn default_win_length() -> usize {
    3
}

impl BoardConfig {
    /// Creates a configuration, checking the size and win length.
    #[instrument]
    pub fn new(size: usize, win_length: usize) -> Result<Self, ConfigError> {
        let config = Self { size, win_length };
        config.validate()?;
        Ok(config)
    }

    /// Rebuilds a configuration from a board that was already validated.
    pub(crate) fn from_parts(size: usize, win_length: usize) -> Self {
        Self { size, win_length }
    }

    /// Checks that the board size is in range and the win length fits on it.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_BOARD_SIZE {
            return Err(ConfigError::new(ConfigErrorKind::BoardTooSmall(self.size)));
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(ConfigErrorKind::BoardTooLarge(self.size)));
        }
        if self.win_length == 0 {
            return Err(ConfigError::new(ConfigErrorKind::WinLengthZero));
        }
        if self.win_length > self.size {
            return Err(ConfigError::new(ConfigErrorKind::WinLengthTooLong {
                win_length: self.win_length,
                size: self.size,
            }));
        }
        Ok(())
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading board config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read(e.to_string())))?;
        let config = Self::from_toml(&content)?;
        info!(size = config.size, win_length = config.win_length, "Board config loaded");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            win_length: default_win_length(),
        }
    }
}

/// What went wrong with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// Board is smaller than 3x3.
    #[display("Board size less than 3 is not allowed (got {})", _0)]
    BoardTooSmall(usize),

    /// Board is larger than the engine will allocate.
    #[display("Board size {} exceeds the maximum of {}", _0, MAX_BOARD_SIZE)]
    BoardTooLarge(usize),

    /// A win length of zero can never be reached by a move.
    #[display("Win length must be at least 1")]
    WinLengthZero,

    /// Win length does not fit on the board.
    #[display("Win length {} must not exceed board size {}", win_length, size)]
    WinLengthTooLong {
        /// Requested win length.
        win_length: usize,
        /// Board size.
        size: usize,
    },

    /// The config file could not be read.
    #[display("Failed to read config file: {}", _0)]
    Read(String),

    /// The config file is not valid TOML for a board.
    #[display("Failed to parse config: {}", _0)]
    Parse(String),
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What went wrong.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

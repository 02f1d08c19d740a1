use std::path::PathBuf;

use crate::game::Player;

/// The chosen column has no empty cell left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("column {} is full, can not put {} there", .column + 1, .player)]
pub struct ColumnFullError {
    /// Zero-based column index.
    pub column: usize,
    pub player: Player,
}

/// Errors from the column prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Should be a number, try again")]
    NotANumber(String),

    #[error("Should be a number in range from 1 to 7")]
    OutOfRange(i64),
}

/// Errors that can occur when playing a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    ColumnFull(#[from] ColumnFullError),

    #[error("column {} is not on the board", .0 + 1)]
    InvalidColumn(usize),

    #[error("the game is already over")]
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown player '{0}' (expected 'red' or 'yellow')")]
pub struct ParsePlayerError(pub String);

/// Errors that can occur while running the interactive game.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the game finished")]
    InputClosed,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

use std::path::PathBuf;

/// Errors raised by board construction and checked moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board configuration: {0}")]
    InvalidConfiguration(String),

    #[error("illegal move at row {row}, column {col}")]
    IllegalMove { row: u8, col: u8 },
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

/// Errors from the textual interface.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed")]
    EndOfInput,

    #[error("{reason} - gave up after {attempts} attempts")]
    RetriesExhausted { attempts: u32, reason: &'static str },
}

/// Errors that end a game early.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("player {0} has no legal move")]
    NoMove(crate::board::Mark),
}

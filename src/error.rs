use std::path::PathBuf;

use crate::game::{MoveError, Player};

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

/// Errors that can occur while agents play each other.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("agent {agent} played illegal column {}: {source}", .column + 1)]
    IllegalMove {
        agent: String,
        column: usize,
        source: MoveError,
    },

    #[error("{} had no move on a board that is not finished", .player.name())]
    NoMove { player: Player },
}

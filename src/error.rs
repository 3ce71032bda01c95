use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Internal consistency failure of the puzzle grid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("expected exactly one player cell, found {0}")]
    PlayerCount(usize),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("level {level_id} does not exist (level count is {level_count})")]
    UnknownLevel { level_id: usize, level_count: usize },

    #[error("failed to read level {level_id}")]
    Read {
        level_id: usize,
        #[source]
        source: io::Error,
    },

    #[error("unknown cell character {ch:?} at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, ch: char },

    #[error("level has more than {height} rows")]
    TooManyRows { height: usize },

    #[error("row {row} is longer than {width} columns")]
    RowTooLong { row: usize, width: usize },

    #[error("level must contain exactly one player, found {0}")]
    PlayerCount(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config TOML")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Invariant(#[from] InvariantError),
}

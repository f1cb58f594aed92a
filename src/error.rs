//! Error types raised while loading a game or driving the terminal.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the game engine and its startup path.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed maze: {0}")]
    Maze(String),

    #[error("malformed config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

use std::path::PathBuf;

use snes_color::ColorError;

/// Errors raised while randomizing a ROM.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown palette mode {0:?}")]
    UnknownMode(String),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("color source exhausted after {drawn} colors")]
    ColorSourceExhausted { drawn: usize },

    #[error("invalid offset table: {0}")]
    OffsetTable(#[from] serde_json::Error),

    #[error("no input file given")]
    MissingInput,

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type used throughout the token pipeline.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while deriving or persisting theme tokens.
#[derive(Debug, Error)]
pub enum Error {
    /// A base color is not a 6-digit hex color.
    #[error("invalid color format: {value:?} is not a 6-digit hex color")]
    InvalidColorFormat { value: String },
    /// A tone outside `0..=100` was requested.
    #[error("tone {0} is out of range, expected 0..=100")]
    ToneOutOfRange(u8),
    /// Rendering a token map as JSON failed.
    #[error("failed to serialize theme tokens: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Writing a theme file failed; `path` is the file that was targeted.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

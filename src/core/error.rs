//! Error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordFreqError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 (invalid byte sequence at offset {offset})", .path.display())]
    Decoding { path: PathBuf, offset: usize },

    #[error("invalid bound '{value}': expected a base-10 integer")]
    BoundParse { value: String },
}

impl WordFreqError {
    /// Map an I/O error on `path` to the matching variant
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            WordFreqError::NotFound { path }
        } else {
            WordFreqError::Io { path, source }
        }
    }
}

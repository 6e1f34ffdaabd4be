//! Error type for scanning and writing documentation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scan. There is no per-file recovery.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize documentation: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;

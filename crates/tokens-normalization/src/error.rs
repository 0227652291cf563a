//! Error types for token normalization.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading raw token exports.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Failed to read a raw export.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A raw export is not JSON or does not have the token tree shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;

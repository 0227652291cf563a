//! Error types for writing token files.

use std::path::PathBuf;
use thiserror::Error;
use tokens_export::ExportError;

/// Errors that can occur while writing outputs.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create an output directory.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize an output document.
    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A token file failed validation; nothing further was written.
    #[error(transparent)]
    InvalidTokenFile(#[from] ExportError),
}

pub type Result<T> = std::result::Result<T, OutputError>;

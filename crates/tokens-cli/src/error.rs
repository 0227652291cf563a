//! Run-level errors raised by the sync command.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// A required setting was given neither as a flag nor in the environment.
    #[error("missing {setting}: pass --{flag} or set {env}")]
    MissingConfiguration {
        setting: &'static str,
        flag: &'static str,
        env: &'static str,
    },

    /// A file key that would not stay inside the output directory.
    #[error("invalid file key {key:?}: keys cannot contain path separators or be `.`/`..`")]
    InvalidFileKey { key: String },

    /// The API answered successfully but the file has no variables.
    #[error("file {file_key} returned no variables")]
    EmptyDataset { file_key: String },

    /// Every variable in the file is remote; there is nothing to write.
    #[error("file {file_key} has no local variables to export")]
    NoTokenFiles { file_key: String },
}

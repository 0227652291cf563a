//! Resolved run configuration.
//!
//! Flags and environment variables are parsed by clap; this module turns
//! the raw values into a [`SyncConfig`] once, so nothing downstream reads
//! the environment.

use std::fmt;
use std::path::PathBuf;

use crate::error::SyncError;

/// Environment variable holding the personal access token.
pub const TOKEN_ENV: &str = "PERSONAL_ACCESS_TOKEN";

/// Environment variable holding the file key(s).
pub const FILE_KEY_ENV: &str = "FILE_KEY";

/// Default output directory for token files.
pub const DEFAULT_OUTPUT_DIR: &str = "tokens_new";

/// Everything `sync` needs to run.
#[derive(Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub token: String,
    /// Source files, in the order given.
    pub file_keys: Vec<String>,
    pub output_dir: PathBuf,
    pub base_url: String,
    pub dry_run: bool,
}

impl fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncConfig")
            .field("token", &"<redacted>")
            .field("file_keys", &self.file_keys)
            .field("output_dir", &self.output_dir)
            .field("base_url", &self.base_url)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl SyncConfig {
    /// Build a config from raw flag values.
    ///
    /// Each file key value may itself hold several comma-separated keys.
    /// Blank keys are dropped. Keys become directory names, so a key with a
    /// path separator, or one that is `.` or `..`, is rejected.
    pub fn resolve(
        token: Option<String>,
        file_keys: &[String],
        output_dir: PathBuf,
        base_url: String,
        dry_run: bool,
    ) -> Result<Self, SyncError> {
        let token = token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(SyncError::MissingConfiguration {
                setting: "access token",
                flag: "token",
                env: TOKEN_ENV,
            })?;
        let file_keys = split_file_keys(file_keys)?;
        if file_keys.is_empty() {
            return Err(SyncError::MissingConfiguration {
                setting: "file key",
                flag: "file-key",
                env: FILE_KEY_ENV,
            });
        }
        Ok(Self {
            token,
            file_keys,
            output_dir,
            base_url,
            dry_run,
        })
    }

    /// Directory for the files of one source.
    ///
    /// A single source writes straight into the output directory; with
    /// several, each gets its own subdirectory named after its key.
    pub fn output_dir_for(&self, file_key: &str) -> PathBuf {
        if self.file_keys.len() > 1 {
            self.output_dir.join(file_key)
        } else {
            self.output_dir.clone()
        }
    }
}

fn split_file_keys(values: &[String]) -> Result<Vec<String>, SyncError> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(|key| {
            if is_plain_name(key) {
                Ok(key.to_string())
            } else {
                Err(SyncError::InvalidFileKey {
                    key: key.to_string(),
                })
            }
        })
        .collect()
}

fn is_plain_name(key: &str) -> bool {
    key != "."
        && key != ".."
        && !key
            .chars()
            .any(|c| c == '/' || c == '\\' || std::path::is_separator(c))
}

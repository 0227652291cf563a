//! JSON file writers.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use tokens_export::{TokenFileSet, validate_token_file};
use tokens_normalization::CanonicalRoot;

use crate::error::{OutputError, Result};

/// Options for [`write_token_files`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Validate only; touch nothing on disk.
    pub dry_run: bool,
}

/// One token file handled by [`write_token_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// File name, e.g. `Theme.Light.json`.
    pub name: String,
    /// Full output path.
    pub path: PathBuf,
    /// Number of tokens in the file.
    pub tokens: usize,
    /// False for dry runs.
    pub written: bool,
}

/// Ensure a directory exists. Returns true when it had to be created.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    info!(path = %dir.display(), "created output directory");
    Ok(true)
}

/// Pretty-print `value` as JSON (two-space indent, trailing newline).
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value).map_err(|source| OutputError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    text.push('\n');
    fs::write(path, text).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Validate and write every token file into `dir`, in name order.
///
/// The first invalid or unwritable file aborts the batch. Files written
/// before it stay on disk.
pub fn write_token_files(
    dir: &Path,
    files: &TokenFileSet,
    options: WriteOptions,
) -> Result<Vec<WrittenFile>> {
    if !options.dry_run {
        ensure_dir(dir)?;
    }

    let mut written = Vec::with_capacity(files.len());
    for (name, tree) in files {
        validate_token_file(name, tree)?;
        let path = dir.join(name);
        if !options.dry_run {
            write_json_pretty(&path, tree)?;
        }
        let tokens = tree.leaf_count();
        info!(
            file = %name,
            path = %path.display(),
            tokens,
            dry_run = options.dry_run,
            "wrote token file"
        );
        written.push(WrittenFile {
            name: name.clone(),
            path,
            tokens,
            written: !options.dry_run,
        });
    }
    Ok(written)
}

/// Write the canonical document, creating its parent directory if needed.
pub fn write_canonical(path: &Path, root: &CanonicalRoot) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_dir(parent)?;
    }
    write_json_pretty(path, root)?;
    info!(path = %path.display(), tokens = root.color.leaf_count(), "wrote canonical tokens");
    Ok(())
}

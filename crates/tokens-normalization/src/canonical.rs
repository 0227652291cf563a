//! Canonical token file assembly from raw "options" and "alias" exports.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tokens_model::CanonicalTree;

use crate::error::{NormalizeError, Result};
use crate::normalize::normalize_group;

/// Default raw options export, relative to the project root.
pub const OPTIONS_FILE: &str = "data/raw-figma-options.json";

/// Default raw alias export, relative to the project root.
pub const ALIAS_FILE: &str = "data/raw-figma-alias.json";

/// Default canonical output, relative to the project root.
pub const CANONICAL_FILE: &str = "tokens/canonical.json";

/// The canonical token document: every token lives under `color`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRoot {
    pub color: CanonicalTree,
}

/// Input and output locations of a normalization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizePaths {
    pub options: PathBuf,
    pub alias: PathBuf,
    pub output: PathBuf,
}

impl NormalizePaths {
    /// Default layout below a project root.
    pub fn from_root(root: &Path) -> Self {
        Self {
            options: root.join(OPTIONS_FILE),
            alias: root.join(ALIAS_FILE),
            output: root.join(CANONICAL_FILE),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| NormalizeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| NormalizeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Normalize a raw options export (a top-level object of groups).
///
/// Values are kept verbatim; the groups end up under `color`.
pub fn normalize_options(path: &Path) -> Result<CanonicalRoot> {
    let raw: CanonicalTree = read_json(path)?;
    let color = normalize_group(&raw, false);
    debug!(path = %path.display(), tokens = color.leaf_count(), "normalized options export");
    Ok(CanonicalRoot { color })
}

/// Normalize a raw alias export (`{ "color": ... }`).
///
/// Alias references are qualified into the `color` namespace.
pub fn normalize_alias(path: &Path) -> Result<CanonicalRoot> {
    let raw: CanonicalRoot = read_json(path)?;
    let color = normalize_group(&raw.color, true);
    debug!(path = %path.display(), tokens = color.leaf_count(), "normalized alias export");
    Ok(CanonicalRoot { color })
}

/// Shallow-merge two canonical documents; `alias` wins on top-level keys.
pub fn merge_canonical(options: CanonicalRoot, alias: CanonicalRoot) -> CanonicalRoot {
    let mut color = options.color;
    color.merge_shallow(alias.color);
    CanonicalRoot { color }
}

/// Run the options pass, then the alias pass, and merge the results.
pub fn build_canonical(paths: &NormalizePaths) -> Result<CanonicalRoot> {
    let options = normalize_options(&paths.options)?;
    let alias = normalize_alias(&paths.alias)?;
    let merged = merge_canonical(options, alias);
    info!(
        groups = merged.color.len(),
        tokens = merged.color.leaf_count(),
        "built canonical tokens"
    );
    Ok(merged)
}

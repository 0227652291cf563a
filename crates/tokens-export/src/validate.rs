//! Structural checks run before a token file is written.

use tokens_model::TokenTree;

use crate::error::{ExportError, Result};

/// Check that a token file has structure worth writing.
///
/// A file must have at least one top-level entry and at least one token
/// somewhere below it. Values are not inspected.
pub fn validate_token_file(file: &str, tree: &TokenTree) -> Result<()> {
    if tree.is_empty() {
        return Err(invalid(file, "cannot be empty"));
    }
    if tree.leaf_count() == 0 {
        return Err(invalid(file, "no valid tokens found"));
    }
    Ok(())
}

fn invalid(file: &str, reason: &str) -> ExportError {
    ExportError::InvalidTokenFile {
        file: file.to_string(),
        reason: reason.to_string(),
    }
}

//! Error types for token export.

use thiserror::Error;
use tokens_model::TreeError;

/// Errors that can occur while mapping variables to token files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The variable points at a collection missing from the dataset.
    #[error("variable '{variable}' belongs to unknown collection '{collection_id}'")]
    UnknownCollection {
        variable: String,
        collection_id: String,
    },

    /// An alias points at a variable missing from the dataset.
    #[error("variable '{variable}' aliases unknown variable '{alias_id}'")]
    UnresolvedAlias { variable: String, alias_id: String },

    /// The variable has no value for one of its collection's modes.
    #[error("variable '{variable}' has no value for mode '{mode_id}'")]
    MissingModeValue { variable: String, mode_id: String },

    /// The value is neither an alias, a color nor a scalar.
    #[error("format of variable value is invalid for '{variable}' in mode '{mode_id}': {value}")]
    InvalidValueFormat {
        variable: String,
        mode_id: String,
        value: String,
    },

    /// The variable's resolved type has no token type.
    #[error("variable '{variable}' has unsupported type '{resolved_type}'")]
    UnmappedType {
        variable: String,
        resolved_type: String,
    },

    /// Two variables claim the same path as both a token and a group.
    #[error("cannot place variable '{variable}' in {file}: {source}")]
    PathConflict {
        file: String,
        variable: String,
        #[source]
        source: TreeError,
    },

    /// A generated token file has no usable structure.
    #[error("invalid tokens file {file}: {reason}")]
    InvalidTokenFile { file: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ExportError>;

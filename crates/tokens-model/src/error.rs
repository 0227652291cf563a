use thiserror::Error;

/// Errors raised while building a token tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("token path is empty")]
    EmptyPath,
    /// A leaf and a group would occupy the same path.
    #[error("token path conflict at '{path}': a token and a group cannot share a name")]
    PathConflict { path: String },
}

pub type Result<T> = std::result::Result<T, TreeError>;

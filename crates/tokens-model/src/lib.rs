//! Data model for turning design variables into design token files.
//!
//! - [`variable`]: variables, collections and modes as served upstream
//! - [`color`]: normalized RGB(A) colors and their hex encoding
//! - [`token`]: exported and canonical token leaves
//! - [`tree`]: nested token groups with an explicit `insert`

pub mod color;
pub mod error;
pub mod token;
pub mod tree;
pub mod variable;

pub use color::Rgba;
pub use error::{Result, TreeError};
pub use token::{
    CanonicalToken, FIGMA_EXTENSION_KEY, FigmaExtensions, Token, TokenType, TokenValue,
};
pub use tree::{TokenGroup, TokenNode, VALUE_KEY};
pub use variable::{
    AliasKind, CodeSyntax, Mode, ResolvedType, Variable, VariableAlias, VariableCollection,
    VariableDataset, VariableValue,
};

/// An exported token file: a tree of [`Token`] leaves.
pub type TokenTree = TokenGroup<Token>;

/// A canonical token file subtree: a tree of [`CanonicalToken`] leaves.
pub type CanonicalTree = TokenGroup<CanonicalToken>;

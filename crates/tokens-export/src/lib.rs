//! Design variable to design token export.
//!
//! [`build_token_files`] turns a [`VariableDataset`](tokens_model::VariableDataset)
//! into one token tree per collection and mode; [`validate_token_file`]
//! checks a tree before it is handed to a writer.

pub mod error;
pub mod mapper;
pub mod validate;

pub use error::{ExportError, Result};
pub use mapper::{TokenFileSet, build_token_files, token_file_name, token_type, token_value};
pub use validate::validate_token_file;

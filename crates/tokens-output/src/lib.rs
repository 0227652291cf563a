//! Output writers for token files and the canonical token document.

pub mod error;
pub mod writer;

pub use error::{OutputError, Result};
pub use writer::{
    WriteOptions, WrittenFile, ensure_dir, write_canonical, write_json_pretty, write_token_files,
};

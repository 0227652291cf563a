//! Normalization of raw token exports.
//!
//! Raw exports are read into token trees, rebuilt by [`normalize_group`]
//! and merged into a single [`CanonicalRoot`] (`{ "color": ... }`) that
//! downstream build tooling consumes.

pub mod canonical;
pub mod error;
pub mod normalize;

pub use canonical::{
    ALIAS_FILE, CANONICAL_FILE, CanonicalRoot, NormalizePaths, OPTIONS_FILE, build_canonical,
    merge_canonical, normalize_alias, normalize_options,
};
pub use error::{NormalizeError, Result};
pub use normalize::normalize_group;

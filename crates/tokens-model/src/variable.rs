//! Variables, collections and modes as served by the variable store.
//!
//! Field names follow the upstream JSON (`camelCase`). Maps are keyed by
//! the upstream identifiers and kept in a `BTreeMap` so iteration order is
//! stable from run to run.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::Rgba;

/// Primitive type a variable resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedType {
    #[serde(rename = "BOOLEAN")]
    Boolean,
    #[serde(rename = "COLOR")]
    Color,
    #[serde(rename = "FLOAT")]
    Float,
    #[serde(rename = "STRING")]
    String,
    /// A type this tool does not know how to export.
    #[serde(untagged)]
    Unknown(String),
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("BOOLEAN"),
            Self::Color => f.write_str("COLOR"),
            Self::Float => f.write_str("FLOAT"),
            Self::String => f.write_str("STRING"),
            Self::Unknown(name) => f.write_str(name),
        }
    }
}

/// Marker for the `"type": "VARIABLE_ALIAS"` field of an alias value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AliasKind {
    #[serde(rename = "VARIABLE_ALIAS")]
    VariableAlias,
}

/// Reference from one variable's value to another variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableAlias {
    #[serde(rename = "type")]
    pub kind: AliasKind,
    /// Identifier of the referenced variable.
    pub id: String,
}

impl VariableAlias {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            kind: AliasKind::VariableAlias,
            id: id.into(),
        }
    }
}

/// Raw value of a variable for one mode.
///
/// Any JSON shape that is not an alias, a color or a scalar lands in
/// [`VariableValue::Other`] so it can be reported instead of rejected at
/// decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Alias(VariableAlias),
    Color(Rgba),
    Boolean(bool),
    Number(serde_json::Number),
    String(String),
    Other(Value),
}

/// Per-platform code syntax hints (`WEB`, `ANDROID`, `iOS`).
pub type CodeSyntax = BTreeMap<String, String>;

/// A named, typed design value that varies by mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    /// Slash-delimited display name, e.g. `color/brand/primary`.
    pub name: String,
    #[serde(default)]
    pub key: String,
    pub variable_collection_id: String,
    pub resolved_type: ResolvedType,
    /// Raw value keyed by mode identifier.
    #[serde(default)]
    pub values_by_mode: BTreeMap<String, VariableValue>,
    /// Owned by another file; never exported locally.
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hidden_from_publishing: bool,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub code_syntax: CodeSyntax,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_but_referenced: Option<bool>,
}

impl Variable {
    /// Group path segments of the variable name.
    pub fn path(&self) -> Vec<&str> {
        self.name.split('/').collect()
    }

    /// Name in alias-reference form: slashes become dots.
    #[must_use]
    pub fn dotted_name(&self) -> String {
        self.name.replace('/', ".")
    }
}

/// A variant dimension inside a collection (e.g. `Light`, `Dark`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub mode_id: String,
    pub name: String,
}

impl Mode {
    pub fn new(mode_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mode_id: mode_id.into(),
            name: name.into(),
        }
    }
}

/// A named group of variables sharing an ordered set of modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub modes: Vec<Mode>,
    #[serde(default)]
    pub default_mode_id: String,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub hidden_from_publishing: bool,
    #[serde(default)]
    pub variable_ids: Vec<String>,
}

/// Variables and collections of one source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDataset {
    #[serde(default)]
    pub variables: BTreeMap<String, Variable>,
    #[serde(default)]
    pub variable_collections: BTreeMap<String, VariableCollection>,
}

impl VariableDataset {
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Number of variables that are owned by this file.
    pub fn local_variable_count(&self) -> usize {
        self.variables.values().filter(|v| !v.remote).count()
    }
}

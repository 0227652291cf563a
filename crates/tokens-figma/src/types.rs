//! Request and response bodies of the variables endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tokens_model::{CodeSyntax, ResolvedType, VariableDataset, VariableValue};

/// Response of `GET /v1/files/{file_key}/variables/local`.
///
/// Every field defaults, so an empty body decodes to an empty dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalVariablesResponse {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub meta: VariableDataset,
}

/// Kind of change applied by `POST /v1/files/{file_key}/variables`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeAction {
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollectionChange {
    pub action: ChangeAction,
    /// Real id, or a temporary id for `CREATE`.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_mode_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_from_publishing: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableModeChange {
    pub action: ChangeAction,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub variable_collection_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableChange {
    pub action: ChangeAction,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_collection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_type: Option<ResolvedType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_from_publishing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_syntax: Option<CodeSyntax>,
}

/// Value of one variable in one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableModeValue {
    pub variable_id: String,
    pub mode_id: String,
    pub value: VariableValue,
}

/// Body of `POST /v1/files/{file_key}/variables`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostVariablesRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variable_collections: Vec<VariableCollectionChange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variable_modes: Vec<VariableModeChange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<VariableChange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variable_mode_values: Vec<VariableModeValue>,
}

impl PostVariablesRequest {
    pub fn is_empty(&self) -> bool {
        self.variable_collections.is_empty()
            && self.variable_modes.is_empty()
            && self.variables.is_empty()
            && self.variable_mode_values.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostVariablesMeta {
    /// Maps the temporary ids of created objects to their real ids.
    #[serde(default)]
    pub temp_id_to_real_id: BTreeMap<String, String>,
}

/// Response of `POST /v1/files/{file_key}/variables`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostVariablesResponse {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub meta: PostVariablesMeta,
}

//! Variable-to-token mapping.
//!
//! Every local variable contributes one token to each mode of its
//! collection. Tokens land in the file `{collection}.{mode}.json`, at the
//! path formed by splitting the variable name on `/`.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use tokens_model::{
    FigmaExtensions, Mode, ResolvedType, Token, TokenTree, TokenType, TokenValue, Variable,
    VariableCollection, VariableDataset, VariableValue,
};

use crate::error::{ExportError, Result};

/// Token files keyed by file name.
pub type TokenFileSet = BTreeMap<String, TokenTree>;

/// File name for one collection and mode.
pub fn token_file_name(collection: &VariableCollection, mode: &Mode) -> String {
    format!("{}.{}.json", collection.name, mode.name)
}

/// Token `$type` for a resolved variable type.
pub fn token_type(variable: &Variable) -> Result<TokenType> {
    match &variable.resolved_type {
        ResolvedType::Boolean => Ok(TokenType::Boolean),
        ResolvedType::Color => Ok(TokenType::Color),
        ResolvedType::Float => Ok(TokenType::Number),
        ResolvedType::String => Ok(TokenType::String),
        ResolvedType::Unknown(name) => Err(ExportError::UnmappedType {
            variable: variable.name.clone(),
            resolved_type: name.clone(),
        }),
    }
}

/// Token `$value` of `variable` in mode `mode_id`.
///
/// Aliases resolve exactly one hop: the result names the referenced
/// variable (`{group.name}`) even when that variable is itself an alias.
pub fn token_value(
    variable: &Variable,
    mode_id: &str,
    variables: &BTreeMap<String, Variable>,
) -> Result<TokenValue> {
    let value = variable
        .values_by_mode
        .get(mode_id)
        .ok_or_else(|| ExportError::MissingModeValue {
            variable: variable.name.clone(),
            mode_id: mode_id.to_string(),
        })?;

    match value {
        VariableValue::Alias(alias) => {
            let target = variables
                .get(&alias.id)
                .ok_or_else(|| ExportError::UnresolvedAlias {
                    variable: variable.name.clone(),
                    alias_id: alias.id.clone(),
                })?;
            Ok(TokenValue::alias(&target.dotted_name()))
        }
        VariableValue::Color(color) => Ok(TokenValue::String(color.to_hex())),
        VariableValue::Boolean(value) => Ok(TokenValue::Boolean(*value)),
        VariableValue::Number(value) => Ok(TokenValue::Number(value.clone())),
        VariableValue::String(value) => Ok(TokenValue::String(value.clone())),
        VariableValue::Other(raw) => Err(ExportError::InvalidValueFormat {
            variable: variable.name.clone(),
            mode_id: mode_id.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn build_token(variable: &Variable, token_type: TokenType, value: TokenValue) -> Token {
    Token::new(token_type, value)
        .with_description(variable.description.clone())
        .with_figma_extensions(FigmaExtensions {
            hidden_from_publishing: variable.hidden_from_publishing,
            scopes: variable.scopes.clone(),
            code_syntax: variable.code_syntax.clone(),
        })
}

/// Build one token tree per (collection, mode) pair.
///
/// Remote variables are skipped: they belong to another file. Trees are
/// shared by all variables of a collection, so groups with a common
/// prefix merge. Two variables with the same full name overwrite each
/// other (last one in identifier order wins).
pub fn build_token_files(dataset: &VariableDataset) -> Result<TokenFileSet> {
    let mut files = TokenFileSet::new();

    for variable in dataset.variables.values() {
        if variable.remote {
            trace!(variable = %variable.name, "skipping remote variable");
            continue;
        }

        let collection = dataset
            .variable_collections
            .get(&variable.variable_collection_id)
            .ok_or_else(|| ExportError::UnknownCollection {
                variable: variable.name.clone(),
                collection_id: variable.variable_collection_id.clone(),
            })?;
        let token_type = token_type(variable)?;
        let path = variable.path();

        for mode in &collection.modes {
            let file_name = token_file_name(collection, mode);
            let value = token_value(variable, &mode.mode_id, &dataset.variables)?;
            let token = build_token(variable, token_type, value);

            let tree = files.entry(file_name).or_default();
            let replaced = tree
                .insert(&path, token)
                .map_err(|source| ExportError::PathConflict {
                    file: token_file_name(collection, mode),
                    variable: variable.name.clone(),
                    source,
                })?;
            if replaced.is_some() {
                debug!(
                    variable = %variable.name,
                    mode = %mode.name,
                    "token path already set, keeping the later variable"
                );
            }
        }
    }

    debug!(files = files.len(), "built token files");
    Ok(files)
}

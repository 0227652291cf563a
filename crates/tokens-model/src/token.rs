//! Design token leaves.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::variable::CodeSyntax;

/// Extension namespace carrying source-system metadata.
pub const FIGMA_EXTENSION_KEY: &str = "com.figma";

/// Token `$type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Boolean,
    Color,
    Number,
    String,
}

impl TokenType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Color => "color",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved token `$value`: a scalar, a hex color or an alias reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Boolean(bool),
    Number(serde_json::Number),
    String(String),
}

impl TokenValue {
    /// Alias reference form `{group.path}`.
    pub fn alias(dotted_path: &str) -> Self {
        Self::String(format!("{{{dotted_path}}}"))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// Source metadata stored under `$extensions["com.figma"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaExtensions {
    pub hidden_from_publishing: bool,
    pub scopes: Vec<String>,
    pub code_syntax: CodeSyntax,
}

/// A leaf of an exported token file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "$type")]
    pub token_type: TokenType,
    #[serde(rename = "$value")]
    pub value: TokenValue,
    #[serde(rename = "$description", default)]
    pub description: String,
    #[serde(rename = "$extensions", default)]
    pub extensions: BTreeMap<String, FigmaExtensions>,
}

impl Token {
    pub fn new(token_type: TokenType, value: TokenValue) -> Self {
        Self {
            token_type,
            value,
            description: String::new(),
            extensions: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_figma_extensions(mut self, extensions: FigmaExtensions) -> Self {
        self.extensions
            .insert(FIGMA_EXTENSION_KEY.to_string(), extensions);
        self
    }

    pub fn figma_extensions(&self) -> Option<&FigmaExtensions> {
        self.extensions.get(FIGMA_EXTENSION_KEY)
    }
}

/// A leaf of the canonical token file: only `$value` and `$type` survive.
///
/// Both fields are kept as raw JSON because raw exports are not validated
/// beyond their shape. `token_type` is `None` only when `$type` is absent;
/// an explicit `"$type": null` is `Some(Value::Null)` and is written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalToken {
    #[serde(rename = "$value")]
    pub value: Value,
    #[serde(
        rename = "$type",
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub token_type: Option<Value>,
}

fn present_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl CanonicalToken {
    pub fn color(value: impl Into<String>) -> Self {
        Self {
            value: Value::String(value.into()),
            token_type: Some(Value::from(TokenType::Color.as_str())),
        }
    }

    /// `$type` when it is a string.
    pub fn type_name(&self) -> Option<&str> {
        self.token_type.as_ref().and_then(Value::as_str)
    }

    /// Qualify every `{` in a string `$value` into the `color` namespace.
    ///
    /// Non-string values are returned unchanged.
    #[must_use]
    pub fn with_color_namespace(&self) -> Self {
        let value = match &self.value {
            Value::String(text) => Value::String(text.replace('{', "{color.")),
            other => other.clone(),
        };
        Self {
            value,
            token_type: self.token_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_serializes_in_leaf_key_order() {
        let token = Token::new(TokenType::Color, "#ff0000".into())
            .with_description("Primary")
            .with_figma_extensions(FigmaExtensions {
                hidden_from_publishing: false,
                scopes: vec!["ALL_SCOPES".to_string()],
                code_syntax: CodeSyntax::new(),
            });
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(
            json,
            r##"{"$type":"color","$value":"#ff0000","$description":"Primary","$extensions":{"com.figma":{"hiddenFromPublishing":false,"scopes":["ALL_SCOPES"],"codeSyntax":{}}}}"##
        );
    }

    #[test]
    fn alias_value_wraps_path_in_braces() {
        assert_eq!(TokenValue::alias("color.primary").as_str(), Some("{color.primary}"));
    }

    #[test]
    fn color_namespace_rewrites_every_brace() {
        let token = CanonicalToken::color("{primary} {secondary}");
        assert_eq!(
            token.with_color_namespace().value,
            Value::String("{color.primary} {color.secondary}".to_string())
        );
    }

    #[test]
    fn color_namespace_leaves_plain_and_non_string_values() {
        let plain = CanonicalToken::color("red");
        assert_eq!(plain.with_color_namespace(), plain);

        let numeric = CanonicalToken {
            value: Value::from(4),
            token_type: None,
        };
        assert_eq!(numeric.with_color_namespace(), numeric);
    }

    #[test]
    fn canonical_type_keeps_any_json_shape() {
        let numeric: CanonicalToken =
            serde_json::from_str(r#"{"$value":"red","$type":5}"#).unwrap();
        assert_eq!(numeric.token_type, Some(Value::from(5)));
        assert_eq!(numeric.type_name(), None);

        let null: CanonicalToken =
            serde_json::from_str(r#"{"$value":"red","$type":null}"#).unwrap();
        assert_eq!(null.token_type, Some(Value::Null));
        assert_eq!(
            serde_json::to_string(&null).unwrap(),
            r#"{"$value":"red","$type":null}"#
        );

        let missing: CanonicalToken = serde_json::from_str(r#"{"$value":"red"}"#).unwrap();
        assert_eq!(missing.token_type, None);
        assert_eq!(serde_json::to_string(&missing).unwrap(), r#"{"$value":"red"}"#);
    }

    #[test]
    fn color_constructor_sets_color_type() {
        assert_eq!(CanonicalToken::color("#fff").type_name(), Some("color"));
    }
}

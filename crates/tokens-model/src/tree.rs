//! Nested token trees.
//!
//! A tree node is either a leaf token or a group of named children. The
//! distinction is carried by [`TokenNode`] rather than by inspecting keys at
//! runtime; only (de)serialization looks at the `$value` key, because that
//! is how the JSON form tells the two apart.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TreeError};

/// Key whose presence marks a JSON object as a leaf.
pub const VALUE_KEY: &str = "$value";

/// A node of a token tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenNode<T> {
    Leaf(T),
    Group(TokenGroup<T>),
}

impl<T> TokenNode<T> {
    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&TokenGroup<T>> {
        match self {
            Self::Group(group) => Some(group),
            Self::Leaf(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
}

/// A group of named children; the root of every token file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TokenGroup<T> {
    children: BTreeMap<String, TokenNode<T>>,
}

impl<T> Default for TokenGroup<T> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }
}

impl<T> TokenGroup<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn get(&self, name: &str) -> Option<&TokenNode<T>> {
        self.children.get(name)
    }

    /// Follow `path` from this group.
    pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&TokenNode<T>> {
        let (first, rest) = path.split_first()?;
        let node = self.children.get(first.as_ref())?;
        if rest.is_empty() {
            return Some(node);
        }
        node.as_group()?.get_path(rest)
    }

    /// Leaf at `path`, if the path ends on a leaf.
    pub fn leaf<S: AsRef<str>>(&self, path: &[S]) -> Option<&T> {
        self.get_path(path)?.as_leaf()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TokenNode<T>)> {
        self.children.iter()
    }

    /// Set a direct child, replacing whatever was there.
    pub fn set(&mut self, name: impl Into<String>, node: TokenNode<T>) -> Option<TokenNode<T>> {
        self.children.insert(name.into(), node)
    }

    /// Insert `leaf` at `path`, creating missing groups along the way.
    ///
    /// An existing leaf at the same full path is replaced and returned (last
    /// write wins). A path that ends on an existing group, or that passes
    /// through an existing leaf, is rejected with [`TreeError::PathConflict`]
    /// and leaves the tree untouched.
    pub fn insert<S: AsRef<str>>(&mut self, path: &[S], leaf: T) -> Result<Option<T>> {
        if path.is_empty() {
            return Err(TreeError::EmptyPath);
        }
        self.insert_at(path, 0, leaf)
    }

    fn insert_at<S: AsRef<str>>(&mut self, path: &[S], depth: usize, leaf: T) -> Result<Option<T>> {
        let segment = path[depth].as_ref();
        let is_last = depth + 1 == path.len();
        match self.children.entry(segment.to_string()) {
            Entry::Vacant(entry) => {
                if is_last {
                    entry.insert(TokenNode::Leaf(leaf));
                    return Ok(None);
                }
                let mut group = TokenGroup::new();
                group.insert_at(path, depth + 1, leaf)?;
                entry.insert(TokenNode::Group(group));
                Ok(None)
            }
            Entry::Occupied(mut entry) => match (entry.get_mut(), is_last) {
                (TokenNode::Leaf(existing), true) => Ok(Some(std::mem::replace(existing, leaf))),
                (TokenNode::Group(group), false) => group.insert_at(path, depth + 1, leaf),
                _ => Err(TreeError::PathConflict {
                    path: join_path(&path[..=depth]),
                }),
            },
        }
    }

    /// Shallow merge: each top-level child of `other` replaces the child of
    /// the same name in `self`.
    pub fn merge_shallow(&mut self, other: TokenGroup<T>) {
        self.children.extend(other.children);
    }

    /// Total number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.children
            .values()
            .map(|node| match node {
                TokenNode::Leaf(_) => 1,
                TokenNode::Group(group) => group.leaf_count(),
            })
            .sum()
    }

    /// All leaves with their dotted paths, in tree order.
    pub fn leaves(&self) -> Vec<(String, &T)> {
        let mut out = Vec::new();
        self.collect_leaves("", &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a T)>) {
        for (name, node) in &self.children {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            match node {
                TokenNode::Leaf(leaf) => out.push((path, leaf)),
                TokenNode::Group(group) => group.collect_leaves(&path, out),
            }
        }
    }
}

impl<T> FromIterator<(String, TokenNode<T>)> for TokenGroup<T> {
    fn from_iter<I: IntoIterator<Item = (String, TokenNode<T>)>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

fn join_path<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("/")
}

impl<T: DeserializeOwned> TokenNode<T> {
    /// Classify a JSON value: objects with `$value` are leaves, other
    /// objects are groups, anything else is an error.
    pub fn from_json(value: Value) -> std::result::Result<Self, serde_json::Error> {
        match value {
            Value::Object(map) if map.contains_key(VALUE_KEY) => {
                serde_json::from_value(Value::Object(map)).map(TokenNode::Leaf)
            }
            Value::Object(map) => TokenGroup::from_json_map(map).map(TokenNode::Group),
            other => Err(de::Error::custom(format!(
                "expected a token or a group, found {}",
                json_kind(&other)
            ))),
        }
    }
}

impl<T: DeserializeOwned> TokenGroup<T> {
    fn from_json_map(
        map: serde_json::Map<String, Value>,
    ) -> std::result::Result<Self, serde_json::Error> {
        let mut children = BTreeMap::new();
        for (name, value) in map {
            let node = TokenNode::from_json(value)
                .map_err(|err| <serde_json::Error as de::Error>::custom(format!("{name}: {err}")))?;
            children.insert(name, node);
        }
        Ok(Self { children })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for TokenNode<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        TokenNode::from_json(value).map_err(de::Error::custom)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for TokenGroup<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => TokenGroup::from_json_map(map).map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected a token group, found {}",
                json_kind(&other)
            ))),
        }
    }
}

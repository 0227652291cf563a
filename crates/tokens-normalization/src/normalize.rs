//! Recursive group normalization.

use tokens_model::{CanonicalToken, CanonicalTree, TokenNode};

/// Rebuild `group` into a fresh tree, normalizing every leaf.
///
/// Leaves keep only `$value` and `$type`. With `rewrite_alias_braces`, each
/// `{` in a string `$value` becomes `{color.`, qualifying alias references
/// that the raw export wrote without the `color` namespace. The input is
/// left untouched.
pub fn normalize_group(group: &CanonicalTree, rewrite_alias_braces: bool) -> CanonicalTree {
    group
        .iter()
        .map(|(name, node)| {
            let node = match node {
                TokenNode::Leaf(token) => {
                    TokenNode::Leaf(normalize_token(token, rewrite_alias_braces))
                }
                TokenNode::Group(child) => {
                    TokenNode::Group(normalize_group(child, rewrite_alias_braces))
                }
            };
            (name.clone(), node)
        })
        .collect()
}

fn normalize_token(token: &CanonicalToken, rewrite_alias_braces: bool) -> CanonicalToken {
    if rewrite_alias_braces {
        token.with_color_namespace()
    } else {
        token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> CanonicalTree {
        serde_json::from_value(value).unwrap()
    }

    fn value_at(tree: &CanonicalTree, path: &[&str]) -> serde_json::Value {
        tree.leaf(path).unwrap().value.clone()
    }

    #[test]
    fn rewrites_alias_braces_into_color_namespace() {
        let input = tree(json!({"action": {"$value": "{primary}", "$type": "color"}}));
        let output = normalize_group(&input, true);
        assert_eq!(value_at(&output, &["action"]), json!("{color.primary}"));
        assert_eq!(
            output.leaf(&["action"]).unwrap().type_name(),
            Some("color")
        );
    }

    #[test]
    fn values_without_braces_are_unchanged() {
        let input = tree(json!({"a": {"$value": "red", "$type": "color"}}));
        assert_eq!(normalize_group(&input, true), input);
    }

    #[test]
    fn every_brace_is_rewritten_once() {
        let input = tree(json!({"mix": {"$value": "{a} over {b}", "$type": "color"}}));
        let output = normalize_group(&input, true);
        assert_eq!(value_at(&output, &["mix"]), json!("{color.a} over {color.b}"));
    }

    #[test]
    fn without_rewriting_values_pass_through() {
        let input = tree(json!({
            "blue": {
                "100": {"$value": "#e0ecff", "$type": "color"},
                "alias": {"$value": "{blue.100}", "$type": "color"}
            }
        }));
        let output = normalize_group(&input, false);
        assert_eq!(output, input);
    }

    #[test]
    fn is_idempotent_without_rewriting() {
        let input = tree(json!({
            "grey": {
                "50": {"$value": "#fafafa", "$type": "color", "$description": "dropped"},
                "deep": {"nested": {"$value": "{grey.50}"}}
            }
        }));
        let once = normalize_group(&input, false);
        let twice = normalize_group(&once, false);
        assert_eq!(once, twice);
    }

    #[test]
    fn extra_leaf_keys_are_dropped() {
        let input = tree(json!({"x": {"$value": "#000000", "$type": "color", "$extensions": {"a": 1}}}));
        let output = serde_json::to_value(normalize_group(&input, false)).unwrap();
        assert_eq!(output, json!({"x": {"$value": "#000000", "$type": "color"}}));
    }

    #[test]
    fn non_string_values_are_not_rewritten() {
        let input = tree(json!({"radius": {"$value": 4, "$type": "number"}}));
        let output = normalize_group(&input, true);
        assert_eq!(value_at(&output, &["radius"]), json!(4));
    }
}

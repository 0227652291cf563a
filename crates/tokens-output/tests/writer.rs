//! Tests for writing token files to disk.

use std::fs;

use tempfile::TempDir;
use tokens_export::{ExportError, TokenFileSet};
use tokens_model::{
    CanonicalToken, CanonicalTree, Token, TokenGroup, TokenNode, TokenTree, TokenType, TokenValue,
};
use tokens_normalization::CanonicalRoot;
use tokens_output::{OutputError, WriteOptions, write_canonical, write_token_files};

fn tree(path: &[&str], value: &str) -> TokenTree {
    let mut tree = TokenTree::new();
    tree.insert(path, Token::new(TokenType::Color, TokenValue::from(value)))
        .unwrap();
    tree
}

fn leafless_tree() -> TokenTree {
    let mut tree = TokenTree::new();
    tree.set("empty", TokenNode::Group(TokenGroup::new()));
    tree
}

#[test]
fn writes_each_file_as_pretty_json() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("tokens_new");
    let files = TokenFileSet::from([
        ("Theme.Dark.json".to_string(), tree(&["color", "bg"], "#000000")),
        ("Theme.Light.json".to_string(), tree(&["color", "bg"], "#ffffff")),
    ]);

    let written = write_token_files(&out, &files, WriteOptions::default()).unwrap();

    let names: Vec<_> = written.iter().map(|file| file.name.as_str()).collect();
    assert_eq!(names, ["Theme.Dark.json", "Theme.Light.json"]);
    assert!(written.iter().all(|file| file.written && file.tokens == 1));

    let text = fs::read_to_string(out.join("Theme.Light.json")).unwrap();
    assert!(text.ends_with("}\n"));
    assert!(text.contains("\n  \"color\": {"));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["color"]["bg"]["$value"], "#ffffff");
    assert_eq!(value["color"]["bg"]["$type"], "color");
}

#[test]
fn existing_output_directory_is_reused() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("keep.txt"), "x").unwrap();
    let files = TokenFileSet::from([("A.M.json".to_string(), tree(&["a"], "#010203"))]);

    write_token_files(dir.path(), &files, WriteOptions::default()).unwrap();

    assert!(dir.path().join("keep.txt").exists());
    assert!(dir.path().join("A.M.json").exists());
}

#[test]
fn invalid_file_stops_the_batch() {
    let dir = TempDir::new().unwrap();
    let files = TokenFileSet::from([
        ("A.json".to_string(), tree(&["a"], "#111111")),
        ("B.json".to_string(), leafless_tree()),
        ("C.json".to_string(), tree(&["c"], "#333333")),
    ]);

    let err = write_token_files(dir.path(), &files, WriteOptions::default()).unwrap_err();

    match err {
        OutputError::InvalidTokenFile(ExportError::InvalidTokenFile { file, reason }) => {
            assert_eq!(file, "B.json");
            assert_eq!(reason, "no valid tokens found");
        }
        other => panic!("expected InvalidTokenFile, got {other:?}"),
    }
    assert!(dir.path().join("A.json").exists());
    assert!(!dir.path().join("B.json").exists());
    assert!(!dir.path().join("C.json").exists());
}

#[test]
fn empty_tree_is_rejected() {
    let dir = TempDir::new().unwrap();
    let files = TokenFileSet::from([("A.json".to_string(), TokenTree::new())]);

    let err = write_token_files(dir.path(), &files, WriteOptions::default()).unwrap_err();

    assert_eq!(err.to_string(), "invalid tokens file A.json: cannot be empty");
}

#[test]
fn dry_run_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("tokens_new");
    let files = TokenFileSet::from([("A.M.json".to_string(), tree(&["a", "b"], "#abcdef"))]);

    let written = write_token_files(&out, &files, WriteOptions { dry_run: true }).unwrap();

    assert_eq!(written.len(), 1);
    assert!(!written[0].written);
    assert_eq!(written[0].path, out.join("A.M.json"));
    assert!(!out.exists());
}

#[test]
fn dry_run_still_validates() {
    let dir = TempDir::new().unwrap();
    let files = TokenFileSet::from([("A.json".to_string(), leafless_tree())]);

    let result = write_token_files(dir.path(), &files, WriteOptions { dry_run: true });

    assert!(matches!(result, Err(OutputError::InvalidTokenFile(_))));
}

#[test]
fn output_path_blocked_by_a_file_fails() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("tokens_new");
    fs::write(&blocker, "not a directory").unwrap();
    let files = TokenFileSet::from([("A.M.json".to_string(), tree(&["a"], "#000000"))]);

    let err = write_token_files(&blocker, &files, WriteOptions::default()).unwrap_err();

    assert!(matches!(err, OutputError::CreateDir { .. }));
}

#[test]
fn canonical_document_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tokens").join("canonical.json");
    let mut color = CanonicalTree::new();
    color
        .insert(&["blue", "500"], CanonicalToken::color("#0066ff"))
        .unwrap();

    write_canonical(&path, &CanonicalRoot { color }).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        concat!(
            "{\n",
            "  \"color\": {\n",
            "    \"blue\": {\n",
            "      \"500\": {\n",
            "        \"$value\": \"#0066ff\",\n",
            "        \"$type\": \"color\"\n",
            "      }\n",
            "    }\n",
            "  }\n",
            "}\n",
        )
    );
}

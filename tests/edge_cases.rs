//! Edge case and error handling tests for deep-object


use assert_cmd::Command;
use harness::{TestDocument, lines, run_deep_object, sample_json};
use predicates::prelude::*;
use serde_json::json;

// ============================================================================
// Input Errors
// ============================================================================

#[test]
fn test_missing_file() {
    let doc = TestDocument::new();
    let (_stdout, stderr, success) = run_deep_object(doc.path(), &["values", "nope.json"]);
    assert!(!success);
    assert!(stderr.contains("cannot read 'nope.json'"), "stderr: {}", stderr);
}

#[test]
fn test_malformed_json() {
    let doc = TestDocument::new();
    doc.add_raw("bad.json", "{\"a\": ");
    let (_stdout, stderr, success) = run_deep_object(doc.path(), &["keys", "bad.json"]);
    assert!(!success);
    assert!(stderr.contains("invalid JSON in 'bad.json'"), "stderr: {}", stderr);
}

#[test]
fn test_non_object_root_is_rejected() {
    let doc = TestDocument::new();
    doc.add_json("list.json", &json!([{"a": 1}]));
    let (_stdout, stderr, success) = run_deep_object(doc.path(), &["values", "list.json"]);
    assert!(!success);
    assert!(stderr.contains("root node is not a container"), "stderr: {}", stderr);
}

#[test]
fn test_set_on_non_object_root_is_rejected() {
    let doc = TestDocument::new();
    doc.add_json("scalar.json", &json!(7));
    let (_stdout, stderr, success) = run_deep_object(doc.path(), &["set", "a", "1", "scalar.json"]);
    assert!(!success);
    assert!(stderr.contains("root node is not a container"));
}

#[test]
fn test_has_on_non_object_root_is_false() {
    let doc = TestDocument::new();
    doc.add_json("scalar.json", &json!("text"));
    let (stdout, stderr, success) = run_deep_object(doc.path(), &["has", "a", "scalar.json"]);
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout.trim(), "false");
}

// ============================================================================
// Argument Errors
// ============================================================================

#[test]
fn test_invalid_key_path_array() {
    let doc = TestDocument::new();
    doc.add_json("doc.json", &sample_json());
    let (_stdout, stderr, success) = run_deep_object(doc.path(), &["get", "[1, 2]", "doc.json"]);
    assert!(!success);
    assert!(stderr.contains("is not a string or an array of strings"), "stderr: {}", stderr);
}

#[test]
fn test_empty_key_path_array() {
    let doc = TestDocument::new();
    doc.add_json("doc.json", &sample_json());
    let (_stdout, stderr, success) = run_deep_object(doc.path(), &["has", "[]", "doc.json"]);
    assert!(!success);
    assert!(stderr.contains("key path has no segments"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_glob_pattern() {
    Command::cargo_bin("deep-object")
        .unwrap()
        .args(["find", "--key", "[", "--color", "never"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --key pattern"));
}

#[test]
fn test_invalid_regex_pattern() {
    Command::cargo_bin("deep-object")
        .unwrap()
        .args(["filter", "--match", "(", "--color", "never"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --match pattern"));
}

#[test]
fn test_unknown_subcommand() {
    Command::cargo_bin("deep-object")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ============================================================================
// Odd Keys and Values
// ============================================================================

#[test]
fn test_keys_with_dots_need_array_paths() {
    let doc = TestDocument::new();
    doc.add_json("doc.json", &json!({"a.b": {"c": 1}, "a": {"b": {"c": 2}}}));

    let (stdout, _, success) = run_deep_object(doc.path(), &["get", "a.b.c", "doc.json"]);
    assert!(success);
    assert_eq!(stdout.trim(), "2");

    let (stdout, _, success) = run_deep_object(doc.path(), &["get", r#"["a.b","c"]"#, "doc.json"]);
    assert!(success);
    assert_eq!(stdout.trim(), "1");
}

#[test]
fn test_empty_string_keys() {
    let doc = TestDocument::new();
    doc.add_json("doc.json", &json!({"": {"": "deep"}}));

    let (stdout, _, success) = run_deep_object(doc.path(), &["get", ".", "doc.json"]);
    assert!(success);
    assert_eq!(stdout.trim(), "\"deep\"");
}

#[test]
fn test_arrays_are_not_descended() {
    let doc = TestDocument::new();
    doc.add_json("doc.json", &json!({"list": [{"inner": 1}], "obj": {"inner": 2}}));

    let (stdout, _, success) = run_deep_object(doc.path(), &["values", "doc.json"]);
    assert!(success);
    assert_eq!(lines(&stdout), vec!["[{\"inner\":1}]", "2"]);
}

#[test]
fn test_empty_object() {
    let doc = TestDocument::new();
    doc.add_json("doc.json", &json!({}));

    let (stdout, _, success) = run_deep_object(doc.path(), &["count", "doc.json", "-i"]);
    assert!(success);
    assert_eq!(stdout.trim(), "0");

    let (stdout, _, success) = run_deep_object(doc.path(), &["every", "doc.json"]);
    assert!(success);
    assert_eq!(stdout.trim(), "true");
}

#[test]
fn test_unicode_keys_and_values() {
    let doc = TestDocument::new();
    doc.add_json("doc.json", &json!({"café": {"名前": "値"}}));

    let (stdout, _, success) = run_deep_object(doc.path(), &["paths", "doc.json"]);
    assert!(success);
    assert_eq!(stdout.trim(), "café.名前");
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let doc = TestDocument::new();
    doc.add_json("doc.json", &json!({"a": 1}));

    let (stdout, stderr, success) =
        run_deep_object(doc.path(), &["keys", "doc.json", "--log-level", "debug"]);
    assert!(success);
    assert_eq!(stdout.trim(), "a");
    assert!(stderr.contains("loaded document"), "stderr: {}", stderr);
}

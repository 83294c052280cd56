//! Test utilities: fixture trees and temporary JSON documents.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::tree::Node;

/// Nested tree with leaves at four depths, shared by the ordering tests.
pub fn sample_json() -> Value {
    json!({
        "foo": "bar1",
        "baz": {
            "foo": "foo2",
            "bar": {
                "foo": "bar3",
                "baz": {
                    "bar": "foo4"
                }
            }
        },
        "bar": "baz1"
    })
}

pub fn sample_tree() -> Node {
    Node::from(sample_json())
}

/// A person record with mixed leaf types and deep nesting.
pub fn person_json() -> Value {
    json!({
        "firstName": "John",
        "lastName": "Doe",
        "age": 43,
        "job": {
            "title": "Senior Engineer",
            "experienceYears": 17,
            "compensation": {
                "salary": {
                    "amount": 5000,
                    "currency": "USD"
                }
            }
        },
        "address": {
            "street": "Oak Drive 23A",
            "country": {
                "code": "US",
                "name": "United States",
                "continent": {
                    "name": "North America",
                    "hemisphere": "western"
                }
            }
        }
    })
}

/// The person record, with `job.retirementPlan` holding no value.
pub fn person_tree() -> Node {
    let mut tree = Node::from(person_json());
    if let Some(job) = tree
        .as_container_mut()
        .and_then(|root| root.get_mut("job"))
        .and_then(Node::as_container_mut)
    {
        job.insert("retirementPlan".to_string(), Node::Absent);
    }
    tree
}

/// A balanced tree `depth` levels deep with `width` entries per level.
/// The last entry of every level is a leaf, the others are containers.
pub fn wide_tree(depth: usize, width: usize) -> Node {
    fn build(depth: usize, width: usize) -> Value {
        let mut map = serde_json::Map::new();
        for i in 0..width {
            let key = format!("k{}", i);
            if depth == 0 || i + 1 == width {
                map.insert(key, json!(i));
            } else {
                map.insert(key, build(depth - 1, width));
            }
        }
        Value::Object(map)
    }
    Node::from(build(depth, width))
}

/// A temporary directory holding JSON documents.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDocument {
    dir: TempDir,
}

impl TestDocument {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `value` as JSON to `name`, creating parent directories as needed.
    pub fn add_json(&self, name: &str, value: &Value) -> PathBuf {
        let content = serde_json::to_string_pretty(value).expect("Failed to serialize JSON");
        self.add_raw(name, &content)
    }

    /// Write raw text to `name`, for malformed-input tests.
    pub fn add_raw(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

impl Default for TestDocument {
    fn default() -> Self {
        Self::new()
    }
}

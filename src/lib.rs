//! deep-object - traverse, query and edit nested key-value trees
//!
//! Every query (`for_each`, `map`, `filter`, `find`, `some`, `every`,
//! `values`, `keys`, `paths`, `entries`) is a visitor driven by the one
//! traversal engine in [`tree`]. Key-path access (`extract`, `get`, `has`,
//! `set`) goes through the path walker.
//!
//! ```
//! use deep_object::{Node, TraversalConfig, values};
//! use serde_json::json;
//!
//! let tree = Node::from(json!({"a": 1, "b": {"c": 2}}));
//! let leaves = values(&tree, TraversalConfig::default()).unwrap();
//! assert_eq!(leaves.len(), 2);
//! ```

pub mod error;
pub mod logging;
pub mod ops;
pub mod output;
pub mod predicate;
pub mod property;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use ops::{Entry, entries, every, filter, find, for_each, keys, map, paths, some, values};
pub use output::{OutputConfig, TextFormatter, print_json, write_json};
pub use predicate::EntryPredicate;
pub use property::{KeyPath, Lookup, extract, get, has, set};
pub use tree::{Container, Node, OnMissing, Order, Path, TraversalConfig, Visit, traverse};

//! Key-path access: extract, get, has and set
//!
//! A key path is either a list of keys or a single string split on every
//! `.`; there is no escaping, so keys that contain dots need the list form.
//! All segments but the last are resolved with the path walker, the last
//! one names the property to read or write.

use std::fmt;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::tree::{Node, OnMissing, walk, walk_mut};

/// A parsed key path. Always compare paths through `segments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Split a dotted string. Every `.` separates two segments, so `"a..b"`
    /// has an empty middle segment and `""` is a single empty key.
    pub fn parse(dotted: &str) -> Self {
        KeyPath(dotted.split('.').map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The parent segments and the final property key.
    fn split_property(&self) -> Result<(&[String], &str)> {
        let (key, parents) = self.0.split_last().ok_or(Error::EmptyPath)?;
        Ok((parents, key.as_str()))
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<&str> for KeyPath {
    fn from(dotted: &str) -> Self {
        KeyPath::parse(dotted)
    }
}

impl From<&String> for KeyPath {
    fn from(dotted: &String) -> Self {
        KeyPath::parse(dotted)
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(segments: Vec<String>) -> Self {
        KeyPath(segments)
    }
}

impl From<&[String]> for KeyPath {
    fn from(segments: &[String]) -> Self {
        KeyPath(segments.to_vec())
    }
}

impl From<&[&str]> for KeyPath {
    fn from(segments: &[&str]) -> Self {
        KeyPath(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for KeyPath {
    fn from(segments: [&str; N]) -> Self {
        KeyPath(segments.iter().map(|s| s.to_string()).collect())
    }
}

/// Accepts a JSON string (dotted) or an array of strings.
impl TryFrom<&Value> for KeyPath {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(dotted) => Ok(KeyPath::parse(dotted)),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(KeyPath)
                .ok_or_else(|| Error::invalid_path_type(value.to_string())),
            other => Err(Error::invalid_path_type(other.to_string())),
        }
    }
}

/// Outcome of reading a key path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a, V = Value> {
    /// Some step did not lead to a container, or the final key is missing.
    NotFound,
    /// The final key is present but holds [`Node::Absent`].
    Absent,
    Found(&'a Node<V>),
}

impl<'a, V> Lookup<'a, V> {
    /// Whether the final key is present, even if it holds no value.
    pub fn exists(&self) -> bool {
        !matches!(self, Lookup::NotFound)
    }

    pub fn value(&self) -> Option<&'a Node<V>> {
        match self {
            Lookup::Found(node) => Some(*node),
            _ => None,
        }
    }
}

/// Read the property at `path`, telling missing keys apart from absent values.
///
/// Missing data is never an error. Only an empty path is.
pub fn extract<V>(target: &Node<V>, path: impl Into<KeyPath>) -> Result<Lookup<'_, V>> {
    let path = path.into();
    let (parents, key) = path.split_property()?;
    let Some(position) = target.as_container().and_then(|root| walk(root, parents)) else {
        return Ok(Lookup::NotFound);
    };
    Ok(match position.get(key) {
        None => Lookup::NotFound,
        Some(Node::Absent) => Lookup::Absent,
        Some(node) => Lookup::Found(node),
    })
}

/// Value at `path`, or `None` if it is missing or absent.
pub fn get<V>(target: &Node<V>, path: impl Into<KeyPath>) -> Result<Option<&Node<V>>> {
    Ok(extract(target, path)?.value())
}

/// Whether the final key of `path` is present.
pub fn has<V>(target: &Node<V>, path: impl Into<KeyPath>) -> Result<bool> {
    Ok(extract(target, path)?.exists())
}

/// Write `value` at `path`, creating or overwriting intermediate containers.
///
/// Returns the same `target` that was passed in.
pub fn set<V>(target: &mut Node<V>, path: impl Into<KeyPath>, value: Node<V>) -> Result<&mut Node<V>> {
    let path = path.into();
    let (parents, key) = path.split_property()?;
    let root = target.as_container_mut().ok_or(Error::NonContainerRoot)?;
    if let Some(position) = walk_mut(root, parents, OnMissing::Create) {
        position.insert(key.to_string(), value);
    }
    Ok(target)
}

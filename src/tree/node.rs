//! Node model for nested key-value trees

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Location of a node relative to a root. The empty path is the root itself.
pub type Path = Vec<String>;

/// A traversable mapping. Keys iterate in insertion order.
pub type Container<V = Value> = IndexMap<String, Node<V>>;

/// A node in a nested key-value tree.
///
/// Only `Container` is ever descended into. Everything else, including JSON
/// arrays and `null`, is a leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<V = Value> {
    Container(Container<V>),
    Leaf(V),
    /// A key that is present but holds no value.
    Absent,
}

impl<V> Node<V> {
    /// An empty container.
    pub fn container() -> Self {
        Node::Container(Container::new())
    }

    pub fn leaf(value: V) -> Self {
        Node::Leaf(value)
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Node::Container(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Node::Absent)
    }

    pub fn as_container(&self) -> Option<&Container<V>> {
        match self {
            Node::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container<V>> {
        match self {
            Node::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&V> {
        match self {
            Node::Leaf(v) => Some(v),
            _ => None,
        }
    }
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Node::container()
    }
}

impl<V> From<Container<V>> for Node<V> {
    fn from(container: Container<V>) -> Self {
        Node::Container(container)
    }
}

/// Classification rule at the JSON boundary: objects become containers,
/// every other value (arrays included) becomes a leaf.
impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Node::Container(
                map.into_iter()
                    .map(|(key, child)| (key, Node::from(child)))
                    .collect(),
            ),
            other => Node::Leaf(other),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Container(c) => Value::Object(
                c.into_iter()
                    .map(|(key, child)| (key, Value::from(child)))
                    .collect(),
            ),
            Node::Leaf(v) => v,
            Node::Absent => Value::Null,
        }
    }
}

impl Node {
    /// Convert a borrowed tree back into JSON. `Absent` becomes `null`.
    pub fn to_json(&self) -> Value {
        Value::from(self.clone())
    }
}

impl<V: Serialize> Serialize for Node<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Container(c) => c.serialize(serializer),
            Node::Leaf(v) => v.serialize(serializer),
            Node::Absent => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Node::from)
    }
}

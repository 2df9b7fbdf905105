//! The locale tree data model.
//!
//! A locale document is a nested mapping from translation keys to either
//! further mappings or leaf values. Only the key structure is ever examined
//! by the checker; leaf payloads (strings, numbers, booleans, null, arrays)
//! are carried through but never compared. Arrays are leaves even when they
//! contain objects.

use std::collections::BTreeMap;

use serde_json::Value;

/// A node in a locale document tree.
///
/// Children of an object node are kept in a `BTreeMap`, which pins key
/// iteration (and therefore report ordering) to lexicographic order.
#[derive(Clone, Debug, PartialEq)]
pub enum LocaleNode {
    /// A nested mapping of translation keys to child nodes.
    Object(BTreeMap<String, LocaleNode>),
    /// An opaque leaf value. The payload is never inspected.
    Leaf(Value),
}

impl LocaleNode {
    /// An object node with no children.
    pub fn empty_object() -> Self {
        Self::Object(BTreeMap::new())
    }

    /// Returns `true` if this node is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// The children of an object node, or `None` for a leaf.
    pub fn children(&self) -> Option<&BTreeMap<String, LocaleNode>> {
        match self {
            Self::Object(map) => Some(map),
            Self::Leaf(_) => None,
        }
    }

    /// Look up an immediate child by key. Leaves have no children.
    pub fn get(&self, key: &str) -> Option<&LocaleNode> {
        self.children().and_then(|map| map.get(key))
    }
}

impl From<Value> for LocaleNode {
    /// Convert a parsed JSON value. Objects become [`LocaleNode::Object`];
    /// everything else, arrays included, becomes an opaque leaf.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, child)| (key, Self::from(child)))
                    .collect(),
            ),
            other => Self::Leaf(other),
        }
    }
}

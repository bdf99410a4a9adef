//! The locale tree data model.

use crate::error::{TreeError, json_kind};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A level of nested messages, in insertion order.
pub type Namespace = IndexMap<String, LocaleTree>;

/// A node in a locale's message tree.
///
/// Lists keep explicit holes: a `None` slot was never populated and is
/// treated as missing, which is different from an empty string.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LocaleTree {
    /// A single message.
    Leaf(String),
    /// An ordered list of messages, addressed with `key[index]`.
    List(Vec<Option<String>>),
    /// A nested namespace, addressed with `parent.child`.
    Namespace(Namespace),
}

impl LocaleTree {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LocaleTree::Leaf(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_namespace(&self) -> Option<&Namespace> {
        match self {
            LocaleTree::Namespace(namespace) => Some(namespace),
            _ => None,
        }
    }

    pub fn is_namespace(&self) -> bool {
        matches!(self, LocaleTree::Namespace(_))
    }
}

impl From<&str> for LocaleTree {
    fn from(text: &str) -> Self {
        LocaleTree::Leaf(text.to_string())
    }
}

impl From<String> for LocaleTree {
    fn from(text: String) -> Self {
        LocaleTree::Leaf(text)
    }
}

impl From<Namespace> for LocaleTree {
    fn from(namespace: Namespace) -> Self {
        LocaleTree::Namespace(namespace)
    }
}

impl From<Vec<&str>> for LocaleTree {
    fn from(items: Vec<&str>) -> Self {
        LocaleTree::List(items.into_iter().map(|item| Some(item.to_string())).collect())
    }
}

impl From<Vec<Option<String>>> for LocaleTree {
    fn from(items: Vec<Option<String>>) -> Self {
        LocaleTree::List(items)
    }
}

impl TryFrom<Value> for LocaleTree {
    type Error = TreeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        tree_from_value(value, "")
    }
}

impl<'de> Deserialize<'de> for LocaleTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        LocaleTree::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// Returns `true` only for JSON objects, the shape accepted as a namespace.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Converts a JSON object into a [`Namespace`], rejecting any other root.
pub fn namespace_from_value(value: Value) -> Result<Namespace, TreeError> {
    match value {
        Value::Object(map) => namespace_from_map(map, ""),
        other => Err(TreeError::FragmentNotObject {
            found: json_kind(&other),
        }),
    }
}

pub(crate) fn namespace_from_map(map: Map<String, Value>, path: &str) -> Result<Namespace, TreeError> {
    map.into_iter()
        .map(|(key, value)| {
            let child_path = join_path(path, &key);
            tree_from_value(value, &child_path).map(|tree| (key, tree))
        })
        .collect()
}

fn tree_from_value(value: Value, path: &str) -> Result<LocaleTree, TreeError> {
    match value {
        Value::String(text) => Ok(LocaleTree::Leaf(text)),
        Value::Object(map) => namespace_from_map(map, path).map(LocaleTree::Namespace),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(text) => Ok(Some(text)),
                Value::Null => Ok(None),
                other => Err(TreeError::UnsupportedListItem {
                    path: path.to_string(),
                    index,
                    found: json_kind(&other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(LocaleTree::List),
        other => Err(TreeError::UnsupportedValue {
            path: path.to_string(),
            found: json_kind(&other),
        }),
    }
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

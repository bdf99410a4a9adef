//! Merging partial locale definitions into one tree per locale.

use crate::error::{TreeError, json_kind};
use crate::locale::LocaleCode;
use crate::path;
use crate::tree::{LocaleTree, Namespace, namespace_from_map};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A partial registry: some messages for one or more locales.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LocaleFragment(IndexMap<LocaleCode, Namespace>);

impl LocaleFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the messages contributed for `code`.
    pub fn with_locale(mut self, code: impl Into<LocaleCode>, messages: Namespace) -> Self {
        self.insert(code, messages);
        self
    }

    pub fn insert(&mut self, code: impl Into<LocaleCode>, messages: Namespace) {
        self.0.insert(code.into(), messages);
    }

    pub fn get(&self, code: &str) -> Option<&Namespace> {
        self.0.get(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LocaleCode, &Namespace)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds a fragment from a JSON object of the form `{ code: { ...messages } }`.
    ///
    /// Fails fast on any shape that is not a valid tree.
    pub fn from_json(value: Value) -> Result<Self, TreeError> {
        let locales = match value {
            Value::Object(locales) => locales,
            other => {
                return Err(TreeError::FragmentNotObject {
                    found: json_kind(&other),
                });
            },
        };

        locales
            .into_iter()
            .map(|(code, messages)| match messages {
                Value::Object(map) => {
                    namespace_from_map(map, "").map(|namespace| (LocaleCode::from(code), namespace))
                },
                other => Err(TreeError::LocaleNotObject {
                    locale: code,
                    found: json_kind(&other),
                }),
            })
            .collect::<Result<IndexMap<_, _>, _>>()
            .map(Self)
    }
}

impl IntoIterator for LocaleFragment {
    type Item = (LocaleCode, Namespace);
    type IntoIter = indexmap::map::IntoIter<LocaleCode, Namespace>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(LocaleCode, Namespace)> for LocaleFragment {
    fn from_iter<T: IntoIterator<Item = (LocaleCode, Namespace)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<Value> for LocaleFragment {
    type Error = TreeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

impl<'de> Deserialize<'de> for LocaleFragment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(value).map_err(serde::de::Error::custom)
    }
}

/// The merged messages of every known locale.
///
/// Locales keep the order in which they were first contributed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LocaleRegistry {
    locales: IndexMap<LocaleCode, Namespace, FxBuildHasher>,
}

impl LocaleRegistry {
    /// Deep-merges `fragments` in order; later fragments win on conflicting leaves.
    pub fn merge<I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = LocaleFragment>,
    {
        let mut registry = Self::default();
        let mut count = 0usize;
        for fragment in fragments {
            registry.extend_fragment(fragment);
            count += 1;
        }

        tracing::debug!(
            fragments = count,
            locales = registry.len(),
            "Merged locale fragments"
        );
        registry
    }

    /// Deep-merges one more fragment on top of the current contents.
    pub fn extend_fragment(&mut self, fragment: LocaleFragment) {
        for (code, messages) in fragment {
            match self.locales.get_mut(&code) {
                Some(existing) => deep_merge(existing, messages),
                None => {
                    self.locales.insert(code, messages);
                },
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&Namespace> {
        self.locales.get(code)
    }

    pub fn contains_locale(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    pub fn locales(&self) -> impl Iterator<Item = &LocaleCode> {
        self.locales.keys()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Resolves `key` in the tree of `code`; `None` when either is unknown.
    pub fn resolve(&self, code: &str, key: &str) -> Option<&str> {
        path::resolve(self.get(code)?, key)
    }
}

/// Free-function form of [`LocaleRegistry::merge`].
pub fn merge<I>(fragments: I) -> LocaleRegistry
where
    I: IntoIterator<Item = LocaleFragment>,
{
    LocaleRegistry::merge(fragments)
}

/// Recursively merges `incoming` into `target`.
///
/// Two namespaces under the same key are merged; in every other case the
/// incoming value replaces the existing one.
pub fn deep_merge(target: &mut Namespace, incoming: Namespace) {
    for (key, value) in incoming {
        let nested = match value {
            LocaleTree::Namespace(nested) => nested,
            other => {
                target.insert(key, other);
                continue;
            },
        };

        if let Some(LocaleTree::Namespace(existing)) = target.get_mut(&key) {
            deep_merge(existing, nested);
            continue;
        }

        target.insert(key, LocaleTree::Namespace(nested));
    }
}

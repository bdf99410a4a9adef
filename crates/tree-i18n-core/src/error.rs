use thiserror::Error;

/// Errors raised while building locale trees from untyped input.
///
/// These only surface at construction time. Lookups never fail with an error,
/// they fall back to the key or the raw message instead.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The root of a fragment or locale file was not an object.
    #[error("Locale fragment must be an object, found {found}")]
    FragmentNotObject {
        /// JSON kind that was found instead.
        found: &'static str,
    },
    /// A locale code inside a fragment mapped to something other than an object.
    #[error("Locale '{locale}' must map to an object, found {found}")]
    LocaleNotObject {
        /// The offending locale code.
        locale: String,
        /// JSON kind that was found instead.
        found: &'static str,
    },
    /// A message value was neither a string, an array nor an object.
    #[error("Unsupported value at '{path}': expected a string, array or object, found {found}")]
    UnsupportedValue {
        /// Dotted path of the value.
        path: String,
        /// JSON kind that was found instead.
        found: &'static str,
    },
    /// A list entry was neither a string nor `null`.
    #[error("Unsupported list item at '{path}[{index}]': expected a string or null, found {found}")]
    UnsupportedListItem {
        /// Dotted path of the list.
        path: String,
        /// Position of the entry inside the list.
        index: usize,
        /// JSON kind that was found instead.
        found: &'static str,
    },
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

//! `{placeholder}` substitution.

use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::HashMap;

/// Values substituted into a message.
///
/// The variant picks the mode for the whole call: positional arguments fill
/// `{0}`, `{1}`, ... and named arguments fill `{name}`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Args {
    Positional(Vec<String>),
    Named(IndexMap<String, String>),
}

impl Args {
    pub fn is_empty(&self) -> bool {
        match self {
            Args::Positional(values) => values.is_empty(),
            Args::Named(values) => values.is_empty(),
        }
    }

    fn lookup(&self, token: &str) -> Option<&str> {
        match self {
            Args::Positional(values) => {
                if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let index: usize = token.parse().ok()?;
                values.get(index).map(String::as_str)
            },
            Args::Named(values) => values.get(token).map(String::as_str),
        }
    }
}

impl From<Vec<String>> for Args {
    fn from(values: Vec<String>) -> Self {
        Args::Positional(values)
    }
}

impl From<Vec<&str>> for Args {
    fn from(values: Vec<&str>) -> Self {
        Args::Positional(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Args {
    fn from(values: &[&str]) -> Self {
        Args::Positional(values.iter().map(|value| value.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Args {
    fn from(values: [&str; N]) -> Self {
        Args::Positional(values.iter().map(|value| value.to_string()).collect())
    }
}

impl From<IndexMap<String, String>> for Args {
    fn from(values: IndexMap<String, String>) -> Self {
        Args::Named(values)
    }
}

impl From<HashMap<String, String>> for Args {
    fn from(values: HashMap<String, String>) -> Self {
        Args::Named(values.into_iter().collect())
    }
}

impl From<Vec<(&str, &str)>> for Args {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        Args::Named(
            pairs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Args {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Args::Named(
            pairs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }
}

/// Replaces every `{token}` in `message` that has a matching argument.
///
/// Placeholders without a value (an index past the end, an unknown name, or
/// a name used with positional arguments) are kept verbatim. Substituted
/// values are not scanned again.
pub fn interpolate<'m>(message: &'m str, args: Option<&Args>) -> Cow<'m, str> {
    let Some(args) = args.filter(|args| !args.is_empty()) else {
        return Cow::Borrowed(message);
    };
    if !message.contains('{') {
        return Cow::Borrowed(message);
    }

    let mut out = String::with_capacity(message.len());
    let mut rest = message;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];

        match tail.find(['{', '}']) {
            Some(end) if tail.as_bytes()[end] == b'}' => {
                let token = &tail[..end];
                match args.lookup(token) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(token);
                        out.push('}');
                    },
                }
                rest = &tail[end + 1..];
            },
            _ => {
                out.push('{');
                rest = tail;
            },
        }
    }

    out.push_str(rest);
    Cow::Owned(out)
}

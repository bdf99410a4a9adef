//! Parsing and resolution of message keys such as `a.b.c` or `phrases[1]`.

use crate::tree::{LocaleTree, Namespace};

/// One dot-separated step of a [`MessageKey`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Segment<'a> {
    /// Name looked up in the current namespace.
    pub name: &'a str,
    /// Optional `[index]` suffix addressing an entry of a list.
    pub index: Option<usize>,
}

impl<'a> Segment<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let Some(head) = raw.strip_suffix(']') else {
            return Some(Segment {
                name: raw,
                index: None,
            });
        };

        let (name, digits) = head.rsplit_once('[')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Segment {
            name,
            index: Some(digits.parse().ok()?),
        })
    }
}

/// A parsed message key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageKey<'a> {
    raw: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> MessageKey<'a> {
    /// Splits `raw` on `.` and reads any trailing `[index]` of each segment.
    ///
    /// Returns `None` for keys whose brackets do not hold a plain
    /// non-negative integer, such as `list[x]` or `list[-1]`.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let segments = raw
            .split('.')
            .map(Segment::parse)
            .collect::<Option<Vec<_>>>()?;

        Some(Self { raw, segments })
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Walks `root` along this key and returns the message it points at.
    ///
    /// Only string messages count as found: a key that ends on a namespace,
    /// or on a list without an index, resolves to `None`.
    pub fn resolve_in<'t>(&self, root: &'t Namespace) -> Option<&'t str> {
        let (last, parents) = self.segments.split_last()?;

        let mut scope = root;
        for segment in parents {
            scope = match (scope.get(segment.name)?, segment.index) {
                (LocaleTree::Namespace(nested), None) => nested,
                _ => return None,
            };
        }

        match (scope.get(last.name)?, last.index) {
            (LocaleTree::Leaf(text), None) => Some(text.as_str()),
            (LocaleTree::List(items), Some(index)) => items.get(index)?.as_deref(),
            _ => None,
        }
    }
}

/// Resolves `key` against `root`, returning `None` when nothing is found.
pub fn resolve<'t>(root: &'t Namespace, key: &str) -> Option<&'t str> {
    MessageKey::parse(key)?.resolve_in(root)
}

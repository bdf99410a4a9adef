use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Identifier of a locale, such as `"pt-br"` or `"en"`.
///
/// Codes are opaque: two codes are equal only when their text is identical.
/// No case folding or canonicalization happens here.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl LocaleCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the bare language subtag when the code carries a region,
    /// script or variant (`pt-br` yields `pt`).
    ///
    /// The subtag keeps the original spelling's case so it can be matched
    /// against registry keys as-is.
    pub fn primary_language(&self) -> Option<LocaleCode> {
        let lang = self.0.parse::<LanguageIdentifier>().ok()?;

        let has_subtags =
            lang.script.is_some() || lang.region.is_some() || lang.variants().next().is_some();
        if !has_subtags {
            return None;
        }

        let len = lang.language.as_str().len();
        self.0.get(..len).map(LocaleCode::new)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocaleCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for LocaleCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&LocaleCode> for LocaleCode {
    fn from(code: &LocaleCode) -> Self {
        code.clone()
    }
}

impl PartialEq<str> for LocaleCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LocaleCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

//! Translation against the active locale of a registry.

use crate::interpolate::{Args, interpolate};
use crate::locale::LocaleCode;
use crate::merge::LocaleRegistry;
use crate::plural::select_variant;
use std::sync::Arc;

/// Translates keys against one locale of a shared [`LocaleRegistry`].
///
/// Cloning is cheap; the registry is reference counted. None of the
/// operations fail: a key that cannot be resolved is returned as-is.
#[derive(Clone, Debug)]
pub struct Translator {
    registry: Arc<LocaleRegistry>,
    locale: LocaleCode,
    fallback: Option<LocaleCode>,
}

impl Translator {
    pub fn new(registry: Arc<LocaleRegistry>, locale: impl Into<LocaleCode>) -> Self {
        Self {
            registry,
            locale: locale.into(),
            fallback: None,
        }
    }

    /// Sets the locale consulted when a key is missing from the active one.
    ///
    /// With a fallback in place, the active locale's primary language
    /// (`pt` for `pt-br`) is tried first when the registry knows it.
    pub fn with_fallback(mut self, fallback: Option<LocaleCode>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn locale(&self) -> &LocaleCode {
        &self.locale
    }

    pub fn fallback(&self) -> Option<&LocaleCode> {
        self.fallback.as_ref()
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Returns the raw message for `key`, walking the fallback chain.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        if let Some(message) = self.registry.resolve(self.locale.as_str(), key) {
            return Some(message);
        }

        let fallback = self.fallback.as_ref()?;

        if let Some(primary) = self.locale.primary_language()
            && &primary != fallback
            && let Some(message) = self.registry.resolve(primary.as_str(), key)
        {
            return Some(message);
        }

        if fallback == &self.locale {
            return None;
        }
        self.registry.resolve(fallback.as_str(), key)
    }

    /// Translates `key` without arguments.
    pub fn translate(&self, key: &str) -> String {
        self.translate_args(key, None)
    }

    /// Translates `key` and fills its placeholders from `args`.
    pub fn translate_with(&self, key: &str, args: impl Into<Args>) -> String {
        let args = args.into();
        self.translate_args(key, Some(&args))
    }

    pub fn translate_args(&self, key: &str, args: Option<&Args>) -> String {
        match self.lookup(key) {
            Some(message) => interpolate(message, args).into_owned(),
            None => self.missing(key),
        }
    }

    /// Selects the plural variant of `key` for `quantity`.
    pub fn plural(&self, key: &str, quantity: impl Into<f64>) -> String {
        match self.lookup(key) {
            Some(message) => select_variant(message, quantity.into()).to_string(),
            None => self.missing(key),
        }
    }

    fn missing(&self, key: &str) -> String {
        tracing::warn!(
            "Translation for '{}' not found in locale '{}'",
            key,
            self.locale
        );
        key.to_string()
    }
}

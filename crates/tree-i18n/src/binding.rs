use crate::error::I18nError;
use crate::store::{I18nState, Store, StoreExt as _};
use std::sync::Arc;
use tree_i18n_core::{Args, LocaleCode, LocaleFragment, LocaleRegistry, Translator};

/// Options applied when binding a registry to a store.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tree_i18n::{I18nOptions, LocaleFragment, MemoryStore};
///
/// let i18n = I18nOptions::builder()
///     .fallback_locale("en")
///     .build()
///     .init(Arc::new(MemoryStore::new()), Vec::<LocaleFragment>::new());
///
/// assert!(i18n.locale().is_none());
/// ```
#[derive(Debug, Default, bon::Builder)]
pub struct I18nOptions {
    /// Locale consulted when a key is missing from the active one.
    #[builder(into)]
    fallback_locale: Option<LocaleCode>,
}

impl I18nOptions {
    /// Merges `fragments` and attaches the result to `store`.
    ///
    /// Every locale event fired on the store afterwards publishes a new
    /// [`I18nState`] with the requested locale and a matching [`Translator`].
    pub fn init<S, I>(self, store: Arc<S>, fragments: I) -> I18n<S>
    where
        S: Store + 'static,
        I: IntoIterator<Item = LocaleFragment>,
    {
        let registry = Arc::new(LocaleRegistry::merge(fragments));

        let weak_store = Arc::downgrade(&store);
        let listener_registry = Arc::clone(&registry);
        let fallback = self.fallback_locale.clone();
        store.on_locale(Arc::new(move |code: &LocaleCode| {
            let Some(store) = weak_store.upgrade() else {
                return;
            };

            tracing::debug!(locale = %code, "Applying locale change");
            let translator = Translator::new(Arc::clone(&listener_registry), code.clone())
                .with_fallback(fallback.clone());

            store.set(I18nState {
                locale: Some(code.clone()),
                translate: Some(translator),
            });
        }));

        I18n {
            store,
            registry,
            fallback: self.fallback_locale,
        }
    }
}

/// Handle to a registry bound to a store.
#[derive(Debug)]
pub struct I18n<S: Store + 'static> {
    store: Arc<S>,
    registry: Arc<LocaleRegistry>,
    fallback: Option<LocaleCode>,
}

impl<S: Store + 'static> I18n<S> {
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn fallback_locale(&self) -> Option<&LocaleCode> {
        self.fallback.as_ref()
    }

    /// Requests a locale change through the store.
    ///
    /// Unknown codes are accepted; every key then translates to itself.
    pub fn set_locale(&self, code: impl Into<LocaleCode>) {
        self.store.set_locale(code);
    }

    /// The active locale, or `None` before the first locale change.
    pub fn locale(&self) -> Option<LocaleCode> {
        self.store.get().locale
    }

    /// The active translator, or `None` before the first locale change.
    pub fn translator(&self) -> Option<Translator> {
        self.store.get().translate
    }

    /// Translates `key` with the active translator, echoing the key when
    /// no locale is active yet.
    pub fn translate(&self, key: &str) -> String {
        self.translate_args(key, None)
    }

    pub fn translate_with(&self, key: &str, args: impl Into<Args>) -> String {
        let args = args.into();
        self.translate_args(key, Some(&args))
    }

    fn translate_args(&self, key: &str, args: Option<&Args>) -> String {
        match self.translator() {
            Some(translator) => translator.translate_args(key, args),
            None => key.to_string(),
        }
    }

    pub fn plural(&self, key: &str, quantity: impl Into<f64>) -> String {
        match self.translator() {
            Some(translator) => translator.plural(key, quantity),
            None => key.to_string(),
        }
    }
}

/// Merges `fragments` and attaches them to `store` with default options.
pub fn init<S, I>(store: Arc<S>, fragments: I) -> I18n<S>
where
    S: Store + 'static,
    I: IntoIterator<Item = LocaleFragment>,
{
    I18nOptions::default().init(store, fragments)
}

/// Like [`init`], but takes untyped JSON fragments and rejects malformed ones.
pub fn init_from_json<S, I>(store: Arc<S>, fragments: I) -> Result<I18n<S>, I18nError>
where
    S: Store + 'static,
    I: IntoIterator<Item = serde_json::Value>,
{
    let fragments = fragments
        .into_iter()
        .map(LocaleFragment::from_json)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(init(store, fragments))
}

/// Loads the locale files described by `config` and attaches them to `store`.
///
/// The configured fallback locale is applied, and the default locale (if
/// any) is activated before returning.
pub fn init_from_config<S>(
    store: Arc<S>,
    config: &tree_i18n_toml::I18nConfig,
    base_dir: Option<&std::path::Path>,
) -> Result<I18n<S>, I18nError>
where
    S: Store + 'static,
{
    let fragments = config.load_fragments_from_base(base_dir)?;

    let i18n = I18nOptions::builder()
        .maybe_fallback_locale(config.fallback_locale())
        .build()
        .init(store, fragments);

    if let Some(locale) = config.default_locale() {
        i18n.set_locale(locale);
    }

    Ok(i18n)
}

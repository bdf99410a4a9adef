use parking_lot::Mutex;
use serde_json::{Value, json};
use std::sync::Arc;
use tree_i18n::{
    I18n, I18nError, I18nOptions, I18nState, LocaleCode, MemoryStore, Store as _, StoreEvent,
    StoreExt as _, capital, is_object, lower, title, upper,
};

fn locales() -> Value {
    json!({
        "pt-br": {
            "test": "teste",
            "phrase": "adoro banana",
            "phrases": ["Frase 1", "Frase 2"],
            "pluralization": "Zero | Um | Muito!",
            "interpolation": {
                "key": "Olá, {0}! Como está {1}?",
                "named": "Olá, {name}! Como está {time}?"
            },
            "wow": { "much": { "deep": { "list": [null, "muito profundo"] } } },
            "obj": { "a": "a" }
        }
    })
}

fn setup() -> (Arc<MemoryStore>, I18n<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let i18n = tree_i18n::init_from_json(
        Arc::clone(&store),
        [locales(), json!({ "pt-br": { "obj": { "b": "b" } } })],
    )
    .unwrap();
    (store, i18n)
}

#[test]
fn checks_if_a_value_is_an_object() {
    assert!(is_object(&json!({})));
    assert!(!is_object(&json!(1)));
}

#[test]
fn starts_with_a_clean_store() {
    let (store, i18n) = setup();
    let I18nState { locale, translate } = store.get();

    assert!(locale.is_none());
    assert!(translate.is_none());
    assert!(i18n.locale().is_none());
    assert_eq!(i18n.translate("test"), "test");
}

#[test]
fn locale_event_changes_locale() {
    let (store, _i18n) = setup();
    store.fire(StoreEvent::Locale("en".into()));

    let state = store.get();
    assert_eq!(state.locale, Some(LocaleCode::from("en")));
    assert!(state.translate.is_some());
}

#[test]
fn set_locale_updates_state() {
    let (store, i18n) = setup();
    store.set_locale("pt-br");
    assert_eq!(store.get().locale, Some(LocaleCode::from("pt-br")));

    i18n.set_locale("en");
    assert_eq!(i18n.locale(), Some(LocaleCode::from("en")));
}

#[test]
fn unknown_message_returns_its_id() {
    let (store, _i18n) = setup();
    store.set_locale("pt-br");
    let t = store.get().translate.unwrap();

    assert_eq!(t.translate("non.existent"), "non.existent");
}

#[test]
fn resolves_messages_by_id_and_path() {
    let (store, _i18n) = setup();
    store.set_locale("pt-br");
    let t = store.get().translate.unwrap();

    assert_eq!(t.translate("test"), "teste");
    assert_eq!(t.translate("obj.a"), "a");
    assert_eq!(t.translate("obj.b"), "b");
    assert_eq!(t.translate("wow.much.deep.list[1]"), "muito profundo");
    assert_eq!(t.translate("wow.much.deep.list[0]"), "wow.much.deep.list[0]");
}

#[test]
fn resolves_messages_within_arrays() {
    let (store, _i18n) = setup();
    store.set_locale("pt-br");
    let t = store.get().translate.unwrap();

    assert_eq!(t.translate("phrases[1]"), "Frase 2");
    assert_eq!(t.translate("phrases[2]"), "phrases[2]");
    assert_eq!(t.translate("phrases"), "phrases");
}

#[test]
fn interpolates_placeholders() {
    let (_store, i18n) = setup();
    i18n.set_locale("pt-br");

    assert_eq!(
        i18n.translate_with("interpolation.key", ["Chris", "o dia"]),
        "Olá, Chris! Como está o dia?"
    );
    assert_eq!(
        i18n.translate_with("interpolation.named", [("name", "Chris"), ("time", "o dia")]),
        "Olá, Chris! Como está o dia?"
    );
}

#[test]
fn pluralizes() {
    let (store, _i18n) = setup();
    store.set_locale("pt-br");
    let t = store.get().translate.unwrap();

    assert_eq!(t.plural("pluralization", 0), "Zero");
    assert_eq!(t.plural("pluralization", 1), "Um");
    assert_eq!(t.plural("pluralization", -1), "Um");
    assert_eq!(t.plural("pluralization", -1000), "Muito!");
    assert_eq!(t.plural("pluralization", 2), "Muito!");
    assert_eq!(t.plural("pluralization", 100), "Muito!");
    assert_eq!(t.plural("no.such.key", 2), "no.such.key");
}

#[test]
fn case_helpers_on_translated_text() {
    let (_store, i18n) = setup();
    i18n.set_locale("pt-br");
    let phrase = i18n.translate("phrase");

    assert_eq!(capital(&phrase), "Adoro banana");
    assert_eq!(title(&phrase), "Adoro Banana");
    assert_eq!(lower(&phrase), "adoro banana");
    assert_eq!(upper(&phrase), "ADORO BANANA");
}

#[test]
fn observers_see_every_locale_change() {
    let (store, i18n) = setup();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    store.subscribe(Arc::new(move |state: &I18nState| {
        let t = state.translate.as_ref().map(|t| t.translate("test"));
        sink.lock().push((state.locale.clone(), t));
    }));

    i18n.set_locale("pt-br");
    i18n.set_locale("en");
    i18n.set_locale("pt-br");

    assert_eq!(
        *seen.lock(),
        vec![
            (Some(LocaleCode::from("pt-br")), Some("teste".to_string())),
            (Some(LocaleCode::from("en")), Some("test".to_string())),
            (Some(LocaleCode::from("pt-br")), Some("teste".to_string())),
        ]
    );
}

#[test]
fn locale_change_from_observer_applies_last() {
    let (store, i18n) = setup();

    let weak = Arc::downgrade(&store);
    store.subscribe(Arc::new(move |state: &I18nState| {
        if state.locale.as_ref().is_some_and(|code| code == "en")
            && let Some(store) = weak.upgrade()
        {
            store.set_locale("pt-br");
        }
    }));

    i18n.set_locale("en");
    assert_eq!(i18n.locale(), Some(LocaleCode::from("pt-br")));
}

#[test]
fn bindings_do_not_interfere() {
    let (first_store, first) = setup();
    let (second_store, second) = setup();

    first.set_locale("pt-br");
    second.set_locale("en");

    assert_eq!(first_store.get().locale, Some(LocaleCode::from("pt-br")));
    assert_eq!(second_store.get().locale, Some(LocaleCode::from("en")));
    assert_eq!(first.translate("test"), "teste");
    assert_eq!(second.translate("test"), "test");
}

#[test]
fn fallback_locale_fills_gaps() {
    let store = Arc::new(MemoryStore::new());
    let fragments = [json!({
        "en": { "only_en": "English", "test": "test" },
        "pt-br": { "test": "teste" }
    })]
    .into_iter()
    .map(|value| tree_i18n::LocaleFragment::from_json(value).unwrap());

    let i18n = I18nOptions::builder()
        .fallback_locale("en")
        .build()
        .init(store, fragments);
    i18n.set_locale("pt-br");

    assert_eq!(i18n.fallback_locale(), Some(&LocaleCode::from("en")));
    assert_eq!(i18n.translate("test"), "teste");
    assert_eq!(i18n.translate("only_en"), "English");
    assert_eq!(i18n.translate("missing"), "missing");
}

#[test]
fn malformed_fragment_fails_fast() {
    let store = Arc::new(MemoryStore::new());
    let result = tree_i18n::init_from_json(store, [json!({ "pt-br": { "count": 3 } })]);

    assert!(matches!(result, Err(I18nError::Tree(_))));
}

#[test]
fn registry_is_merged_once() {
    let (_store, i18n) = setup();
    let registry = i18n.registry();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.resolve("pt-br", "obj.a"), Some("a"));
    assert_eq!(registry.resolve("pt-br", "obj.b"), Some("b"));
}

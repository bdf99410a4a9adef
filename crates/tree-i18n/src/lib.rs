#![doc = include_str!("../README.md")]

mod binding;
pub mod case;
mod error;
mod store;

pub use binding::{I18n, I18nOptions, init, init_from_config, init_from_json};
pub use case::{capital, lower, title, upper};
pub use error::I18nError;
pub use store::{
    I18nState, LocaleListener, MemoryStore, StateObserver, Store, StoreEvent, StoreExt,
};

pub use tree_i18n_core::{
    Args, LocaleCode, LocaleFragment, LocaleRegistry, LocaleTree, MessageKey, Namespace,
    Translator, TreeError, is_object,
};
pub use tree_i18n_toml::{I18nConfig, I18nConfigError};

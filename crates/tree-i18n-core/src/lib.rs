#![doc = include_str!("../README.md")]

pub mod error;
pub mod interpolate;
pub mod locale;
pub mod merge;
pub mod path;
pub mod plural;
pub mod translator;
pub mod tree;

pub use error::TreeError;
pub use interpolate::{Args, interpolate};
pub use locale::LocaleCode;
pub use merge::{LocaleFragment, LocaleRegistry, deep_merge, merge};
pub use path::{MessageKey, Segment, resolve};
pub use plural::{pluralize, select_variant};
pub use translator::Translator;
pub use tree::{LocaleTree, Namespace, is_object, namespace_from_value};

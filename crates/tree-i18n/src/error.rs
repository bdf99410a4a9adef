use thiserror::Error;

/// Errors surfaced while constructing a binding.
///
/// Translating never fails; only malformed input at setup time ends up here.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A fragment did not have the shape of a locale tree.
    #[error("Invalid locale fragment: {0}")]
    Tree(#[from] tree_i18n_core::TreeError),
    /// Configuration or locale files could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] tree_i18n_toml::I18nConfigError),
}

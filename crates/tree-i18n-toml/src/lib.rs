#![doc = include_str!("../README.md")]

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, io};
use thiserror::Error;
use tree_i18n_core::{LocaleCode, LocaleFragment, TreeError, namespace_from_value};

#[derive(Debug, Error)]
pub enum I18nConfigError {
    /// Configuration file not found.
    #[error("i18n.toml configuration file not found")]
    NotFound,
    /// Failed to read a file or directory.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A locale file is not valid JSON.
    #[error("Failed to parse locale file '{}'", path.display())]
    JsonError {
        /// The offending file.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A locale file is valid JSON but not a valid message tree.
    #[error("Invalid message tree in '{}'", path.display())]
    Tree {
        /// The offending file.
        path: PathBuf,
        #[source]
        source: TreeError,
    },
    /// A directory under the locales dir has a name that is not UTF-8.
    #[error("Locales directory contains a non UTF-8 entry: {name}")]
    InvalidLocaleDirectory {
        /// Lossy rendering of the name.
        name: String,
    },
}

/// The configuration read from `i18n.toml`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Directory holding one sub-directory per locale.
    pub locales_dir: PathBuf,
    /// Locale activated right after initialization.
    #[serde(default)]
    pub default_locale: Option<String>,
    /// Locale consulted when a key is missing from the active one.
    #[serde(default)]
    pub fallback_locale: Option<String>,
}

impl I18nConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, I18nConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(I18nConfigError::NotFound);
        }

        let content = fs_err::read_to_string(path)?;
        let config: I18nConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// Reads `i18n.toml` from `CARGO_MANIFEST_DIR`.
    pub fn read_from_manifest_dir() -> Result<Self, I18nConfigError> {
        let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| I18nConfigError::NotFound)?;
        Self::from_manifest_dir(Path::new(&manifest_dir))
    }

    /// Reads `i18n.toml` from the given directory.
    pub fn from_manifest_dir(manifest_dir: &Path) -> Result<Self, I18nConfigError> {
        Self::read_from_path(manifest_dir.join("i18n.toml"))
    }

    /// Returns the locales directory resolved against `base_dir`.
    /// If `base_dir` is `None`, uses `CARGO_MANIFEST_DIR`.
    pub fn locales_dir_from_base(&self, base_dir: Option<&Path>) -> Result<PathBuf, I18nConfigError> {
        let base = match base_dir {
            Some(dir) => dir.to_path_buf(),
            None => {
                let manifest_dir =
                    env::var("CARGO_MANIFEST_DIR").map_err(|_| I18nConfigError::NotFound)?;
                PathBuf::from(manifest_dir)
            },
        };

        Ok(base.join(&self.locales_dir))
    }

    pub fn default_locale(&self) -> Option<LocaleCode> {
        self.default_locale.as_deref().map(LocaleCode::from)
    }

    pub fn fallback_locale(&self) -> Option<LocaleCode> {
        self.fallback_locale.as_deref().map(LocaleCode::from)
    }

    /// Returns the locales that have a directory under the locales dir,
    /// sorted and without duplicates. Plain files are ignored.
    pub fn available_locales_from_base(
        &self,
        base_dir: Option<&Path>,
    ) -> Result<Vec<LocaleCode>, I18nConfigError> {
        let locales_path = self.locales_dir_from_base(base_dir)?;

        let mut locales = Vec::new();
        for entry in fs_err::read_dir(&locales_path)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }

            let name = entry.file_name().into_string().map_err(|raw| {
                I18nConfigError::InvalidLocaleDirectory {
                    name: raw.to_string_lossy().into_owned(),
                }
            })?;
            locales.push(LocaleCode::from(name));
        }

        locales.sort();
        locales.dedup();

        tracing::info!(
            "Discovered {} locale(s) in '{}'",
            locales.len(),
            locales_path.display()
        );

        Ok(locales)
    }

    /// Loads every locale file as a fragment, ready to be merged.
    ///
    /// Locales are visited in sorted order and the files of one locale in
    /// file-name order, so later files override earlier ones.
    pub fn load_fragments_from_base(
        &self,
        base_dir: Option<&Path>,
    ) -> Result<Vec<LocaleFragment>, I18nConfigError> {
        let locales_path = self.locales_dir_from_base(base_dir)?;
        let mut fragments = Vec::new();

        for locale in self.available_locales_from_base(base_dir)? {
            let locale_dir = locales_path.join(locale.as_str());
            for file in json_files(&locale_dir)? {
                let messages = read_locale_file(&file)?;
                tracing::debug!(locale = %locale, file = %file.display(), "Loaded locale file");
                fragments.push(LocaleFragment::new().with_locale(locale.clone(), messages));
            }
        }

        Ok(fragments)
    }
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>, I18nConfigError> {
    let mut files = Vec::new();
    for entry in fs_err::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn read_locale_file(path: &Path) -> Result<tree_i18n_core::Namespace, I18nConfigError> {
    let content = fs_err::read_to_string(path)?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| I18nConfigError::JsonError {
            path: path.to_path_buf(),
            source,
        })?;

    namespace_from_value(value).map_err(|source| I18nConfigError::Tree {
        path: path.to_path_buf(),
        source,
    })
}

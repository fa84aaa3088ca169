// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site configuration (`site.yaml`)
//!
//! ```yaml
//! locales: [th, en]
//! default_locale: th
//! messages_dir: messages
//! posts_section: blogPage.posts
//! output_dir: out
//! ```
//!
//! Every field is optional. Relative directories are resolved against the
//! directory holding the config file.

use crate::error::{ConfigError, RegistryError};
use crate::i18n::LocaleRegistry;
use crate::paths::DEFAULT_POSTS_SECTION;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "site.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub locales: Vec<String>,
    pub default_locale: String,
    pub messages_dir: PathBuf,
    pub posts_section: String,
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locales: vec!["th".to_string(), "en".to_string()],
            default_locale: "th".to_string(),
            messages_dir: PathBuf::from("messages"),
            posts_section: DEFAULT_POSTS_SECTION.to_string(),
            output_dir: PathBuf::from("out"),
        }
    }
}

impl SiteConfig {
    /// Parse a config file. Relative paths inside it become relative to the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.rebase(base);
        }
        tracing::info!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Load `explicit` if given, else [`DEFAULT_CONFIG_FILE`] when present,
    /// else built-in defaults. An explicit path that is missing is an error.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    fn rebase(&mut self, base: &Path) {
        if self.messages_dir.is_relative() {
            self.messages_dir = base.join(&self.messages_dir);
        }
        if self.output_dir.is_relative() {
            self.output_dir = base.join(&self.output_dir);
        }
    }

    /// Validated locale registry for this site.
    pub fn registry(&self) -> Result<LocaleRegistry, RegistryError> {
        LocaleRegistry::new(self.locales.iter().cloned(), &self.default_locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(SiteConfig::from_yaml("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = SiteConfig::from_yaml("default_locale: en\n").unwrap();
        assert_eq!(config.default_locale, "en");
        assert_eq!(config.posts_section, DEFAULT_POSTS_SECTION);
        assert_eq!(config.registry().unwrap().default_locale().as_str(), "en");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(SiteConfig::from_yaml("locale: th\n").is_err());
    }

    #[test]
    fn invalid_registry_is_reported() {
        let config = SiteConfig::from_yaml("locales: [en]\ndefault_locale: th\n").unwrap();
        assert_eq!(
            config.registry(),
            Err(RegistryError::DefaultNotSupported("th".into()))
        );
    }

    #[test]
    fn load_rebases_relative_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.yaml");
        std::fs::write(&path, "messages_dir: i18n\noutput_dir: /tmp/site-out\n").unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.messages_dir, dir.path().join("i18n"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/site-out"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            SiteConfig::discover(Some(&missing)),
            Err(ConfigError::Io { .. })
        ));
    }
}

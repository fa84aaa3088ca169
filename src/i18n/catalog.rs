// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message catalogs and the per-locale catalog store.
//!
//! Each supported locale has one document under the messages directory,
//! named after the locale code: `messages/th.json`, `messages/en.json`.
//! YAML (`.yaml` / `.yml`) is accepted as well; JSON wins when both exist.
//!
//! A supported locale without a readable, well-formed document is a
//! packaging defect, so [`CatalogStore::load_all`] fails loudly instead of
//! serving an empty catalog. Catalogs are immutable once loaded.

use crate::error::CatalogError;
use crate::i18n::registry::LocaleRegistry;
use crate::types::Locale;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    Json,
    Yaml,
}

const EXTENSIONS: &[(&str, SourceFormat)] = &[
    ("json", SourceFormat::Json),
    ("yaml", SourceFormat::Yaml),
    ("yml", SourceFormat::Yaml),
];

/// The full message tree for one locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: Locale,
    root: Value,
    source: PathBuf,
    digest: String,
}

impl Catalog {
    /// Wrap an already-parsed tree. The root must be an object.
    pub fn from_value(locale: Locale, root: Value) -> Result<Self, CatalogError> {
        let source = PathBuf::from(format!("<inline:{}>", locale));
        if !root.is_object() {
            return Err(CatalogError::NotAnObject { path: source });
        }
        let digest = sha256_hex(root.to_string().as_bytes());
        Ok(Self {
            locale,
            root,
            source,
            digest,
        })
    }

    /// Read and parse the catalog document at `path`.
    pub fn from_file(locale: Locale, path: &Path) -> Result<Self, CatalogError> {
        let format = format_for(path).ok_or_else(|| CatalogError::Malformed {
            path: path.to_path_buf(),
            message: "unrecognised catalog extension".to_string(),
        })?;
        let bytes = fs::read(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = decode(&bytes).ok_or_else(|| CatalogError::Malformed {
            path: path.to_path_buf(),
            message: "not valid UTF-8 or UTF-16 text".to_string(),
        })?;

        let root: Value = match format {
            SourceFormat::Json => serde_json::from_str(&text).map_err(|e| CatalogError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            SourceFormat::Yaml => serde_yaml::from_str(&text).map_err(|e| CatalogError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
        };
        if !root.is_object() {
            return Err(CatalogError::NotAnObject {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            locale,
            root,
            source: path.to_path_buf(),
            digest: sha256_hex(&bytes),
        })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// File the catalog was read from (`<inline:xx>` for in-memory trees).
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// SHA-256 of the source bytes, hex encoded.
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

/// Locate the document for `locale` in `dir`, trying extensions in order.
pub fn resource_path(dir: &Path, locale: &Locale) -> Option<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|(ext, _)| dir.join(format!("{}.{}", locale, ext)))
        .find(|path| path.is_file())
}

/// Load one supported locale's catalog from `dir`.
pub fn load_catalog(dir: &Path, locale: &Locale) -> Result<Catalog, CatalogError> {
    let path = resource_path(dir, locale).ok_or_else(|| CatalogError::Missing {
        locale: locale.to_string(),
        dir: dir.to_path_buf(),
    })?;
    let catalog = Catalog::from_file(locale.clone(), &path)?;
    tracing::info!(locale = %locale, path = %path.display(), "loaded message catalog");
    Ok(catalog)
}

/// Whether `path` has a catalog document extension.
pub fn is_catalog_file(path: &Path) -> bool {
    format_for(path).is_some()
}

fn format_for(path: &Path) -> Option<SourceFormat> {
    let ext = path.extension()?.to_str()?;
    EXTENSIONS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(ext))
        .map(|(_, format)| *format)
}

/// Decode catalog bytes, honouring a UTF-8 or UTF-16 byte order mark.
fn decode(bytes: &[u8]) -> Option<String> {
    let (encoding, bom_len) =
        encoding_rs::Encoding::for_bom(bytes).unwrap_or((encoding_rs::UTF_8, 0));
    let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
    if had_errors {
        None
    } else {
        Some(text.into_owned())
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Every supported locale's catalog, keyed by locale.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    registry: LocaleRegistry,
    catalogs: HashMap<Locale, Catalog>,
}

impl CatalogStore {
    /// Eagerly load a catalog for every supported locale.
    ///
    /// The first missing or malformed document aborts the load.
    pub fn load_all(registry: LocaleRegistry, dir: &Path) -> Result<Self, CatalogError> {
        let mut catalogs = HashMap::new();
        for locale in registry.locales() {
            let catalog = load_catalog(dir, locale)?;
            catalogs.insert(locale.clone(), catalog);
        }
        Ok(Self { registry, catalogs })
    }

    /// Assemble a store from catalogs built elsewhere (tests, embedders).
    ///
    /// Every catalog must belong to a supported locale and the default
    /// locale must be present. Other supported locales may be absent;
    /// lookups for them fall back to the default catalog.
    pub fn from_catalogs(
        registry: LocaleRegistry,
        catalogs: impl IntoIterator<Item = Catalog>,
    ) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();
        for catalog in catalogs {
            if !registry.is_supported(catalog.locale().as_str()) {
                return Err(CatalogError::Unsupported(catalog.locale().to_string()));
            }
            map.insert(catalog.locale().clone(), catalog);
        }
        if !map.contains_key(registry.default_locale()) {
            return Err(CatalogError::DefaultMissing(
                registry.default_locale().to_string(),
            ));
        }
        Ok(Self {
            registry,
            catalogs: map,
        })
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// The catalog for `locale`, or the default locale's catalog when none
    /// is loaded for it.
    pub fn catalog(&self, locale: &Locale) -> &Catalog {
        match self.catalogs.get(locale) {
            Some(catalog) => catalog,
            None => {
                tracing::debug!(locale = %locale, "no catalog loaded, using default locale");
                self.canonical()
            }
        }
    }

    /// The default locale's catalog, source of truth for slugs and parity.
    pub fn canonical(&self) -> &Catalog {
        // from_catalogs and load_all both guarantee the default is present
        &self.catalogs[self.registry.default_locale()]
    }

    /// Loaded catalogs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Catalog> {
        self.registry
            .locales()
            .iter()
            .filter_map(|locale| self.catalogs.get(locale))
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Supported locale set and default locale.
//!
//! The registry is constructed once from configuration and is read-only
//! afterwards. Membership is exact and case-sensitive: `"EN"` and `"en-US"`
//! are not `"en"`.
//!
//! The built-in registry matches the production site: Thai first (and
//! default), then English.

use crate::error::RegistryError;
use crate::types::Locale;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Lowercase ISO 639 language with optional subtags (`th`, `en`, `zh-Hant`).
fn code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("locale code pattern is valid")
    })
}

/// Whether `code` is syntactically a locale code.
pub fn is_well_formed(code: &str) -> bool {
    code_pattern().is_match(code)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    default: Locale,
}

impl LocaleRegistry {
    /// Build a registry, checking that the set is non-empty, duplicate free,
    /// well formed, and contains the default.
    pub fn new<I, S>(codes: I, default: &str) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut locales = Vec::new();
        for code in codes {
            let code = code.into();
            if !is_well_formed(&code) {
                return Err(RegistryError::InvalidCode(code));
            }
            if !seen.insert(code.clone()) {
                return Err(RegistryError::Duplicate(code));
            }
            locales.push(Locale::new(code));
        }

        if locales.is_empty() {
            return Err(RegistryError::Empty);
        }
        if !seen.contains(default) {
            return Err(RegistryError::DefaultNotSupported(default.to_string()));
        }

        Ok(Self {
            locales,
            default: Locale::new(default),
        })
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// The supported [`Locale`] equal to `code`, if any.
    pub fn get(&self, code: &str) -> Option<&Locale> {
        self.locales.iter().find(|locale| locale.as_str() == code)
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default
    }

    /// All supported locales, in configured order.
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self {
            locales: vec![Locale::new("th"), Locale::new("en")],
            default: Locale::new("th"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_is_thai_first() {
        let registry = LocaleRegistry::default();
        assert_eq!(registry.default_locale().as_str(), "th");
        let codes: Vec<&str> = registry.locales().iter().map(Locale::as_str).collect();
        assert_eq!(codes, vec!["th", "en"]);
        assert!(registry.is_supported(registry.default_locale().as_str()));
    }

    #[test]
    fn membership_is_exact() {
        let registry = LocaleRegistry::default();
        assert!(registry.is_supported("en"));
        assert!(!registry.is_supported("EN"));
        assert!(!registry.is_supported("en-US"));
        assert!(!registry.is_supported(" en"));
        assert!(!registry.is_supported(""));
    }

    #[test]
    fn default_must_be_member() {
        let err = LocaleRegistry::new(["th", "en"], "fr").unwrap_err();
        assert_eq!(err, RegistryError::DefaultNotSupported("fr".into()));
    }

    #[test]
    fn rejects_empty_and_duplicates() {
        let empty: [&str; 0] = [];
        assert_eq!(LocaleRegistry::new(empty, "th").unwrap_err(), RegistryError::Empty);
        assert_eq!(
            LocaleRegistry::new(["th", "en", "th"], "th").unwrap_err(),
            RegistryError::Duplicate("th".into())
        );
    }

    #[test]
    fn rejects_malformed_codes() {
        assert_eq!(
            LocaleRegistry::new(["th", "EN"], "th").unwrap_err(),
            RegistryError::InvalidCode("EN".into())
        );
        assert!(LocaleRegistry::new(["zh-CN", "en"], "en").is_ok());
        assert!(!is_well_formed("en_US"));
        assert!(!is_well_formed("../etc"));
    }
}

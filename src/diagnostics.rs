// SPDX-License-Identifier: PMPL-1.0-or-later

//! `doctor`: checks a site's configuration and message catalogs

use crate::config::SiteConfig;
use crate::i18n::catalog::{is_catalog_file, load_catalog};
use crate::i18n::{
    coverage_report, is_known_language, language_name, CatalogStore, LocaleRegistry, Messages,
};
use crate::paths;
use anyhow::{anyhow, Result};
use colored::*;
use serde_json::Value;
use std::path::Path;
use walkdir::WalkDir;

pub fn run_doctor(config: &SiteConfig) -> Result<()> {
    println!("origen-site doctor");

    let checks = collect_diagnostics(config);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("doctor reported issues"))
    } else {
        Ok(())
    }
}

/// Run every check without printing.
pub fn collect_diagnostics(config: &SiteConfig) -> Vec<Diagnostic> {
    let mut checks = vec![Diagnostic::ok(
        "version",
        format!("origen-site {}", env!("CARGO_PKG_VERSION")),
    )];

    let registry = match config.registry() {
        Ok(registry) => {
            let codes: Vec<String> = registry
                .locales()
                .iter()
                .map(|locale| match language_name(locale) {
                    Some(name) => format!("{} ({})", locale, name),
                    None => locale.to_string(),
                })
                .collect();
            checks.push(Diagnostic::ok(
                "locales",
                format!(
                    "{} (default {})",
                    codes.join(", "),
                    registry.default_locale()
                ),
            ));
            registry
        }
        Err(err) => {
            checks.push(Diagnostic::error("locales", err.to_string()));
            return checks;
        }
    };

    if !config.messages_dir.is_dir() {
        checks.push(Diagnostic::error(
            "messages directory",
            format!("{} missing", config.messages_dir.display()),
        ));
        return checks;
    }
    checks.push(Diagnostic::ok(
        "messages directory",
        format!("{} exists", config.messages_dir.display()),
    ));

    for locale in registry.locales() {
        if !is_known_language(locale) {
            checks.push(Diagnostic::warning(
                format!("language {}", locale),
                "not a known ISO 639-1 code".to_string(),
            ));
        }
    }

    let mut catalogs = Vec::new();
    for locale in registry.locales() {
        let label = format!("catalog {}", locale);
        match load_catalog(&config.messages_dir, locale) {
            Ok(catalog) => {
                checks.push(Diagnostic::ok(
                    label,
                    format!(
                        "{} (sha256 {})",
                        catalog.source().display(),
                        &catalog.digest()[..12]
                    ),
                ));
                catalogs.push(catalog);
            }
            Err(err) => checks.push(Diagnostic::error(label, err.to_string())),
        }
    }

    checks.extend(check_stray_catalogs(&config.messages_dir, &registry));

    if catalogs.len() == registry.len() {
        match CatalogStore::from_catalogs(registry, catalogs) {
            Ok(store) => {
                checks.extend(check_coverage(&store));
                checks.push(check_slugs(&store, &config.posts_section));
            }
            Err(err) => checks.push(Diagnostic::error("catalog store", err.to_string())),
        }
    }

    checks
}

fn check_coverage(store: &CatalogStore) -> Vec<Diagnostic> {
    let report = coverage_report(store);
    report
        .locales
        .iter()
        .map(|locale| {
            let label = format!("coverage {}", locale.locale);
            if locale.missing.is_empty() {
                Diagnostic::ok(label, format!("{:.1}% of {} keys", locale.coverage_percent, report.total_keys))
            } else {
                Diagnostic::warning(
                    label,
                    format!(
                        "{:.1}% ({} keys missing, run `coverage` for the list)",
                        locale.coverage_percent,
                        locale.missing.len()
                    ),
                )
            }
        })
        .collect()
}

fn check_slugs(store: &CatalogStore, posts_section: &str) -> Diagnostic {
    let section: Vec<Value> = Messages::new(store.canonical())
        .raw(posts_section)
        .unwrap_or_default();
    let slugs = paths::slugs(&section);
    let unsafe_slugs: Vec<&str> = slugs
        .iter()
        .map(String::as_str)
        .filter(|slug| !paths::is_safe_slug(slug))
        .collect();

    if !unsafe_slugs.is_empty() {
        Diagnostic::warning(
            "blog slugs",
            format!("not URL-safe: {}", unsafe_slugs.join(", ")),
        )
    } else if section.len() != slugs.len() {
        Diagnostic::warning(
            "blog slugs",
            format!(
                "{} posts, {} usable slugs (empty or repeated slugs are skipped)",
                section.len(),
                slugs.len()
            ),
        )
    } else {
        Diagnostic::ok("blog slugs", format!("{} posts", slugs.len()))
    }
}

/// Catalog documents whose locale is not configured.
fn check_stray_catalogs(dir: &Path, registry: &LocaleRegistry) -> Vec<Diagnostic> {
    WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && is_catalog_file(entry.path()))
        .filter_map(|entry| {
            let stem = entry.path().file_stem()?.to_str()?.to_string();
            if registry.is_supported(&stem) {
                None
            } else {
                Some(Diagnostic::warning(
                    "stray catalog",
                    format!("{} is not a configured locale", entry.path().display()),
                ))
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: String,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: impl Into<String>, level: Level, detail: String) -> Self {
        Self {
            label: label.into(),
            level,
            detail,
        }
    }

    fn ok(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site(files: &[(&str, &str)]) -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        for (name, body) in files {
            std::fs::write(dir.path().join(name), body).unwrap();
        }
        let config = SiteConfig {
            messages_dir: dir.path().to_path_buf(),
            ..SiteConfig::default()
        };
        (dir, config)
    }

    fn level_of(checks: &[Diagnostic], label: &str) -> Option<Level> {
        checks.iter().find(|c| c.label == label).map(|c| c.level)
    }

    #[test]
    fn healthy_site_has_no_errors() {
        let (_dir, config) = site(&[
            ("th.json", r#"{"nav": {"about": "เกี่ยวกับ"}, "blogPage": {"posts": [{"slug": "trip-a"}]}}"#),
            ("en.json", r#"{"nav": {"about": "About"}, "blogPage": {"posts": [{"slug": "trip-a"}]}}"#),
        ]);
        let checks = collect_diagnostics(&config);
        assert!(checks.iter().all(|c| c.level != Level::Error));
        assert_eq!(level_of(&checks, "coverage en"), Some(Level::Ok));
        assert_eq!(level_of(&checks, "blog slugs"), Some(Level::Ok));
        let locales = checks.iter().find(|c| c.label == "locales").unwrap();
        assert_eq!(locales.detail, "th (Thai), en (English) (default th)");
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let (_dir, config) = site(&[("th.json", "{}")]);
        let checks = collect_diagnostics(&config);
        assert_eq!(level_of(&checks, "catalog en"), Some(Level::Error));
        assert!(run_doctor(&config).is_err());
    }

    #[test]
    fn gaps_and_strays_are_warnings() {
        let (_dir, config) = site(&[
            ("th.json", r#"{"hero": {"h1": "สวัสดี", "p": "..."}}"#),
            ("en.json", r#"{"hero": {"h1": "Hello"}}"#),
            ("fr.json", "{}"),
            ("notes.txt", "not a catalog"),
        ]);
        let checks = collect_diagnostics(&config);
        assert_eq!(level_of(&checks, "coverage en"), Some(Level::Warn));
        let strays: Vec<&Diagnostic> = checks.iter().filter(|c| c.label == "stray catalog").collect();
        assert_eq!(strays.len(), 1);
        assert!(strays[0].detail.contains("fr.json"));
    }

    #[test]
    fn invalid_registry_stops_early() {
        let config = SiteConfig {
            default_locale: "ja".to_string(),
            ..SiteConfig::default()
        };
        let checks = collect_diagnostics(&config);
        assert_eq!(level_of(&checks, "locales"), Some(Level::Error));
        assert_eq!(checks.len(), 2);
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Build-time enumeration of pre-renderable paths
//!
//! Blog slugs come from the canonical (default-locale) catalog only and are
//! paired with every supported locale. A post that exists only in another
//! locale's catalog gets no pre-rendered path; slug sets are assumed to be
//! identical across locales.

use crate::i18n::{CatalogStore, LocaleRegistry, Messages};
use crate::routing::localized_href;
use crate::types::{Locale, PageKind, StaticPath};
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Key path of the blog posts section in every catalog.
pub const DEFAULT_POSTS_SECTION: &str = "blogPage.posts";

fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._~-]*$").expect("slug pattern is valid")
    })
}

/// Whether `slug` is usable as a single URL path segment and file name.
pub fn is_safe_slug(slug: &str) -> bool {
    slug_pattern().is_match(slug) && !slug.contains("..")
}

/// Slugs of a content array, in catalog order, skipping empty or absent
/// identifiers and repeated slugs.
pub fn slugs(section: &[Value]) -> Vec<String> {
    let mut seen = HashSet::new();
    section
        .iter()
        .filter_map(|record| record.get("slug").and_then(Value::as_str))
        .filter(|slug| !slug.is_empty())
        .filter(|slug| seen.insert(slug.to_string()))
        .map(str::to_string)
        .collect()
}

/// Every locale paired with every slug, locale-major.
pub fn cross_product(locales: &[Locale], slugs: &[String]) -> Vec<StaticPath> {
    locales
        .iter()
        .flat_map(|locale| {
            slugs
                .iter()
                .map(move |slug| StaticPath::with_slug(locale.clone(), slug.clone()))
        })
        .collect()
}

/// One entry per supported locale, for the locale layout.
pub fn locale_params(registry: &LocaleRegistry) -> Vec<StaticPath> {
    registry
        .locales()
        .iter()
        .cloned()
        .map(StaticPath::locale_only)
        .collect()
}

/// Locale × slug pairs for the blog post pages.
pub fn blog_post_params(store: &CatalogStore, posts_section: &str) -> Vec<StaticPath> {
    let canonical = Messages::new(store.canonical());
    let section: Vec<Value> = canonical.raw(posts_section).unwrap_or_default();
    let slugs = slugs(&section);
    tracing::debug!(
        locale = %canonical.locale(),
        section = posts_section,
        count = slugs.len(),
        "enumerated canonical slugs"
    );
    cross_product(store.registry().locales(), &slugs)
}

/// Every URL the site pre-renders: static pages per locale, then posts.
pub fn site_paths(store: &CatalogStore, posts_section: &str) -> Vec<String> {
    let registry = store.registry();
    let mut paths: Vec<String> = registry
        .locales()
        .iter()
        .flat_map(|locale| {
            PageKind::all()
                .iter()
                .map(move |page| localized_href(locale, &page.href()))
        })
        .collect();
    paths.extend(
        blog_post_params(store, posts_section)
            .iter()
            .map(StaticPath::blog_path),
    );
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use serde_json::json;

    fn store(th_posts: Value, en_posts: Value) -> CatalogStore {
        let th = Catalog::from_value(Locale::new("th"), json!({"blogPage": {"posts": th_posts}})).unwrap();
        let en = Catalog::from_value(Locale::new("en"), json!({"blogPage": {"posts": en_posts}})).unwrap();
        CatalogStore::from_catalogs(LocaleRegistry::default(), [th, en]).unwrap()
    }

    #[test]
    fn slugs_skip_empty_and_duplicates() {
        let section = vec![
            json!({"slug": "trip-a"}),
            json!({"slug": ""}),
            json!({"title": "no slug"}),
            json!({"slug": 7}),
            json!({"slug": "trip-a"}),
            json!({"slug": "trip-b"}),
        ];
        assert_eq!(slugs(&section), vec!["trip-a", "trip-b"]);
    }

    #[test]
    fn posts_come_from_canonical_catalog_only() {
        let store = store(
            json!([{"slug": "trip-a"}, {"slug": "trip-b"}]),
            json!([{"slug": "trip-a"}, {"slug": "en-only"}]),
        );
        let pairs: Vec<(String, String)> = blog_post_params(&store, DEFAULT_POSTS_SECTION)
            .into_iter()
            .map(|p| (p.locale.to_string(), p.slug.unwrap_or_default()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("th".to_string(), "trip-a".to_string()),
                ("th".to_string(), "trip-b".to_string()),
                ("en".to_string(), "trip-a".to_string()),
                ("en".to_string(), "trip-b".to_string()),
            ]
        );
    }

    #[test]
    fn missing_section_yields_no_post_paths() {
        let th = Catalog::from_value(Locale::new("th"), json!({})).unwrap();
        let store = CatalogStore::from_catalogs(LocaleRegistry::default(), [th]).unwrap();
        assert!(blog_post_params(&store, DEFAULT_POSTS_SECTION).is_empty());
        assert_eq!(site_paths(&store, DEFAULT_POSTS_SECTION).len(), 12);
    }

    #[test]
    fn site_paths_cover_pages_and_posts() {
        let store = store(json!([{"slug": "trip-a"}]), json!([]));
        let paths = site_paths(&store, DEFAULT_POSTS_SECTION);
        assert_eq!(paths[0], "/th");
        assert!(paths.contains(&"/en/case-studies".to_string()));
        assert!(paths.contains(&"/en/blog/trip-a".to_string()));
        assert_eq!(paths.len(), 12 + 2);
    }

    #[test]
    fn safe_slugs_are_single_segments() {
        assert!(is_safe_slug("trip-a"));
        assert!(is_safe_slug("2025_kyoto.v2"));
        assert!(!is_safe_slug("../etc"));
        assert!(!is_safe_slug("a/b"));
        assert!(!is_safe_slug("ทริป"));
        assert!(!is_safe_slug(""));
    }

    #[test]
    fn locale_params_follow_registry_order() {
        let params = locale_params(&LocaleRegistry::default());
        let codes: Vec<&str> = params.iter().map(|p| p.locale.as_str()).collect();
        assert_eq!(codes, vec!["th", "en"]);
    }
}

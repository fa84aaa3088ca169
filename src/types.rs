// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions shared across the site pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque locale code such as `"th"` or `"en"`.
///
/// A `Locale` on its own carries no guarantee of being supported; only values
/// handed out by [`crate::i18n::LocaleRegistry`] and the resolver are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Locale(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag (`"zh"` for `"zh-CN"`).
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Static pages of the site. Every page lives under a `/{locale}` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Home,
    About,
    Programs,
    Blog,
    CaseStudies,
    Contact,
}

impl PageKind {
    /// Path segment following the locale, `None` for the locale root.
    pub fn segment(&self) -> Option<&'static str> {
        match self {
            PageKind::Home => None,
            PageKind::About => Some("about"),
            PageKind::Programs => Some("programs"),
            PageKind::Blog => Some("blog"),
            PageKind::CaseStudies => Some("case-studies"),
            PageKind::Contact => Some("contact"),
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "about" => Some(PageKind::About),
            "programs" => Some(PageKind::Programs),
            "blog" => Some(PageKind::Blog),
            "case-studies" => Some(PageKind::CaseStudies),
            "contact" => Some(PageKind::Contact),
            _ => None,
        }
    }

    /// All static pages, in navigation order.
    pub fn all() -> &'static [PageKind] {
        &[
            PageKind::Home,
            PageKind::About,
            PageKind::Programs,
            PageKind::Blog,
            PageKind::CaseStudies,
            PageKind::Contact,
        ]
    }

    /// Href relative to the locale prefix (`""` for home, `"/about"` ...).
    pub fn href(&self) -> String {
        match self.segment() {
            Some(segment) => format!("/{}", segment),
            None => String::new(),
        }
    }
}

/// One pre-renderable path: a locale, optionally paired with a content slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticPath {
    pub locale: Locale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl StaticPath {
    pub fn locale_only(locale: Locale) -> Self {
        Self { locale, slug: None }
    }

    pub fn with_slug(locale: Locale, slug: impl Into<String>) -> Self {
        Self {
            locale,
            slug: Some(slug.into()),
        }
    }

    /// URL path for a blog post pair, or the locale root otherwise.
    pub fn blog_path(&self) -> String {
        match &self.slug {
            Some(slug) => format!("/{}/blog/{}", self.locale, slug),
            None => format!("/{}", self.locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_language_subtag() {
        assert_eq!(Locale::new("zh-CN").language(), "zh");
        assert_eq!(Locale::new("th").language(), "th");
    }

    #[test]
    fn page_segments_roundtrip() {
        for page in PageKind::all() {
            if let Some(segment) = page.segment() {
                assert_eq!(PageKind::from_segment(segment), Some(*page));
            }
        }
        assert_eq!(PageKind::from_segment("gallery"), None);
    }

    #[test]
    fn static_path_urls() {
        let post = StaticPath::with_slug(Locale::new("en"), "trip-a");
        assert_eq!(post.blog_path(), "/en/blog/trip-a");
        let root = StaticPath::locale_only(Locale::new("th"));
        assert_eq!(root.blog_path(), "/th");
    }
}

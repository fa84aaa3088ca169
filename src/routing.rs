// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale-prefixed routes: `/{locale}/...`
//!
//! Route parsing uses the routing form of locale resolution, so an
//! unsupported locale segment is a not-found route.

use crate::error::RouteError;
use crate::i18n::{resolve_route, LocaleRegistry};
use crate::types::{Locale, PageKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum Page {
    Static { kind: PageKind },
    BlogPost { slug: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub locale: Locale,
    #[serde(flatten)]
    pub page: Page,
}

impl Route {
    /// Parse a request path. Query strings and fragments are ignored, as are
    /// empty segments (`//` and trailing slashes).
    ///
    /// Segments are compared as written and are not percent-decoded, so a
    /// blog slug only matches when it is URL-safe ASCII. `/th/blog/%E0%B8%97`
    /// looks up the slug `%E0%B8%97`, not `ท`; `doctor` warns about catalog
    /// slugs that cannot be reached this way.
    pub fn parse(path: &str, registry: &LocaleRegistry) -> Result<Self, RouteError> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        let locale = match resolve_route(registry, segments.next()) {
            Err(RouteError::MissingLocale(_)) => {
                return Err(RouteError::MissingLocale(path.to_string()))
            }
            other => other?.clone(),
        };

        let rest: Vec<&str> = segments.collect();
        let page = match rest.as_slice() {
            [] => Page::Static {
                kind: PageKind::Home,
            },
            ["blog", slug] => Page::BlogPost {
                slug: (*slug).to_string(),
            },
            [segment] => match PageKind::from_segment(segment) {
                Some(kind) => Page::Static { kind },
                None => return Err(RouteError::UnknownPage(path.to_string())),
            },
            _ => return Err(RouteError::UnknownPage(path.to_string())),
        };

        Ok(Route { locale, page })
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match &self.page {
            Page::Static { kind } => localized_href(&self.locale, &kind.href()),
            Page::BlogPost { slug } => format!("/{}/blog/{}", self.locale, slug),
        }
    }
}

/// Prefix a site-relative href with the locale: `("en", "/about")` →
/// `"/en/about"`, `("en", "")` → `"/en"`.
pub fn localized_href(locale: &Locale, href: &str) -> String {
    if href.is_empty() || href == "/" {
        format!("/{}", locale)
    } else if href.starts_with('/') {
        format!("/{}{}", locale, href)
    } else {
        format!("/{}/{}", locale, href)
    }
}

/// Rewrite `path` for another locale.
///
/// A leading supported locale segment is replaced; otherwise the new locale
/// is inserted in front of the path.
pub fn switch_locale(path: &str, target: &Locale, registry: &LocaleRegistry) -> String {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (trimmed, None),
    };

    let remainder = if registry.is_supported(first) {
        rest.unwrap_or("")
    } else {
        trimmed
    };

    if remainder.is_empty() {
        format!("/{}", target)
    } else {
        format!("/{}/{}", target, remainder)
    }
}

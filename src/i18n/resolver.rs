// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale resolution and the per-render locale context.
//!
//! Two contracts share one primitive, exact membership in the registry:
//!
//! * [`resolve`] is the lookup form. Anything unsupported (or absent)
//!   becomes the default locale.
//! * [`resolve_route`] is the routing form. An unsupported segment is a
//!   not-found route, never a silent re-render under the default.

use crate::error::RouteError;
use crate::i18n::accessor::Messages;
use crate::i18n::catalog::{Catalog, CatalogStore};
use crate::i18n::registry::LocaleRegistry;
use crate::types::Locale;

/// Map any candidate to a supported locale. Idempotent.
pub fn resolve<'r>(registry: &'r LocaleRegistry, candidate: Option<&str>) -> &'r Locale {
    match candidate.and_then(|code| registry.get(code)) {
        Some(locale) => locale,
        None => {
            tracing::debug!(candidate = ?candidate, "unsupported locale, using default");
            registry.default_locale()
        }
    }
}

/// Validate a route's locale segment.
pub fn resolve_route<'r>(
    registry: &'r LocaleRegistry,
    segment: Option<&str>,
) -> Result<&'r Locale, RouteError> {
    match segment {
        None | Some("") => Err(RouteError::MissingLocale(String::new())),
        Some(code) => registry
            .get(code)
            .ok_or_else(|| RouteError::UnsupportedLocale(code.to_string())),
    }
}

/// The active locale paired with its catalog for one render.
///
/// Created once per request and passed down explicitly; never mutated.
#[derive(Debug, Clone, Copy)]
pub struct LocaleContext<'a> {
    locale: &'a Locale,
    catalog: &'a Catalog,
}

impl<'a> LocaleContext<'a> {
    /// Context for a locale already known to be supported.
    pub fn new(store: &'a CatalogStore, locale: &'a Locale) -> Self {
        Self {
            locale,
            catalog: store.catalog(locale),
        }
    }

    /// Lookup-form resolution followed by catalog selection.
    pub fn for_candidate(store: &'a CatalogStore, candidate: Option<&str>) -> Self {
        let locale = resolve(store.registry(), candidate);
        Self::new(store, locale)
    }

    pub fn locale(&self) -> &'a Locale {
        self.locale
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn messages(&self) -> Messages<'a> {
        Messages::new(self.catalog)
    }

    /// Shorthand for `messages().scope(namespace)`.
    pub fn scope(&self, namespace: &'a str) -> Messages<'a> {
        Messages::new(self.catalog).scope(namespace)
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale resolution and message lookup for the site.
//!
//! ## Pipeline
//!
//! | Step | Module | Failure |
//! |------|--------|---------|
//! | Supported locales + default | [`registry`] | bad config (fatal) |
//! | Load one catalog per locale | [`catalog`] | missing/malformed document (fatal) |
//! | Candidate → supported locale | [`resolver`] | unsupported route segment (not-found) |
//! | Key path → text or structured value | [`accessor`] | never fails; falls back |
//!
//! Keys use dotted namespaces (`"blogPage.labels.read"`) and mirror the
//! layout of the catalog documents. Text lookups fall back to a caller
//! default, then to the key path itself, so a missing key is visible on the
//! page but never breaks it.
//!
//! The default locale's catalog is *canonical*: it is the reference for
//! [`coverage`] reports and the only source of blog slugs when static paths
//! are enumerated.

pub mod accessor;
pub mod catalog;
pub mod coverage;
mod iso639;
pub mod registry;
pub mod resolver;

pub use accessor::{interpolate, Lookup, Messages};
pub use catalog::{Catalog, CatalogStore};
pub use coverage::{coverage_report, CoverageReport, LocaleCoverage};
pub use iso639::{is_known_language, language_name, native_name};
pub use registry::LocaleRegistry;
pub use resolver::{resolve, resolve_route, LocaleContext};

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Origen Site: locale resolution and message catalogs for the Origen
//! Travel website.
//!
//! Every page of the site lives under a `/{locale}` prefix and reads its
//! text from one message catalog per supported locale. This crate owns that
//! pipeline: which locales exist, how a request's locale is resolved, how
//! keys are looked up with safe fallbacks, and which (locale, slug) pairs
//! are pre-rendered.
//!
//! LAYERS:
//! 1. **i18n**: locale registry, catalog store, resolver and accessor.
//! 2. **content / routing / paths**: typed catalog records, locale-prefixed
//!    routes and static path enumeration.
//! 3. **pages**: the localized model each route renders, wrapped in the
//!    shared site shell.
//! 4. **config / report / storage / diagnostics**: the CLI's site config,
//!    output formats, static export and `doctor` checks.

pub mod config;
pub mod content;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod pages;
pub mod paths;
pub mod report;
pub mod routing;
pub mod storage;
pub mod types;

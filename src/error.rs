// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for the locale and catalog pipeline
//!
//! Only [`RegistryError`], [`ConfigError`] and [`CatalogError`] are fatal:
//! they describe packaging or configuration defects and surface at load
//! time. [`RouteError`] and [`PageError`] describe a single request that
//! should be answered with not-found.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid locale registry definition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no locales configured")]
    Empty,

    #[error("default locale '{0}' is not in the supported set")]
    DefaultNotSupported(String),

    #[error("locale '{0}' is listed more than once")]
    Duplicate(String),

    #[error("malformed locale code '{0}'")]
    InvalidCode(String),
}

/// Fatal catalog load failure for a supported locale
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("no message catalog for supported locale '{locale}' in {dir}")]
    Missing { locale: String, dir: PathBuf },

    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("catalog {path} must be an object at the top level")]
    NotAnObject { path: PathBuf },

    #[error("catalog for locale '{0}' is not in the supported set")]
    Unsupported(String),

    #[error("default locale '{0}' has no loaded catalog")]
    DefaultMissing(String),
}

/// Site configuration failure
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Route that does not map to a renderable page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("path '{0}' has no locale segment")]
    MissingLocale(String),

    #[error("unsupported locale segment '{0}'")]
    UnsupportedLocale(String),

    #[error("no page at '{0}'")]
    UnknownPage(String),
}

/// Page that cannot be built for a valid route
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("no post '{slug}' in the '{locale}' catalog")]
    PostNotFound { locale: String, slug: String },

    #[error(transparent)]
    Route(#[from] RouteError),
}

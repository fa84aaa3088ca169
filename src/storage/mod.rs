// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static export of every pre-rendered page model
//!
//! Each site path is written to `{out}/{path}/index.{ext}`; a
//! `manifest.json` alongside records when the export ran, which catalog
//! revisions it used and which pages were skipped.

use crate::i18n::CatalogStore;
use crate::pages::{self, RenderOptions};
use crate::paths;
use crate::report::ReportOutputFormat;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRevision {
    pub locale: String,
    pub source: PathBuf,
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedPage {
    pub path: String,
    /// Relative to the export directory.
    pub file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedPage {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportManifest {
    pub generator: String,
    pub generated_at: String,
    pub default_locale: String,
    pub format: String,
    pub catalogs: Vec<CatalogRevision>,
    pub pages: Vec<ExportedPage>,
    pub skipped: Vec<SkippedPage>,
}

/// File for a site path: `/en/blog/trip-a` → `en/blog/trip-a/index.json`.
pub fn page_file(path: &str, format: ReportOutputFormat) -> PathBuf {
    let mut file: PathBuf = path.split('/').filter(|s| !s.is_empty()).collect();
    file.push(format!("index.{}", format.extension()));
    file
}

fn unsafe_segment(path: &str) -> bool {
    path.split('/')
        .filter(|s| !s.is_empty())
        .any(|segment| !paths::is_safe_slug(segment))
}

pub fn export_site(
    store: &CatalogStore,
    options: &RenderOptions,
    directory: &Path,
    format: ReportOutputFormat,
) -> Result<ExportManifest> {
    fs::create_dir_all(directory)
        .with_context(|| format!("creating export directory {}", directory.display()))?;

    let mut exported = Vec::new();
    let mut skipped = Vec::new();

    for path in paths::site_paths(store, &options.posts_section) {
        if unsafe_segment(&path) {
            tracing::warn!(path = %path, "skipping path that is not file-system safe");
            skipped.push(SkippedPage {
                path,
                reason: "unsafe path segment".to_string(),
            });
            continue;
        }

        let page = match pages::render(store, &path, options) {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "skipping page");
                skipped.push(SkippedPage {
                    path,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let file = page_file(&path, format);
        let target = directory.join(&file);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&target, format.serialize(&page)?)
            .with_context(|| format!("writing {}", target.display()))?;
        exported.push(ExportedPage { path, file });
    }

    let manifest = ExportManifest {
        generator: format!("origen-site {}", env!("CARGO_PKG_VERSION")),
        generated_at: Utc::now().to_rfc3339(),
        default_locale: store.registry().default_locale().to_string(),
        format: format.extension().to_string(),
        catalogs: store
            .iter()
            .map(|catalog| CatalogRevision {
                locale: catalog.locale().to_string(),
                source: catalog.source().to_path_buf(),
                sha256: catalog.digest().to_string(),
            })
            .collect(),
        pages: exported,
        skipped,
    };

    let manifest_path = directory.join(MANIFEST_FILE);
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
        .with_context(|| format!("writing {}", manifest_path.display()))?;
    tracing::info!(
        pages = manifest.pages.len(),
        skipped = manifest.skipped.len(),
        dir = %directory.display(),
        "export complete"
    );
    Ok(manifest)
}

/// Read back a manifest written by [`export_site`].
pub fn read_manifest(directory: &Path) -> Result<ExportManifest> {
    let path = directory.join(MANIFEST_FILE);
    let content =
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

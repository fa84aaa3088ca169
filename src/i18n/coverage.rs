// SPDX-License-Identifier: PMPL-1.0-or-later

//! Advisory key parity between each locale and the canonical catalog.
//!
//! Pages assume every locale carries the keys they read, but nothing
//! enforces it: a gap only degrades the page to its fallback text. This
//! report lists the gaps so they can be fixed before release.
//!
//! Leaf paths stop at arrays: `blogPage.posts` is one key, its records are
//! content rather than messages. A key that itself contains a `.` cannot be
//! reached by a dotted lookup, so it and everything below it are left out
//! of the report with a warning.

use crate::i18n::accessor::resolve_path;
use crate::i18n::catalog::CatalogStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    pub canonical_locale: String,
    pub total_keys: usize,
    pub locales: Vec<LocaleCoverage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleCoverage {
    pub locale: String,
    pub present: usize,
    /// Canonical keys absent from this locale, in catalog order.
    pub missing: Vec<String>,
    /// Keys this locale has that the canonical catalog lacks.
    pub extra: Vec<String>,
    pub coverage_percent: f32,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|l| l.missing.is_empty())
    }
}

/// Every leaf key path in `root`, depth first in document order.
pub fn leaf_keys(root: &Value) -> Vec<String> {
    let mut keys = Vec::new();
    collect_leaves(root, String::new(), &mut keys);
    keys
}

fn collect_leaves(node: &Value, prefix: String, out: &mut Vec<String>) {
    match node {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                if key.contains('.') {
                    tracing::warn!(parent = %prefix, key = %key, "catalog key contains '.', not reachable by lookup");
                    continue;
                }
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_leaves(child, path, out);
            }
        }
        _ if !prefix.is_empty() => out.push(prefix),
        _ => {}
    }
}

pub fn coverage_report(store: &CatalogStore) -> CoverageReport {
    let canonical = store.canonical();
    let reference = leaf_keys(canonical.root());
    let total = reference.len();

    let locales = store
        .iter()
        .map(|catalog| {
            let missing: Vec<String> = reference
                .iter()
                .filter(|key| resolve_path(catalog.root(), key).is_none())
                .cloned()
                .collect();
            let extra: Vec<String> = leaf_keys(catalog.root())
                .into_iter()
                .filter(|key| resolve_path(canonical.root(), key).is_none())
                .collect();
            let present = total.saturating_sub(missing.len());
            let coverage_percent = if total == 0 {
                100.0
            } else {
                (present as f32 / total as f32) * 100.0
            };
            LocaleCoverage {
                locale: catalog.locale().to_string(),
                present,
                missing,
                extra,
                coverage_percent,
            }
        })
        .collect();

    CoverageReport {
        canonical_locale: canonical.locale().to_string(),
        total_keys: total,
        locales,
    }
}

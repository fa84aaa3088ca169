// SPDX-License-Identifier: PMPL-1.0-or-later

//! Programs and case-study listings

use crate::content::{self, CaseStudyItem, ProgramItem};
use crate::i18n::LocaleContext;
use serde::Serialize;

/// One labelled fact on a program card, e.g. `Duration: 5 days`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramCard {
    pub key: String,
    pub title: String,
    pub desc: String,
    /// Only the facts the record actually carries, in display order.
    pub details: Vec<Detail>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramsPage {
    pub heading: String,
    pub intro: String,
    pub more_label: String,
    pub less_label: String,
    pub items: Vec<ProgramCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseStudiesPage {
    pub heading: String,
    pub intro: String,
    pub items: Vec<CaseStudyItem>,
}

pub fn programs(ctx: &LocaleContext<'_>) -> ProgramsPage {
    let page = ctx.scope("programsPage");
    let labels = ctx.scope("programsPage.labels");

    let items = content::records::<ProgramItem>(page.raw("items"))
        .into_iter()
        .map(|item| {
            let details = [
                ("duration", "Duration", &item.duration),
                ("bestFor", "Best for", &item.best_for),
                ("destinations", "Destinations", &item.destinations),
            ]
            .into_iter()
            .filter_map(|(key, default, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| Detail {
                        label: labels.t_or(key, default),
                        value: v.to_string(),
                    })
            })
            .collect();

            ProgramCard {
                details,
                key: item.key,
                title: item.title,
                desc: item.desc,
                highlights: item.highlights,
            }
        })
        .collect();

    ProgramsPage {
        heading: page.t("heading"),
        intro: page.t("intro"),
        more_label: labels.t_or("more", "Show more"),
        less_label: labels.t_or("less", "Show less"),
        items,
    }
}

pub fn case_studies(ctx: &LocaleContext<'_>) -> CaseStudiesPage {
    let page = ctx.scope("caseStudies");
    CaseStudiesPage {
        heading: page.t("heading"),
        intro: page.t("intro"),
        items: content::records(page.raw("items")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, CatalogStore, LocaleRegistry};
    use crate::types::Locale;
    use serde_json::json;

    fn store(root: serde_json::Value) -> CatalogStore {
        let th = Catalog::from_value(Locale::new("th"), root).unwrap();
        CatalogStore::from_catalogs(LocaleRegistry::default(), [th]).unwrap()
    }

    #[test]
    fn program_details_only_for_present_fields() {
        let store = store(json!({"programsPage": {
            "heading": "Programs",
            "labels": {"duration": "ระยะเวลา"},
            "items": [
                {"key": "edu", "title": "Study tour", "desc": "d", "duration": "5 days", "bestFor": ""},
                {"key": "corp", "title": "Incentive", "desc": "d", "destinations": "Japan", "highlights": ["Onsen"]}
            ]
        }}));
        let ctx = LocaleContext::for_candidate(&store, None);
        let page = programs(&ctx);
        assert_eq!(page.heading, "Programs");
        assert_eq!(
            page.items[0].details,
            vec![Detail {
                label: "ระยะเวลา".into(),
                value: "5 days".into()
            }]
        );
        assert_eq!(page.items[1].details[0].label, "Destinations");
        assert_eq!(page.items[1].highlights, vec!["Onsen"]);
        assert_eq!(page.more_label, "Show more");
    }

    #[test]
    fn missing_sections_render_empty() {
        let store = store(json!({}));
        let ctx = LocaleContext::for_candidate(&store, None);
        let page = case_studies(&ctx);
        assert!(page.items.is_empty());
        assert_eq!(page.heading, "caseStudies.heading");
        assert!(programs(&ctx).items.is_empty());
    }

    #[test]
    fn case_studies_keep_results() {
        let store = store(json!({"caseStudies": {"items": [
            {"client": "ACME", "role": "HR", "quote": "Great", "results": ["+20% engagement"]}
        ]}}));
        let ctx = LocaleContext::for_candidate(&store, None);
        let page = case_studies(&ctx);
        assert_eq!(page.items[0].client, "ACME");
        assert_eq!(page.items[0].results.len(), 1);
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Navigation, language selector and footer shared by every page

use crate::i18n::{native_name, LocaleContext, LocaleRegistry};
use crate::routing::{localized_href, switch_locale};
use crate::types::PageKind;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageOption {
    pub code: String,
    /// Native language name, or the upper-cased code when unknown.
    pub label: String,
    /// Current path rewritten for this locale.
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub company_name: String,
    pub company_address: String,
    pub hours: Vec<String>,
    pub license_title: String,
    pub license_number: String,
    pub packages_title: String,
    pub packages: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteShell {
    /// Value for the document's `lang` attribute.
    pub lang: String,
    pub home_href: String,
    pub nav: Vec<NavItem>,
    pub language_label: String,
    pub languages: Vec<LanguageOption>,
    pub footer: Footer,
}

fn nav_key(page: PageKind) -> Option<(&'static str, &'static str)> {
    match page {
        PageKind::Home => None,
        PageKind::About => Some(("about", "About")),
        PageKind::Programs => Some(("programs", "Programs")),
        PageKind::Blog => Some(("blog", "Blog")),
        PageKind::CaseStudies => Some(("cases", "Case Studies")),
        PageKind::Contact => Some(("contact", "Contact")),
    }
}

pub fn build(ctx: &LocaleContext<'_>, registry: &LocaleRegistry, current_path: &str) -> SiteShell {
    let locale = ctx.locale();
    let nav_messages = ctx.scope("nav");

    let nav = PageKind::all()
        .iter()
        .filter_map(|page| {
            nav_key(*page).map(|(key, default)| NavItem {
                label: nav_messages.t_or(key, default),
                href: localized_href(locale, &page.href()),
            })
        })
        .collect();

    let languages = registry
        .locales()
        .iter()
        .map(|candidate| LanguageOption {
            code: candidate.to_string(),
            label: native_name(candidate)
                .map(str::to_string)
                .unwrap_or_else(|| candidate.as_str().to_uppercase()),
            href: switch_locale(current_path, candidate, registry),
            active: candidate == locale,
        })
        .collect();

    let footer = ctx.scope("footer");
    SiteShell {
        lang: locale.to_string(),
        home_href: localized_href(locale, ""),
        nav,
        language_label: nav_messages.t_or("language", "Language"),
        languages,
        footer: Footer {
            company_name: footer.t_or("company.name", "Origen Travel"),
            company_address: footer.t_or("company.address", ""),
            hours: ["hours.monFri", "hours.sat"]
                .iter()
                .filter_map(|key| footer.text(key))
                .collect(),
            license_title: footer.t_or("license.title", ""),
            license_number: footer.t_or("license.number", ""),
            packages_title: footer.t_or("packagesTitle", "Packages"),
            packages: footer.raw("packages").unwrap_or_default(),
        },
    }
}

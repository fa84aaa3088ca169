// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page models: the localized data each route renders
//!
//! Every model is built from a [`LocaleContext`]. Missing text falls back to
//! a built-in default or the key path, and missing lists become empty, so
//! the only page-level failure is a blog post that the resolved catalog
//! does not contain.

pub mod blog;
pub mod home;
pub mod listing;
pub mod shell;

use crate::content::CategoryFilter;
use crate::error::PageError;
use crate::i18n::{CatalogStore, LocaleContext};
use crate::routing::{Page, Route};
use crate::types::PageKind;
use serde::Serialize;

pub use blog::{BlogIndex, BlogPostPage};
pub use home::{AboutPage, ContactPage, HomePage};
pub use listing::{CaseStudiesPage, ProgramsPage};
pub use shell::SiteShell;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "kebab-case")]
pub enum PageModel {
    Home(HomePage),
    About(AboutPage),
    Programs(ProgramsPage),
    Blog(BlogIndex),
    BlogPost(BlogPostPage),
    CaseStudies(CaseStudiesPage),
    Contact(ContactPage),
}

/// A page model wrapped in the shared site shell.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    pub path: String,
    pub route: Route,
    pub shell: SiteShell,
    pub page: PageModel,
}

/// Options that affect rendering but not routing.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub posts_section: String,
    pub category: CategoryFilter,
}

impl RenderOptions {
    pub fn new(posts_section: impl Into<String>) -> Self {
        Self {
            posts_section: posts_section.into(),
            category: CategoryFilter::All,
        }
    }
}

/// Build the model for an already parsed route.
pub fn render_route(
    store: &CatalogStore,
    route: &Route,
    options: &RenderOptions,
) -> Result<RenderedPage, PageError> {
    let ctx = LocaleContext::new(store, &route.locale);
    let page = match &route.page {
        Page::Static { kind } => match kind {
            PageKind::Home => PageModel::Home(home::home(&ctx)),
            PageKind::About => PageModel::About(home::about(&ctx)),
            PageKind::Programs => PageModel::Programs(listing::programs(&ctx)),
            PageKind::Blog => PageModel::Blog(blog::index(
                &ctx,
                &options.posts_section,
                &options.category,
            )),
            PageKind::CaseStudies => PageModel::CaseStudies(listing::case_studies(&ctx)),
            PageKind::Contact => PageModel::Contact(home::contact(&ctx)),
        },
        Page::BlogPost { slug } => {
            PageModel::BlogPost(blog::post(&ctx, &options.posts_section, slug)?)
        }
    };

    let path = route.path();
    tracing::debug!(path = %path, locale = %route.locale, "rendered page model");
    Ok(RenderedPage {
        shell: shell::build(&ctx, store.registry(), &path),
        path,
        route: route.clone(),
        page,
    })
}

/// Parse `path` and build its model. Any failure means not-found.
pub fn render(
    store: &CatalogStore,
    path: &str,
    options: &RenderOptions,
) -> Result<RenderedPage, PageError> {
    let route = Route::parse(path, store.registry())?;
    render_route(store, &route, options)
}

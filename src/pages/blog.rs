// SPDX-License-Identifier: PMPL-1.0-or-later

//! Blog index and blog post pages

use crate::content::{self, format_date, BlogCategory, BlogPost, CategoryFilter};
use crate::error::PageError;
use crate::i18n::{LocaleContext, Messages};
use crate::routing::localized_href;
use crate::types::Locale;
use serde::Serialize;

const HEADING: &str = "Blog / Insights";
const INTRO: &str = "Perspectives on travel trends, educational journeys, and corporate learning.";
const READ: &str = "min read";
const BACK: &str = "← Back to Blog";

fn tab_default(category: Option<&BlogCategory>) -> &'static str {
    match category {
        None => "All",
        Some(BlogCategory::Trends) => "Trends",
        Some(BlogCategory::Edu) => "Educational Travel",
        Some(BlogCategory::Corp) => "Corporate Learning",
        Some(BlogCategory::Other(_)) => "",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTab {
    /// `all` or a category name.
    pub key: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
    pub slug: String,
    pub href: String,
    pub title: String,
    pub excerpt: String,
    pub category: BlogCategory,
    /// Date as stored in the catalog.
    pub date: String,
    /// Localized numeric date; the raw value when it does not parse.
    pub date_display: String,
    /// `"{readTime} {read label}"`, or just the label without a read time.
    pub read_time: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogIndex {
    pub heading: String,
    pub intro: String,
    pub tabs: Vec<CategoryTab>,
    pub read_label: String,
    pub posts: Vec<PostCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPostPage {
    pub meta_title: String,
    pub meta_description: String,
    pub back_href: String,
    pub back_label: String,
    pub post: PostCard,
}

fn read_label(blog: &Messages<'_>) -> String {
    blog.t_or("labels.read", READ)
}

fn card(post: &BlogPost, locale: &Locale, read_label: &str) -> PostCard {
    PostCard {
        slug: post.slug.clone(),
        href: localized_href(locale, &format!("/blog/{}", post.slug)),
        title: post.title.clone(),
        excerpt: post.excerpt.clone(),
        category: post.category.clone(),
        date: post.date.clone(),
        date_display: post
            .parsed_date()
            .map(|date| format_date(date, locale))
            .unwrap_or_else(|| post.date.clone()),
        read_time: match post.read_time.trim() {
            "" => read_label.to_string(),
            minutes => format!("{} {}", minutes, read_label),
        },
        image_alt: post.image_alt.clone(),
    }
}

/// Posts of the resolved catalog. A missing or malformed section is empty.
pub fn posts(ctx: &LocaleContext<'_>, posts_section: &str) -> Vec<BlogPost> {
    content::records(ctx.messages().raw(posts_section))
}

pub fn index(ctx: &LocaleContext<'_>, posts_section: &str, filter: &CategoryFilter) -> BlogIndex {
    let blog = ctx.scope("blogPage");
    let read = read_label(&blog);

    let mut tabs = vec![CategoryTab {
        key: "all".to_string(),
        label: blog.t_or("labels.all", tab_default(None)),
        active: *filter == CategoryFilter::All,
    }];
    tabs.extend(BlogCategory::tabs().into_iter().map(|category| {
        let active = matches!(filter, CategoryFilter::Only(c) if *c == category);
        CategoryTab {
            key: category.to_string(),
            label: blog.t_or(&format!("labels.{}", category), tab_default(Some(&category))),
            active,
        }
    }));

    let posts = posts(ctx, posts_section)
        .iter()
        .filter(|post| filter.matches(post))
        .map(|post| card(post, ctx.locale(), &read))
        .collect();

    BlogIndex {
        heading: blog.t_or("heading", HEADING),
        intro: blog.t_or("intro", INTRO),
        tabs,
        read_label: read,
        posts,
    }
}

/// The post page for `slug`, looked up in the resolved locale's catalog.
pub fn post(ctx: &LocaleContext<'_>, posts_section: &str, slug: &str) -> Result<BlogPostPage, PageError> {
    let posts = posts(ctx, posts_section);
    let Some(post) = content::find_post(&posts, slug) else {
        return Err(PageError::PostNotFound {
            locale: ctx.locale().to_string(),
            slug: slug.to_string(),
        });
    };

    let blog = ctx.scope("blogPage");
    let read = read_label(&blog);
    Ok(BlogPostPage {
        meta_title: format!("{} | Blog", post.title),
        meta_description: post.excerpt.clone(),
        back_href: localized_href(ctx.locale(), "/blog"),
        back_label: blog.t_or("labels.back", BACK),
        post: card(post, ctx.locale(), &read),
    })
}

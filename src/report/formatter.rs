// SPDX-License-Identifier: PMPL-1.0-or-later

//! Human-readable console output

use crate::i18n::CoverageReport;
use crate::pages::{PageModel, RenderedPage};
use crate::types::StaticPath;
use colored::*;

/// How a candidate locale was resolved.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Resolution {
    pub candidate: Option<String>,
    pub locale: String,
    /// True when the candidate was not supported and the default was used.
    pub fell_back: bool,
}

/// Result of a single message lookup.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LookupResult {
    pub locale: String,
    pub key: String,
    pub found: bool,
    pub text: String,
}

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_resolution(&self, resolution: &Resolution) {
        let candidate = resolution.candidate.as_deref().unwrap_or("<none>");
        if resolution.fell_back {
            println!(
                "{} -> {} {}",
                candidate,
                resolution.locale.bold(),
                "(default)".yellow()
            );
        } else {
            println!("{} -> {}", candidate, resolution.locale.bold().green());
        }
    }

    pub fn print_lookup(&self, lookup: &LookupResult) {
        if lookup.found {
            println!("{}", lookup.text);
        } else {
            println!(
                "{} {}",
                lookup.text,
                format!("(missing in {})", lookup.locale).yellow()
            );
        }
    }

    pub fn print_paths(&self, locales: &[StaticPath], pages: &[String]) {
        println!("{}", "LOCALES".bold().yellow());
        for param in locales {
            println!("  {}", param.locale);
        }
        println!();
        println!("{} ({})", "PATHS".bold().yellow(), pages.len());
        for path in pages {
            println!("  {}", path);
        }
    }

    pub fn print_coverage(&self, report: &CoverageReport) {
        println!(
            "{} (canonical: {}, {} keys)",
            "CATALOG COVERAGE".bold().cyan(),
            report.canonical_locale,
            report.total_keys
        );
        for locale in &report.locales {
            let percent = format!("{:5.1}%", locale.coverage_percent);
            let percent = if locale.missing.is_empty() {
                percent.green()
            } else {
                percent.red()
            };
            println!("  {:6} {}  {} present", locale.locale.bold(), percent, locale.present);
            for key in &locale.missing {
                println!("    {} {}", "-".red(), key);
            }
            for key in &locale.extra {
                println!("    {} {}", "+".blue(), key);
            }
        }
    }

    pub fn print_page(&self, page: &RenderedPage) {
        println!("{} {}", "PAGE".bold().cyan(), page.path);
        println!("  lang: {}", page.shell.lang);
        let nav: Vec<&str> = page.shell.nav.iter().map(|n| n.label.as_str()).collect();
        println!("  nav:  {}", nav.join(" | "));
        println!();

        match &page.page {
            PageModel::Home(home) => {
                println!("{}", home.hero.h1.bold());
                println!("{}", home.hero.p);
                println!("  value props: {}", home.value_props.items.len());
                println!("  testimonials: {}", home.testimonials.items.len());
            }
            PageModel::About(about) => {
                println!("{}", about.story_title.bold());
                for milestone in &about.milestones {
                    println!("  {}  {}", milestone.year.yellow(), milestone.text);
                }
            }
            PageModel::Programs(programs) => {
                println!("{}", programs.heading.bold());
                for item in &programs.items {
                    println!("  - {}", item.title);
                    for detail in &item.details {
                        println!("      {}: {}", detail.label, detail.value);
                    }
                }
            }
            PageModel::Blog(blog) => {
                println!("{}", blog.heading.bold());
                let tabs: Vec<String> = blog
                    .tabs
                    .iter()
                    .map(|tab| {
                        if tab.active {
                            format!("[{}]", tab.label)
                        } else {
                            tab.label.clone()
                        }
                    })
                    .collect();
                println!("  {}", tabs.join("  "));
                for post in &blog.posts {
                    println!(
                        "  {} {} ({}, {})",
                        post.date_display.dimmed(),
                        post.title,
                        post.category,
                        post.read_time
                    );
                }
            }
            PageModel::BlogPost(post) => {
                println!("{}", post.meta_title.bold());
                println!(
                    "  {} • {} • {}",
                    post.post.category, post.post.date_display, post.post.read_time
                );
                println!("  {}", post.post.excerpt);
                println!("  {} {}", post.back_label, post.back_href.dimmed());
            }
            PageModel::CaseStudies(cases) => {
                println!("{}", cases.heading.bold());
                for item in &cases.items {
                    println!("  - {} ({})", item.client, item.results.len());
                }
            }
            PageModel::Contact(contact) => {
                println!("{}", contact.heading.bold());
                for field in &contact.fields {
                    println!("  {}", field.label);
                }
            }
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

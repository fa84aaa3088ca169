// SPDX-License-Identifier: PMPL-1.0-or-later

//! origen-site: locale resolution, message catalogs and static paths for the
//! Origen Travel website
//!
//! Inspect how a locale resolves, look up messages, enumerate the paths the
//! site pre-renders, render page models and export them, and check catalog
//! health.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use origen_site::config::SiteConfig;
use origen_site::content::CategoryFilter;
use origen_site::i18n::{coverage_report, resolve, resolve_route, CatalogStore, LocaleContext};
use origen_site::pages::{self, RenderOptions};
use origen_site::report::{self, LookupResult, OutputFormat, ReportOutputFormat, Resolution};
use origen_site::{diagnostics, paths, storage};
use serde_json::Value;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "origen-site")]
#[command(version)]
#[command(about = "Locale resolution, message catalogs and static paths for the Origen Travel site")]
#[command(long_about = None)]
struct Cli {
    /// Site config file (default: ./site.yaml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a candidate locale code
    Resolve {
        /// Candidate code, e.g. from a URL segment
        #[arg(value_name = "CANDIDATE")]
        candidate: Option<String>,

        /// Use routing semantics: an unsupported candidate is not-found
        #[arg(long)]
        route: bool,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Look up a message key for a locale
    Lookup {
        /// Candidate locale; unsupported codes resolve to the default
        #[arg(value_name = "LOCALE")]
        locale: String,

        /// Dotted key path, e.g. blogPage.labels.read
        #[arg(value_name = "KEY")]
        key: String,

        /// Placeholder argument, NAME=VALUE (repeatable)
        #[arg(short, long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,

        /// Text to use when the key is missing
        #[arg(short, long)]
        default: Option<String>,

        /// Print the structured value at KEY instead of text
        #[arg(long)]
        raw: bool,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List every path the site pre-renders
    Paths {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Build the page model for a site path
    Render {
        /// Request path, e.g. /en/blog/trip-a
        #[arg(value_name = "PATH")]
        path: String,

        /// Active blog tab (all, trends, edu, corp)
        #[arg(long, default_value = "all")]
        category: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Report keys missing from each locale's catalog
    Coverage {
        /// Exit with an error when any locale is incomplete
        #[arg(long)]
        strict: bool,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write every page model to disk with a manifest
    Export {
        /// Output directory (default: output_dir from config)
        #[arg(short, long)]
        out: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = ReportOutputFormat::Json)]
        format: ReportOutputFormat,
    },

    /// Check configuration and catalogs
    Doctor,
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info,origen_site=info",
        2 => "info,origen_site=debug",
        _ => "debug,origen_site=trace",
    };
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    } else {
        EnvFilter::new(fallback)
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_store(config: &SiteConfig) -> Result<CatalogStore> {
    let registry = config.registry().context("invalid locale configuration")?;
    CatalogStore::load_all(registry, &config.messages_dir).with_context(|| {
        format!(
            "loading message catalogs from {}",
            config.messages_dir.display()
        )
    })
}

fn parse_params(params: &[String]) -> Result<Vec<(String, String)>> {
    params
        .iter()
        .map(|param| {
            param
                .split_once('=')
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .ok_or_else(|| anyhow!("parameter '{}' is not NAME=VALUE", param))
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SiteConfig::discover(cli.config.as_deref()).context("loading site config")?;

    match cli.command {
        Commands::Resolve {
            candidate,
            route,
            format,
        } => {
            let registry = config.registry().context("invalid locale configuration")?;
            let locale = if route {
                resolve_route(&registry, candidate.as_deref())?
            } else {
                resolve(&registry, candidate.as_deref())
            };
            let resolution = Resolution {
                fell_back: candidate.as_deref() != Some(locale.as_str()),
                candidate,
                locale: locale.to_string(),
            };
            report::emit(format, &resolution, |f| f.print_resolution(&resolution))?;
        }

        Commands::Lookup {
            locale,
            key,
            params,
            default,
            raw,
            format,
        } => {
            let store = load_store(&config)?;
            let ctx = LocaleContext::for_candidate(&store, Some(&locale));
            let messages = ctx.messages();

            if raw {
                let value: Value = messages
                    .raw(&key)
                    .found()
                    .ok_or_else(|| anyhow!("no value at '{}' for locale {}", key, ctx.locale()))?;
                let document = format.document().unwrap_or(ReportOutputFormat::Json);
                println!("{}", document.serialize(&value)?);
            } else {
                let params = parse_params(&params)?;
                let args: Vec<(&str, &str)> = params
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str()))
                    .collect();
                let result = LookupResult {
                    locale: ctx.locale().to_string(),
                    found: messages.text(&key).is_some(),
                    text: messages.format(&key, &args, default.as_deref()),
                    key,
                };
                report::emit(format, &result, |f| f.print_lookup(&result))?;
            }
        }

        Commands::Paths { format } => {
            let store = load_store(&config)?;
            let locales = paths::locale_params(store.registry());
            let site = paths::site_paths(&store, &config.posts_section);
            let document = serde_json::json!({
                "locales": locales,
                "blog_posts": paths::blog_post_params(&store, &config.posts_section),
                "paths": site,
            });
            report::emit(format, &document, |f| f.print_paths(&locales, &site))?;
        }

        Commands::Render {
            path,
            category,
            format,
        } => {
            let store = load_store(&config)?;
            let options = RenderOptions {
                category: CategoryFilter::parse(&category),
                ..RenderOptions::new(config.posts_section.clone())
            };
            let page = pages::render(&store, &path, &options)
                .with_context(|| format!("not found: {}", path))?;
            report::emit(format, &page, |f| f.print_page(&page))?;
        }

        Commands::Coverage { strict, format } => {
            let store = load_store(&config)?;
            let coverage = coverage_report(&store);
            report::emit(format, &coverage, |f| f.print_coverage(&coverage))?;
            if strict && !coverage.is_complete() {
                return Err(anyhow!("catalog coverage is incomplete"));
            }
        }

        Commands::Export { out, format } => {
            let store = load_store(&config)?;
            let directory = out.unwrap_or_else(|| config.output_dir.clone());
            let options = RenderOptions::new(config.posts_section.clone());
            let manifest = storage::export_site(&store, &options, &directory, format)?;
            println!(
                "Exported {} pages to {} ({} skipped)",
                manifest.pages.len(),
                directory.display(),
                manifest.skipped.len()
            );
        }

        Commands::Doctor => {
            diagnostics::run_doctor(&config)?;
        }
    }

    Ok(())
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Structured content records stored inside message catalogs
//!
//! Records are read-only and defined entirely by the catalog documents.
//! Every field is defaulted on deserialization so one incomplete record
//! renders with blanks instead of dropping its whole section; a record that
//! is not an object at all is skipped by [`records`]. Blog post text fields
//! also accept `null` and scalars, since a post that [`crate::paths::slugs`]
//! enumerates must still be found when its page renders.

use crate::i18n::Lookup;
use crate::types::Locale;
use chrono::{DateTime, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Blog category as stored in the catalog. Unknown values are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlogCategory {
    Trends,
    Edu,
    Corp,
    Other(String),
}

impl BlogCategory {
    pub fn as_str(&self) -> &str {
        match self {
            BlogCategory::Trends => "trends",
            BlogCategory::Edu => "edu",
            BlogCategory::Corp => "corp",
            BlogCategory::Other(other) => other,
        }
    }

    /// Categories that get their own tab, in tab order.
    pub fn tabs() -> [BlogCategory; 3] {
        [BlogCategory::Trends, BlogCategory::Edu, BlogCategory::Corp]
    }
}

impl Default for BlogCategory {
    fn default() -> Self {
        BlogCategory::Other(String::new())
    }
}

impl From<String> for BlogCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "trends" => BlogCategory::Trends,
            "edu" => BlogCategory::Edu,
            "corp" => BlogCategory::Corp,
            _ => BlogCategory::Other(value),
        }
    }
}

impl From<BlogCategory> for String {
    fn from(category: BlogCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for BlogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active tab on the blog index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(BlogCategory),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "all" => CategoryFilter::All,
            other => CategoryFilter::Only(BlogCategory::from(other.to_string())),
        }
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &post.category == category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(deserialize_with = "lenient_text")]
    pub slug: String,
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub excerpt: String,
    #[serde(deserialize_with = "lenient_category")]
    pub category: BlogCategory,
    /// ISO-like date, `2025-10-13` or `2025/10/13`.
    #[serde(deserialize_with = "lenient_text")]
    pub date: String,
    /// Minutes as written in the catalog: `5`, `4.5` and `"5"` are all kept.
    #[serde(deserialize_with = "lenient_text")]
    pub read_time: String,
    #[serde(deserialize_with = "lenient_text")]
    pub image_alt: String,
}

impl BlogPost {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgramItem {
    pub key: String,
    pub title: String,
    pub desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseStudyItem {
    pub client: String,
    pub role: String,
    pub image_alt: String,
    pub quote: String,
    pub results: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    pub year: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub quote: String,
}

/// Text form of a scalar; `null`, objects and arrays read as empty.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

fn lenient_category<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BlogCategory, D::Error> {
    lenient_text(deserializer).map(BlogCategory::from)
}

/// Coalesce a raw section into records, skipping entries of the wrong shape.
///
/// A missing section, or one that is not a list, becomes an empty list.
pub fn records<T: DeserializeOwned>(section: Lookup<Vec<Value>>) -> Vec<T> {
    section
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match T::deserialize(&value) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping malformed content record");
                None
            }
        })
        .collect()
}

/// Find a post by slug. Empty slugs never match.
pub fn find_post<'a>(posts: &'a [BlogPost], slug: &str) -> Option<&'a BlogPost> {
    if slug.is_empty() {
        return None;
    }
    posts.iter().find(|post| post.slug == slug)
}

/// Parse `YYYY-MM-DD`, `YYYY/MM/DD`, or an RFC 3339 timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y/%m/%d"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Numeric date as the site shows it for `locale`.
///
/// Thai dates use the Buddhist era (Gregorian year + 543), day first.
/// English is month first; anything else falls back to ISO order.
pub fn format_date(date: NaiveDate, locale: &Locale) -> String {
    use chrono::Datelike;
    match locale.language() {
        "th" => format!("{}/{}/{}", date.day(), date.month(), date.year() + 543),
        "en" => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        _ => date.format("%Y-%m-%d").to_string(),
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key path lookups against a loaded catalog.
//!
//! Keys are dotted paths: `"blogPage.labels.read"`. A numeric segment
//! indexes into an array (`"footer.packages.0"`). A path is *missing* only
//! when it does not exist in the tree; `""` and `"0"` are ordinary values.
//!
//! Text lookups never fail: a missing key yields the caller's default, or
//! the full key path so the gap is visible on the page. Raw lookups return
//! a [`Lookup`] and leave the fallback to the call site.

use crate::i18n::catalog::Catalog;
use crate::types::Locale;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Result of a typed raw lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    /// The key path does not exist.
    Missing,
    /// The key path exists but its value has a different shape.
    Mismatch(String),
}

impl<T> Lookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Missing | Lookup::Mismatch(_) => None,
        }
    }
}

impl<T: Default> Lookup<T> {
    /// Coalesce a missing or mismatched section to an empty value.
    pub fn unwrap_or_default(self) -> T {
        self.found().unwrap_or_default()
    }
}

/// Walk `key` through `root`. Any step through a non-container is missing.
pub fn resolve_path<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    if key.is_empty() {
        return None;
    }
    let mut node = root;
    for segment in key.split('.') {
        if segment.is_empty() {
            return None;
        }
        node = match node {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

/// Single-pass `{name}` interpolation.
///
/// Positional placeholders are names too: `{0}` matches `("0", ..)`.
/// Tokens without a matching argument and unclosed braces are kept as-is.
/// Substituted values are never re-scanned.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    if args.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(|c: char| c == '}' || c == '{') {
            Some(close) if after.as_bytes()[close] == b'}' => {
                let token = &after[..close];
                match args.iter().find(|(name, _)| *name == token) {
                    Some((_, value)) => result.push_str(value),
                    None => {
                        result.push('{');
                        result.push_str(token);
                        result.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                // no closing brace before the next opening one
                result.push('{');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

/// Render a scalar leaf as text. Containers have no text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Accessor over one catalog, optionally scoped to a namespace.
#[derive(Debug, Clone, Copy)]
pub struct Messages<'a> {
    catalog: &'a Catalog,
    namespace: Option<&'a str>,
}

impl<'a> Messages<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            namespace: None,
        }
    }

    /// Accessor whose keys are relative to `namespace` (e.g. `"blogPage"`).
    ///
    /// Scopes do not nest; the new namespace replaces the current one.
    pub fn scope(&self, namespace: &'a str) -> Self {
        Self {
            catalog: self.catalog,
            namespace: Some(namespace),
        }
    }

    pub fn locale(&self) -> &'a Locale {
        self.catalog.locale()
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Absolute key path for a key relative to this accessor.
    pub fn full_key(&self, key: &str) -> String {
        match self.namespace {
            Some(ns) => format!("{}.{}", ns, key),
            None => key.to_string(),
        }
    }

    /// The value at `key`, whatever its shape.
    pub fn value(&self, key: &str) -> Option<&'a Value> {
        resolve_path(self.catalog.root(), &self.full_key(key))
    }

    /// Structural presence check; falsy values count as present.
    pub fn has(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Text at `key` without any fallback.
    pub fn text(&self, key: &str) -> Option<String> {
        self.value(key).and_then(scalar_text)
    }

    /// Translate `key`, falling back to the key path itself.
    pub fn t(&self, key: &str) -> String {
        self.format(key, &[], None)
    }

    /// Translate `key`, falling back to `default`.
    pub fn t_or(&self, key: &str, default: &str) -> String {
        self.format(key, &[], Some(default))
    }

    /// Translate `key` with placeholder arguments.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.format(key, args, None)
    }

    /// Translate `key` with arguments and an optional caller default.
    ///
    /// The default is interpolated with the same arguments.
    pub fn format(&self, key: &str, args: &[(&str, &str)], default: Option<&str>) -> String {
        if let Some(template) = self.text(key) {
            return interpolate(&template, args);
        }

        let full_key = self.full_key(key);
        tracing::debug!(
            locale = %self.catalog.locale(),
            key = %full_key,
            "message missing, using fallback"
        );
        match default {
            Some(default) => interpolate(default, args),
            None => full_key,
        }
    }

    /// Typed raw access to structured content.
    pub fn raw<T: DeserializeOwned>(&self, key: &str) -> Lookup<T> {
        let Some(value) = self.value(key) else {
            return Lookup::Missing;
        };
        match T::deserialize(value) {
            Ok(parsed) => Lookup::Found(parsed),
            Err(err) => {
                tracing::warn!(
                    locale = %self.catalog.locale(),
                    key = %self.full_key(key),
                    error = %err,
                    "catalog value has unexpected shape"
                );
                Lookup::Mismatch(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::from_value(
            Locale::new("en"),
            json!({
                "blogPage": {
                    "heading": "Blog / Insights",
                    "labels": { "all": "All", "empty": "", "zero": "0" },
                    "posts": [ { "slug": "trip-a" } ]
                },
                "greeting": "Hello, {name}!",
                "ordinal": "{0} of {1}",
                "footer": { "packages": [["Japan", "Korea"], ["Vietnam"]] },
                "stats": { "countries": 12, "licensed": true, "nothing": null }
            }),
        )
        .unwrap()
    }

    #[test]
    fn resolves_nested_strings() {
        let catalog = catalog();
        let m = Messages::new(&catalog);
        assert_eq!(m.t("blogPage.heading"), "Blog / Insights");
        assert_eq!(m.scope("blogPage").t("labels.all"), "All");
    }

    #[test]
    fn missing_key_falls_back_to_key_path() {
        let catalog = catalog();
        let m = Messages::new(&catalog);
        assert_eq!(m.t("blogPage.labels.read"), "blogPage.labels.read");
        assert_eq!(m.scope("blogPage").t("labels.read"), "blogPage.labels.read");
    }

    #[test]
    fn missing_key_uses_caller_default() {
        let catalog = catalog();
        let m = Messages::new(&catalog).scope("blogPage");
        assert_eq!(m.t_or("labels.read", "min read"), "min read");
    }

    #[test]
    fn falsy_values_are_present() {
        let catalog = catalog();
        let m = Messages::new(&catalog).scope("blogPage");
        assert!(m.has("labels.empty"));
        assert_eq!(m.t_or("labels.empty", "fallback"), "");
        assert_eq!(m.t_or("labels.zero", "fallback"), "0");
    }

    #[test]
    fn path_through_string_is_missing() {
        let catalog = catalog();
        let m = Messages::new(&catalog);
        assert!(!m.has("blogPage.heading.text"));
        assert_eq!(m.t_or("blogPage.heading.text", "x"), "x");
    }

    #[test]
    fn malformed_paths_are_missing() {
        let catalog = catalog();
        let m = Messages::new(&catalog);
        assert!(!m.has(""));
        assert!(!m.has("blogPage..heading"));
        assert!(!m.has("blogPage."));
    }

    #[test]
    fn numeric_segments_index_arrays() {
        let catalog = catalog();
        let m = Messages::new(&catalog);
        assert_eq!(m.t("footer.packages.0.1"), "Korea");
        assert!(!m.has("footer.packages.5"));
        assert!(!m.has("footer.packages.first"));
    }

    #[test]
    fn scalar_leaves_render_as_text() {
        let catalog = catalog();
        let m = Messages::new(&catalog).scope("stats");
        assert_eq!(m.t("countries"), "12");
        assert_eq!(m.t("licensed"), "true");
        assert!(m.has("nothing"));
        assert_eq!(m.t_or("nothing", "n/a"), "n/a");
    }

    #[test]
    fn containers_have_no_text_form() {
        let catalog = catalog();
        let m = Messages::new(&catalog);
        assert_eq!(m.t_or("blogPage.labels", "labels"), "labels");
    }

    #[test]
    fn named_and_positional_interpolation() {
        let catalog = catalog();
        let m = Messages::new(&catalog);
        assert_eq!(m.t_with("greeting", &[("name", "Somchai")]), "Hello, Somchai!");
        assert_eq!(m.t_with("ordinal", &[("0", "2"), ("1", "5")]), "2 of 5");
    }

    #[test]
    fn default_is_interpolated_too() {
        let catalog = catalog();
        let m = Messages::new(&catalog);
        assert_eq!(
            m.format("missing", &[("n", "3")], Some("{n} min read")),
            "3 min read"
        );
    }

    #[test]
    fn interpolation_edge_cases() {
        assert_eq!(interpolate("Hello {world", &[("world", "x")]), "Hello {world");
        assert_eq!(interpolate("{a} {b}", &[("a", "1")]), "1 {b}");
        assert_eq!(interpolate("{x} and {x}", &[("x", "A")]), "A and A");
        assert_eq!(interpolate("{{x}", &[("x", "A")]), "{A");
        assert_eq!(interpolate("{x}", &[("x", "{x}")]), "{x}");
        assert_eq!(interpolate("ราคา {price} บาท", &[("price", "1,200")]), "ราคา 1,200 บาท");
    }

    #[test]
    fn raw_lookup_outcomes() {
        let catalog = catalog();
        let m = Messages::new(&catalog);
        let packages: Lookup<Vec<Vec<String>>> = m.raw("footer.packages");
        assert_eq!(packages.unwrap_or_default().len(), 2);

        let missing: Lookup<Vec<String>> = m.raw("caseStudies.items");
        assert_eq!(missing, Lookup::Missing);
        assert!(missing.unwrap_or_default().is_empty());

        let wrong: Lookup<Vec<String>> = m.raw("blogPage.heading");
        assert!(matches!(wrong, Lookup::Mismatch(_)));
    }

    #[test]
    fn repeated_lookups_are_identical() {
        let catalog = catalog();
        let m = Messages::new(&catalog);
        let first = m.t_with("greeting", &[("name", "A")]);
        let second = m.t_with("greeting", &[("name", "A")]);
        assert_eq!(first, second);
    }
}

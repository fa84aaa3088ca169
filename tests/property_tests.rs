// SPDX-License-Identifier: PMPL-1.0-or-later

//! Property tests for locale resolution, interpolation and path enumeration

use origen_site::i18n::{interpolate, resolve, resolve_route, LocaleRegistry};
use origen_site::paths;
use origen_site::types::Locale;
use proptest::prelude::*;
use serde_json::json;

fn registry() -> LocaleRegistry {
    LocaleRegistry::default()
}

proptest! {
    #[test]
    fn resolution_always_lands_in_the_supported_set(candidate in "\\PC{0,12}") {
        let registry = registry();
        let locale = resolve(&registry, Some(&candidate));
        prop_assert!(registry.is_supported(locale.as_str()));
    }

    #[test]
    fn resolution_is_idempotent(candidate in "[a-z]{0,3}") {
        let registry = registry();
        let once = resolve(&registry, Some(&candidate)).clone();
        let twice = resolve(&registry, Some(once.as_str()));
        prop_assert_eq!(&once, twice);
    }

    #[test]
    fn route_and_lookup_forms_agree_on_supported_codes(candidate in "(th|en|fr|ja|)") {
        let registry = registry();
        match resolve_route(&registry, Some(&candidate)) {
            Ok(locale) => prop_assert_eq!(locale, resolve(&registry, Some(&candidate))),
            Err(_) => prop_assert_eq!(resolve(&registry, Some(&candidate)).as_str(), "th"),
        }
    }

    #[test]
    fn interpolation_without_placeholders_is_identity(text in "[^{}]{0,40}") {
        prop_assert_eq!(interpolate(&text, &[("name", "x")]), text);
    }

    #[test]
    fn interpolation_substitutes_every_occurrence(
        prefix in "[a-z ]{0,10}",
        value in "[A-Za-z0-9 ]{0,10}",
        repeats in 1usize..4,
    ) {
        let template = format!("{}{{name}}", prefix).repeat(repeats);
        let expected = format!("{}{}", prefix, value).repeat(repeats);
        prop_assert_eq!(interpolate(&template, &[("name", value.as_str())]), expected);
    }

    #[test]
    fn substituted_values_are_not_rescanned(value in "\\{[a-z]{1,6}\\}") {
        let out = interpolate("{a}-{b}", &[("a", value.as_str()), ("b", "B")]);
        prop_assert_eq!(out, format!("{}-B", value));
    }

    #[test]
    fn cross_product_is_locale_major_and_complete(
        slugs in proptest::collection::vec("[a-z]{1,6}", 0..6),
    ) {
        let section: Vec<serde_json::Value> = slugs.iter().map(|s| json!({"slug": s})).collect();
        let unique = paths::slugs(&section);
        let locales = vec![Locale::new("th"), Locale::new("en")];
        let pairs = paths::cross_product(&locales, &unique);

        prop_assert_eq!(pairs.len(), locales.len() * unique.len());
        for (index, pair) in pairs.iter().enumerate() {
            let expected_locale = &locales[index / unique.len().max(1)];
            prop_assert_eq!(&pair.locale, expected_locale);
            prop_assert_eq!(pair.slug.as_deref(), Some(unique[index % unique.len()].as_str()));
        }
    }
}

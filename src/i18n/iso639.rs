// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language metadata for the language selector.
//!
//! Only the languages the site is likely to ship (our markets are Thailand
//! and the wider Asia region) are listed. Lookups take the primary language
//! subtag, so `"zh-CN"` resolves through `"zh"`.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

use crate::types::Locale;

/// `(code, English name, native name)`
const LANGUAGES: &[(&str, &str, &str)] = &[
    ("th", "Thai", "ไทย"),
    ("en", "English", "English"),
    ("ja", "Japanese", "日本語"),
    ("zh", "Chinese", "中文"),
    ("ko", "Korean", "한국어"),
    ("vi", "Vietnamese", "Tiếng Việt"),
    ("lo", "Lao", "ລາວ"),
    ("km", "Khmer", "ខ្មែរ"),
    ("my", "Burmese", "မြန်မာ"),
    ("ms", "Malay", "Bahasa Melayu"),
    ("id", "Indonesian", "Bahasa Indonesia"),
    ("tl", "Tagalog", "Tagalog"),
    ("hi", "Hindi", "हिन्दी"),
    ("ar", "Arabic", "العربية"),
    ("fr", "French", "Français"),
    ("de", "German", "Deutsch"),
    ("es", "Spanish", "Español"),
    ("it", "Italian", "Italiano"),
    ("pt", "Portuguese", "Português"),
    ("nl", "Dutch", "Nederlands"),
    ("ru", "Russian", "Русский"),
];

fn entry(locale: &Locale) -> Option<&'static (&'static str, &'static str, &'static str)> {
    let language = locale.language();
    LANGUAGES.iter().find(|(code, _, _)| *code == language)
}

/// Whether the locale's primary subtag is a language we have names for.
pub fn is_known_language(locale: &Locale) -> bool {
    entry(locale).is_some()
}

/// English name of the locale's language, e.g. `"Thai"`.
pub fn language_name(locale: &Locale) -> Option<&'static str> {
    entry(locale).map(|(_, english, _)| *english)
}

/// Name of the locale's language written in that language, e.g. `"ไทย"`.
pub fn native_name(locale: &Locale) -> Option<&'static str> {
    entry(locale).map(|(_, _, native)| *native)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_languages_known() {
        assert!(is_known_language(&Locale::new("th")));
        assert!(is_known_language(&Locale::new("en")));
        assert!(!is_known_language(&Locale::new("xx")));
    }

    #[test]
    fn names_use_primary_subtag() {
        assert_eq!(native_name(&Locale::new("zh-CN")), Some("中文"));
        assert_eq!(language_name(&Locale::new("th")), Some("Thai"));
        assert_eq!(native_name(&Locale::new("th")), Some("ไทย"));
        assert_eq!(native_name(&Locale::new("qq")), None);
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = LANGUAGES.iter().map(|(code, _, _)| *code).collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }
}

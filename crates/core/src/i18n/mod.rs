//! Translation lookup.
//!
//! Strings are resolved from the requested language's table, then from the
//! English table, then the key itself is returned. Lookup never fails.

mod en;
mod hi;

use crate::types::LanguageCode;

/// Language used when no other is chosen, and the fallback for missing keys.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Languages with a translation table: `(code, native name)`.
pub const SUPPORTED_LANGUAGES: [(&str, &str); 2] = [("en", "English"), ("hi", "हिंदी")];

fn table(language: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match language {
        "en" => Some(en::TABLE),
        "hi" => Some(hi::TABLE),
        _ => None,
    }
}

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Translate `key` into `language`.
///
/// ```
/// use sherise_core::translate;
///
/// assert_eq!(translate("en", "navHealth"), "Health");
/// assert_eq!(translate("xx", "navHealth"), "Health");
/// assert_eq!(translate("xx", "nonexistentKey"), "nonexistentKey");
/// ```
#[must_use]
pub fn translate<'a>(language: &str, key: &'a str) -> &'a str {
    table(language)
        .and_then(|t| lookup(t, key))
        .or_else(|| lookup(en::TABLE, key))
        .unwrap_or(key)
}

/// Whether `key` has text of its own in `language`, without falling back.
#[must_use]
pub fn has_translation(language: &str, key: &str) -> bool {
    table(language).is_some_and(|t| lookup(t, key).is_some())
}

/// Whether `language` has its own translation table.
#[must_use]
pub fn is_supported(language: &str) -> bool {
    table(language).is_some()
}

/// Translation lookup bound to one language, for use in templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    language: LanguageCode,
}

impl Translator {
    #[must_use]
    pub const fn new(language: LanguageCode) -> Self {
        Self { language }
    }

    #[must_use]
    pub const fn language(&self) -> &LanguageCode {
        &self.language
    }

    /// Translate `key` into this translator's language.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language.as_str(), key)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(LanguageCode::english())
    }
}

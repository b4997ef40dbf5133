//! Display languages and the language sent along with each exchange.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::table::resolve;
use crate::ui::Style;

/// Display languages offered by the language picker: (code, name).
///
/// Only `en` and `hi` have translation tables and are sent to the backend;
/// the others fall back to English strings.
pub const DISPLAY_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("hi", "हिन्दी (Hindi)"),
    ("bn", "বাংলা (Bengali)"),
    ("te", "తెలుగు (Telugu)"),
    ("ta", "தமிழ் (Tamil)"),
    ("mr", "मराठी (Marathi)"),
    ("gu", "ગુજરાતી (Gujarati)"),
    ("kn", "ಕನ್ನಡ (Kannada)"),
    ("ml", "മലയാളം (Malayalam)"),
    ("pa", "ਪੰਜਾਬੀ (Punjabi)"),
    ("or", "ଓଡ଼ିଆ (Odia)"),
    ("as", "অসমীয়া (Assamese)"),
    ("ur", "اردو (Urdu)"),
];

/// Language of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// Parses a language tag, coercing anything unrecognized to the default.
    pub fn coerce(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "hi" => Self::Hi,
            _ => Self::En,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// Looks up a UI string in this language.
    pub fn t(self, key: &str) -> String {
        resolve(self.code(), key)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Prints the display languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Display languages"));
    for (code, name) in DISPLAY_LANGUAGES {
        let note = if matches!(*code, "en" | "hi") {
            String::new()
        } else {
            Style::secondary(" (falls back to English)")
        };
        println!("  {:3} {}{note}", Style::code(code), name);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_known_tags() {
        assert_eq!(Language::coerce("en"), Language::En);
        assert_eq!(Language::coerce("hi"), Language::Hi);
        assert_eq!(Language::coerce(" HI "), Language::Hi);
    }

    #[test]
    fn test_coerce_unknown_tags_to_default() {
        assert_eq!(Language::coerce("bn"), Language::En);
        assert_eq!(Language::coerce(""), Language::En);
        assert_eq!(Language::coerce("klingon"), Language::En);
    }

    #[test]
    fn test_serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Language::Hi).unwrap(), "\"hi\"");
        assert_eq!(Language::En.to_string(), "en");
    }

    #[test]
    fn test_t_uses_language_table() {
        assert_eq!(Language::En.t("send"), "Send");
        assert_eq!(Language::Hi.t("send"), "भेजें");
    }
}

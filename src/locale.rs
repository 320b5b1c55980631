//! Minimal locale model for deriving default separators.
//!
//! Only the language/region pair matters here: it selects the decimal and
//! grouping separator a field uses unless the configuration overrides them.

use std::fmt;
use std::str::FromStr;

/// A language tag such as `en-US` or `ru-RU`, reduced to the parts that
/// influence numeric formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

/// Error returned by the strict [`FromStr`] parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLocaleTag(String);

impl fmt::Display for InvalidLocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed locale tag {:?}", self.0)
    }
}

impl std::error::Error for InvalidLocaleTag {}

impl Locale {
    /// Builds a locale from a tag, falling back to the default locale when
    /// the tag is malformed or empty. Unknown but well-formed tags are kept
    /// and resolve to the default separator pair.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    /// The language subtag, lowercase.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The region subtag, uppercase, if present.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Default decimal separator for this locale.
    pub fn decimal_separator(&self) -> char {
        self.separators().0
    }

    /// Default grouping separator for this locale.
    pub fn grouping_separator(&self) -> char {
        self.separators().1
    }

    fn separators(&self) -> (char, char) {
        match (self.language.as_str(), self.region.as_deref()) {
            ("fr", Some("CA")) => ('.', ' '),
            ("fr" | "ru" | "sv", _) => (',', ' '),
            ("da" | "de" | "es" | "it" | "nl" | "pt", _) => (',', '.'),
            _ => ('.', ','),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            language: "en".to_string(),
            region: Some("US".to_string()),
        }
    }
}

impl FromStr for Locale {
    type Err = InvalidLocaleTag;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.split(['-', '_']);
        let language = match parts.next() {
            Some(lang) if !lang.is_empty() && lang.chars().all(|c| c.is_ascii_alphabetic()) => {
                lang.to_ascii_lowercase()
            }
            _ => return Err(InvalidLocaleTag(s.to_string())),
        };
        let region = match parts.next() {
            None => None,
            Some(reg) if !reg.is_empty() && reg.chars().all(|c| c.is_ascii_alphanumeric()) => {
                Some(reg.to_ascii_uppercase())
            }
            Some(_) => return Err(InvalidLocaleTag(s.to_string())),
        };
        Ok(Locale { language, region })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_separator_pairs() {
        let cases = [
            ("en-US", '.', ','),
            ("en-NG", '.', ','),
            ("da-DK", ',', '.'),
            ("fr-CA", '.', ' '),
            ("fr-FR", ',', ' '),
            ("ru-RU", ',', ' '),
            ("de-DE", ',', '.'),
        ];
        for (tag, decimal, grouping) in cases {
            let locale = Locale::from_tag(tag);
            assert_eq!(locale.decimal_separator(), decimal, "decimal for {tag}");
            assert_eq!(locale.grouping_separator(), grouping, "grouping for {tag}");
        }
    }

    #[test]
    fn test_case_and_underscore_normalization() {
        let locale: Locale = "RU_ru".parse().unwrap();
        assert_eq!(locale.language(), "ru");
        assert_eq!(locale.region(), Some("RU"));
        assert_eq!(locale.to_string(), "ru-RU");
    }

    #[test]
    fn test_unknown_language_gets_default_pair() {
        let locale = Locale::from_tag("eo");
        assert_eq!(locale.decimal_separator(), '.');
        assert_eq!(locale.grouping_separator(), ',');
    }

    #[test]
    fn test_malformed_tag_falls_back_to_default() {
        assert_eq!(Locale::from_tag(""), Locale::default());
        assert_eq!(Locale::from_tag("12-34"), Locale::default());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default_is_en_us() {
        let locale = Locale::default();
        assert_eq!(locale.to_string(), "en-US");
        assert_eq!(locale.decimal_separator(), '.');
    }
}

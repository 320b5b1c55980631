//! Immutable formatting configuration.
//!
//! A `FormatConfig` is a snapshot: option setters on the field layer build a
//! new config with `with_*` and swap it in wholesale, they never mutate a
//! live one.

use crate::error::{FormatterError, Result};
use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// Formatting rules for one currency field.
///
/// # Invariants
///
/// - `decimal_separator` differs from `grouping_separator` whenever grouping
///   is enabled; constructors and `with_*` builders enforce this with
///   [`FormatterError::SeparatorClash`].
/// - `max_decimal_places == 0` disables decimal entry entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Character dividing integer and fractional digits.
    pub decimal_separator: char,

    /// Character inserted every three integer digits; `None` disables
    /// grouping.
    pub grouping_separator: Option<char>,

    /// Literal leading text the field content always starts with; empty
    /// string means no prefix.
    pub currency_prefix: String,

    /// Maximum number of fractional digits kept in the field.
    pub max_decimal_places: u32,

    /// Whether a leading minus sign may be entered.
    pub negative_allowed: bool,

    /// Pad the fractional part with trailing zeros up to
    /// `max_decimal_places` when rendering a committed value.
    pub zero_pad_decimals: bool,

    /// Render a canonical zero as the empty string instead of `"0"`.
    pub empty_means_zero: bool,
}

impl FormatConfig {
    /// Creates a config with the given separator pair and all other options
    /// at their defaults.
    pub fn new(decimal_separator: char, grouping_separator: Option<char>) -> Result<Self> {
        let config = FormatConfig {
            decimal_separator,
            grouping_separator,
            ..FormatConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Derives the separator pair from a locale's numeric conventions.
    pub fn from_locale(locale: &Locale) -> Self {
        FormatConfig {
            decimal_separator: locale.decimal_separator(),
            grouping_separator: Some(locale.grouping_separator()),
            ..FormatConfig::default()
        }
    }

    /// Replaces the decimal separator.
    pub fn with_decimal_separator(mut self, separator: char) -> Result<Self> {
        self.decimal_separator = separator;
        self.validate()?;
        Ok(self)
    }

    /// Replaces the grouping separator; `None` disables grouping.
    pub fn with_grouping_separator(mut self, separator: Option<char>) -> Result<Self> {
        self.grouping_separator = separator;
        self.validate()?;
        Ok(self)
    }

    /// Replaces the literal currency prefix.
    pub fn with_currency_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.currency_prefix = prefix.into();
        self
    }

    /// Sets the prefix from a currency symbol, applying the trailing-space
    /// convention: `"$"` becomes the prefix `"$ "`, a blank symbol clears
    /// the prefix.
    pub fn with_currency_symbol(self, symbol: &str) -> Self {
        let prefix = if symbol.trim().is_empty() {
            String::new()
        } else {
            format!("{symbol} ")
        };
        self.with_currency_prefix(prefix)
    }

    /// Replaces the maximum number of decimal places; `0` disables decimal
    /// entry.
    pub fn with_max_decimal_places(mut self, places: u32) -> Self {
        self.max_decimal_places = places;
        self
    }

    /// Allows or forbids negative values.
    pub fn with_negative_allowed(mut self, allowed: bool) -> Self {
        self.negative_allowed = allowed;
        self
    }

    /// Enables or disables zero padding of the fractional part.
    pub fn with_zero_pad_decimals(mut self, pad: bool) -> Self {
        self.zero_pad_decimals = pad;
        self
    }

    /// Renders canonical zero as the empty string when enabled.
    pub fn with_empty_means_zero(mut self, empty: bool) -> Self {
        self.empty_means_zero = empty;
        self
    }

    /// Number of characters in the currency prefix.
    pub fn prefix_len(&self) -> usize {
        self.currency_prefix.chars().count()
    }

    fn validate(&self) -> Result<()> {
        if self.grouping_separator == Some(self.decimal_separator) {
            return Err(FormatterError::SeparatorClash(self.decimal_separator));
        }
        Ok(())
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            decimal_separator: '.',
            grouping_separator: Some(','),
            currency_prefix: String::new(),
            max_decimal_places: 2,
            negative_allowed: false,
            zero_pad_decimals: false,
            empty_means_zero: false,
        }
    }
}

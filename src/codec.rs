//! Pure conversions between display strings and canonical values.
//!
//! `format` and `parse` are side-effect free. `format(parse(text))` need not
//! reproduce `text` (formatting canonicalizes), but `parse(format(v)) == v`
//! holds for every value representable within the configured number of
//! decimal places.

use crate::config::FormatConfig;
use crate::value::MoneyValue;
use std::str::FromStr;

/// Renders a canonical value as field content: prefix, sign, grouped integer
/// part, and the fractional part scaled to the configured precision.
///
/// With `zero_pad_decimals` the fraction always has exactly
/// `max_decimal_places` digits; otherwise trailing zeros are trimmed and a
/// zero fraction is omitted. With `empty_means_zero` a zero value renders as
/// the empty string.
pub fn format(value: &MoneyValue, config: &FormatConfig) -> String {
    if config.empty_means_zero && value.is_zero() {
        return String::new();
    }

    let scaled = value.floor_to_places(config.max_decimal_places);
    let negative = scaled.is_negative() && config.negative_allowed;
    let plain = scaled.abs().inner().to_string();
    let (int_digits, frac_digits) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (plain.as_str(), ""),
    };

    let mut fraction = String::from(frac_digits);
    if config.max_decimal_places == 0 {
        fraction.clear();
    } else if config.zero_pad_decimals {
        while fraction.len() < config.max_decimal_places as usize {
            fraction.push('0');
        }
    } else {
        while fraction.ends_with('0') {
            fraction.pop();
        }
    }

    let mut out = String::with_capacity(config.currency_prefix.len() + plain.len() + 8);
    out.push_str(&config.currency_prefix);
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_digits, config.grouping_separator));
    if !fraction.is_empty() {
        out.push(config.decimal_separator);
        out.push_str(&fraction);
    }
    out
}

/// Parses field content back into a canonical value.
///
/// Strips the prefix and grouping separators, maps the configured decimal
/// separator to `.`, and drops every other character. Malformed input
/// coerces to zero instead of failing so that every intermediate keystroke
/// state stays parseable.
pub fn parse(text: &str, config: &FormatConfig) -> MoneyValue {
    let mut stripped = if config.currency_prefix.is_empty() {
        text.to_string()
    } else {
        text.replace(&config.currency_prefix, "")
    };
    if let Some(grouping) = config.grouping_separator {
        stripped.retain(|c| c != grouping);
    }

    let mut negative = false;
    let mut int_digits = String::new();
    let mut frac_digits = String::new();
    let mut seen_separator = false;
    for ch in stripped.chars() {
        if ch == config.decimal_separator {
            seen_separator = true;
        } else if ch.is_ascii_digit() {
            if seen_separator {
                frac_digits.push(ch);
            } else {
                int_digits.push(ch);
            }
        } else if ch == '-' && int_digits.is_empty() && frac_digits.is_empty() && !seen_separator {
            negative = !negative;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return MoneyValue::ZERO;
    }

    let mut canonical = String::with_capacity(int_digits.len() + frac_digits.len() + 2);
    if negative {
        canonical.push('-');
    }
    canonical.push_str(if int_digits.is_empty() { "0" } else { &int_digits });
    if !frac_digits.is_empty() {
        canonical.push('.');
        canonical.push_str(&frac_digits);
    }

    // Values beyond Decimal range still coerce to zero, same as any other
    // unparseable input.
    MoneyValue::from_str(&canonical).unwrap_or(MoneyValue::ZERO)
}

/// Inserts the grouping separator at every 3-digit boundary, right to left.
fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_string();
    };
    let count = digits.chars().count();
    let mut out = String::with_capacity(count + count / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (count - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

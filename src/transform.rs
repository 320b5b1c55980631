//! Incremental edit transformation engine.
//!
//! One call per keystroke: the field adapter hands over the previous text,
//! the raw text after the edit, the inserted fragment, and the edit cursor;
//! the transform returns the normalized display text and the new cursor.
//! Each call is a pure function of `(config, event)`, no state is kept
//! between edits.
//!
//! All positions are character offsets, not byte offsets: prefixes and
//! separators may be multi-byte UTF-8.

use crate::config::FormatConfig;

/// One atomic edit as reported by the field adapter.
#[derive(Debug, Clone)]
pub struct EditEvent {
    /// Field content before the edit.
    pub old_text: String,

    /// Raw field content after the edit, before normalization.
    pub new_text: String,

    /// The inserted fragment; empty for deletions.
    pub inserted: String,

    /// Cursor offset in `new_text`, in characters, just past the inserted
    /// fragment (or at the deletion point).
    pub edit_position: usize,
}

impl EditEvent {
    /// Convenience constructor.
    pub fn new(
        old_text: impl Into<String>,
        new_text: impl Into<String>,
        inserted: impl Into<String>,
        edit_position: usize,
    ) -> Self {
        EditEvent {
            old_text: old_text.into(),
            new_text: new_text.into(),
            inserted: inserted.into(),
            edit_position,
        }
    }
}

/// Result of one transformation: the replacement text and cursor offset the
/// field adapter should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Normalized display text.
    pub text: String,

    /// Cursor offset in `text`, in characters, always within
    /// `[prefix_len, text_len]`.
    pub cursor: usize,
}

/// The transformation engine for one configuration snapshot.
///
/// Replacing any option means building a new `EditTransform`; a live one is
/// never reconfigured.
#[derive(Debug, Clone)]
pub struct EditTransform {
    config: FormatConfig,
}

impl EditTransform {
    /// Creates an engine for the given configuration.
    pub fn new(config: FormatConfig) -> Self {
        EditTransform { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Applies one edit, producing the next display text and cursor.
    ///
    /// After every call the result starts with the currency prefix, contains
    /// at most one decimal separator, keeps the fraction within
    /// `max_decimal_places`, carries a sign only under odd minus parity with
    /// negatives allowed, and has grouping separators at exactly the 3-digit
    /// boundaries of the integer part.
    pub fn apply(&self, event: &EditEvent) -> EditOutcome {
        let config = &self.config;
        let prefix: Vec<char> = config.currency_prefix.chars().collect();
        let mut chars: Vec<char> = event.new_text.chars().collect();
        let mut cursor = event.edit_position.min(chars.len());

        self.normalize_decimal_key(event, &mut chars, &mut cursor);
        let sign = self.extract_sign(&prefix, &mut chars, &mut cursor);
        reassert_prefix(&prefix, &mut chars);
        collapse_decimal_separators(config.decimal_separator, &mut chars, &mut cursor);

        // Everything that is neither a digit nor the decimal separator is
        // dropped here: the prefix, grouping separators, pasted letters.
        let filtered: Vec<char> = chars
            .iter()
            .copied()
            .filter(|&c| c.is_ascii_digit() || c == config.decimal_separator)
            .collect();

        // Translate the cursor into grouping-free coordinates. Separators
        // inside the prefix are excluded, the prefix is not regrouped.
        if let Some(grouping) = config.grouping_separator {
            let before_cursor = chars[..cursor.min(chars.len())]
                .iter()
                .filter(|&&c| c == grouping)
                .count();
            let in_prefix = prefix.iter().filter(|&&c| c == grouping).count();
            cursor = cursor - before_cursor + in_prefix;
        }

        let separator_index = filtered.iter().position(|&c| c == config.decimal_separator);
        let mut has_separator = separator_index.is_some();
        let (mut int_digits, mut frac_digits): (Vec<char>, Vec<char>) = match separator_index {
            Some(i) => (filtered[..i].to_vec(), filtered[i + 1..].to_vec()),
            None => (filtered, Vec::new()),
        };

        if config.max_decimal_places == 0 {
            has_separator = false;
            frac_digits.clear();
        } else {
            frac_digits.truncate(config.max_decimal_places as usize);
            if config.zero_pad_decimals && !frac_digits.is_empty() {
                while frac_digits.len() < config.max_decimal_places as usize {
                    frac_digits.push('0');
                }
            }
        }

        // A bare separator gets a zero integer part, "." becomes "0.".
        if int_digits.is_empty() && has_separator {
            int_digits.push('0');
            cursor += 1;
        }

        let sign_len = usize::from(sign);
        let mut grouped = int_digits.clone();
        if let Some(grouping) = config.grouping_separator {
            let base = prefix.len() + sign_len;
            let mut boundary = int_digits.len();
            while boundary > 3 {
                boundary -= 3;
                grouped.insert(boundary, grouping);
                if cursor.checked_sub(base).is_some_and(|c| boundary < c) {
                    cursor += 1;
                }
            }
        }

        let mut result: Vec<char> =
            Vec::with_capacity(prefix.len() + sign_len + grouped.len() + 1 + frac_digits.len());
        result.extend_from_slice(&prefix);
        if sign {
            result.push('-');
        }
        result.extend_from_slice(&grouped);
        if has_separator {
            result.push(config.decimal_separator);
            result.extend_from_slice(&frac_digits);
        }

        let cursor = cursor.min(result.len()).max(prefix.len());
        EditOutcome {
            text: result.into_iter().collect(),
            cursor,
        }
    }

    /// Step 1: an inserted literal `,` or `.` that differs from the
    /// configured separator is replaced in place; with decimals disabled the
    /// inserted character is deleted instead.
    fn normalize_decimal_key(&self, event: &EditEvent, chars: &mut Vec<char>, cursor: &mut usize) {
        let config = &self.config;
        let mut inserted = event.inserted.chars();
        let (Some(key), None) = (inserted.next(), inserted.next()) else {
            return;
        };
        if key != ',' && key != '.' {
            return;
        }
        let at = match cursor.checked_sub(1) {
            Some(at) if chars.get(at) == Some(&key) => at,
            _ => return,
        };
        if config.max_decimal_places == 0 {
            chars.remove(at);
            *cursor -= 1;
        } else if key != config.decimal_separator {
            chars[at] = config.decimal_separator;
        }
    }

    /// Step 2: minus parity. With negatives allowed exactly one minus keeps
    /// a leading sign and a second press cancels it; otherwise every minus
    /// is stripped. Returns whether a sign survives.
    fn extract_sign(&self, prefix: &[char], chars: &mut Vec<char>, cursor: &mut usize) -> bool {
        let minus_count = chars.iter().filter(|&&c| c == '-').count();
        if minus_count == 0 {
            return false;
        }
        let sign = self.config.negative_allowed && minus_count == 1;
        if self.config.negative_allowed {
            if minus_count > 1 && *cursor > prefix.len() {
                *cursor = cursor.saturating_sub(2);
            }
        } else {
            let removed_before = chars[..*cursor].iter().filter(|&&c| c == '-').count();
            *cursor -= removed_before;
        }
        chars.retain(|&c| c != '-');
        sign
    }
}

/// Step 3: a result that lost (part of) its prefix has the damaged leading
/// characters stripped and the full prefix restored.
fn reassert_prefix(prefix: &[char], chars: &mut Vec<char>) {
    if prefix.is_empty() || chars.starts_with(prefix) {
        return;
    }
    let damaged = chars.iter().take_while(|&c| prefix.contains(c)).count();
    let mut rebuilt = prefix.to_vec();
    rebuilt.extend_from_slice(&chars[damaged..]);
    *chars = rebuilt;
}

/// Step 4: only the last decimal separator survives; typing a second one
/// relocates the separator to the new position.
fn collapse_decimal_separators(separator: char, chars: &mut Vec<char>, cursor: &mut usize) {
    let positions: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == separator)
        .map(|(i, _)| i)
        .collect();
    let Some((_, earlier)) = positions.split_last() else {
        return;
    };
    let removed_before = earlier.iter().filter(|&&p| p < *cursor).count();
    for &position in earlier.iter().rev() {
        chars.remove(position);
    }
    *cursor -= removed_before;
}

//! Caller-facing field layer.
//!
//! `CurrencyField` owns what the engine needs between keystrokes: the active
//! configuration (as an [`EditTransform`]), the current text/cursor
//! snapshot, the validator, and the listeners. It holds no reference to the
//! UI widget; text and cursor travel as plain values in both directions.

use crate::codec;
use crate::config::FormatConfig;
use crate::error::Result;
use crate::locale::Locale;
use crate::notify::{ChangeNotifier, ValidationState, Validator, ValueListener};
use crate::transform::{EditEvent, EditOutcome, EditTransform};
use crate::value::MoneyValue;

/// One currency input field.
///
/// Every configuration setter replaces the config wholesale (building a new
/// transform) and re-renders the display text from the current canonical
/// value. Setters must not be called from inside a change-notification
/// callback.
#[derive(Debug)]
pub struct CurrencyField {
    transform: EditTransform,
    text: String,
    cursor: usize,
    notifier: ChangeNotifier,
    validation: ValidationState,
    editing: bool,
}

impl CurrencyField {
    /// Creates a field showing just the currency prefix.
    pub fn new(config: FormatConfig) -> Self {
        let text = config.currency_prefix.clone();
        let cursor = config.prefix_len();
        CurrencyField {
            transform: EditTransform::new(config),
            text,
            cursor,
            notifier: ChangeNotifier::new(),
            validation: ValidationState::Ok,
            editing: false,
        }
    }

    /// Handles one raw edit from the field adapter and returns the
    /// replacement text and cursor to render.
    ///
    /// Re-entrant calls made while a transformation is in flight, and echoes
    /// of the engine's own write-back (unchanged text, nothing inserted),
    /// return the current snapshot without transforming or notifying again.
    pub fn on_edit(
        &mut self,
        old_text: &str,
        new_text: &str,
        inserted: &str,
        edit_position: usize,
    ) -> EditOutcome {
        if self.editing || (inserted.is_empty() && new_text == self.text) {
            return self.snapshot();
        }
        self.editing = true;
        let event = EditEvent::new(old_text, new_text, inserted, edit_position);
        let outcome = self.transform.apply(&event);
        self.text = outcome.text.clone();
        self.cursor = outcome.cursor;
        let value = codec::parse(&self.text, self.transform.config());
        self.validation = self.notifier.notify(&value);
        self.editing = false;
        outcome
    }

    /// Renders a committed value, placing the cursor at the end, and
    /// notifies listeners.
    pub fn set_value(&mut self, value: MoneyValue) -> &str {
        self.text = codec::format(&value, self.transform.config());
        self.cursor = self.text.chars().count();
        self.validation = self.notifier.notify(&value);
        &self.text
    }

    /// Replaces the whole configuration and re-renders the current canonical
    /// value under the new rules. Listeners are not notified, the value is
    /// unchanged.
    pub fn set_config(&mut self, config: FormatConfig) -> &str {
        let value = self.value();
        self.transform = EditTransform::new(config);
        self.text = codec::format(&value, self.transform.config());
        self.cursor = self.text.chars().count();
        &self.text
    }

    /// Derives both separators from a locale, keeping every other option.
    pub fn set_locale(&mut self, locale: &Locale) -> &str {
        let config = FormatConfig {
            decimal_separator: locale.decimal_separator(),
            grouping_separator: Some(locale.grouping_separator()),
            ..self.config().clone()
        };
        self.set_config(config)
    }

    /// Replaces the decimal separator. On a separator clash the previous
    /// configuration stays active.
    pub fn set_decimal_separator(&mut self, separator: char) -> Result<&str> {
        let config = self.config().clone().with_decimal_separator(separator)?;
        Ok(self.set_config(config))
    }

    /// Replaces the grouping separator (`None` disables grouping). On a
    /// separator clash the previous configuration stays active.
    pub fn set_grouping_separator(&mut self, separator: Option<char>) -> Result<&str> {
        let config = self.config().clone().with_grouping_separator(separator)?;
        Ok(self.set_config(config))
    }

    /// Sets the prefix from a currency symbol (trailing-space convention).
    pub fn set_currency_symbol(&mut self, symbol: &str) -> &str {
        let config = self.config().clone().with_currency_symbol(symbol);
        self.set_config(config)
    }

    /// Sets the literal currency prefix.
    pub fn set_currency_prefix(&mut self, prefix: impl Into<String>) -> &str {
        let config = self.config().clone().with_currency_prefix(prefix);
        self.set_config(config)
    }

    /// Sets the maximum number of decimal places; `0` disables decimal
    /// entry.
    pub fn set_max_decimal_places(&mut self, places: u32) -> &str {
        let config = self.config().clone().with_max_decimal_places(places);
        self.set_config(config)
    }

    /// Allows or forbids negative values.
    pub fn set_negative_allowed(&mut self, allowed: bool) -> &str {
        let config = self.config().clone().with_negative_allowed(allowed);
        self.set_config(config)
    }

    /// Enables or disables zero padding of the fractional part.
    pub fn set_zero_pad_decimals(&mut self, pad: bool) -> &str {
        let config = self.config().clone().with_zero_pad_decimals(pad);
        self.set_config(config)
    }

    /// Renders canonical zero as the empty string when enabled.
    pub fn set_empty_means_zero(&mut self, empty: bool) -> &str {
        let config = self.config().clone().with_empty_means_zero(empty);
        self.set_config(config)
    }

    /// Installs or clears the validator; it runs on the next change.
    pub fn set_validator(&mut self, validator: Option<Validator>) {
        self.notifier.set_validator(validator);
    }

    /// Registers a value-change listener.
    pub fn subscribe(&mut self, listener: ValueListener) {
        self.notifier.subscribe(listener);
    }

    /// The canonical value of the current text.
    pub fn value(&self) -> MoneyValue {
        codec::parse(&self.text, self.transform.config())
    }

    /// Current display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current cursor offset, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Validation state computed at the last change.
    pub fn validation_state(&self) -> &ValidationState {
        &self.validation
    }

    /// The active configuration.
    pub fn config(&self) -> &FormatConfig {
        self.transform.config()
    }

    fn snapshot(&self) -> EditOutcome {
        EditOutcome {
            text: self.text.clone(),
            cursor: self.cursor,
        }
    }
}

impl Default for CurrencyField {
    fn default() -> Self {
        CurrencyField::new(FormatConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::str::FromStr;

    fn dollars() -> CurrencyField {
        CurrencyField::new(FormatConfig::default().with_currency_symbol("$"))
    }

    fn money(s: &str) -> MoneyValue {
        MoneyValue::from_str(s).unwrap()
    }

    #[test]
    fn test_new_field_shows_prefix() {
        let field = dollars();
        assert_eq!(field.text(), "$ ");
        assert_eq!(field.cursor(), 2);
        assert!(field.value().is_zero());
    }

    #[test]
    fn test_on_edit_updates_snapshot_and_value() {
        let mut field = dollars();
        let out = field.on_edit("$ ", "$ 5", "5", 3);
        assert_eq!(out.text, "$ 5");
        assert_eq!(field.text(), "$ 5");
        assert_eq!(field.value(), money("5"));
    }

    #[test]
    fn test_on_edit_notifies_listeners() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let mut field = dollars();
        {
            let seen = Rc::clone(&seen);
            field.subscribe(Box::new(move |value, _| {
                seen.borrow_mut().push(value.to_string());
            }));
        }

        field.on_edit("$ ", "$ 5", "5", 3);
        field.on_edit("$ 5", "$ 50", "0", 4);
        assert_eq!(*seen.borrow(), vec!["5".to_string(), "50".to_string()]);
    }

    #[test]
    fn test_write_back_echo_does_not_renotify() {
        let count: Rc<RefCell<usize>> = Rc::default();
        let mut field = dollars();
        {
            let count = Rc::clone(&count);
            field.subscribe(Box::new(move |_, _| *count.borrow_mut() += 1));
        }

        let out = field.on_edit("$ ", "$ 5", "5", 3);
        // The adapter re-delivers the rendered text as a fresh event.
        let echo = field.on_edit(&out.text, &out.text, "", out.cursor);
        assert_eq!(echo, out);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_validator_state_tracked_per_edit() {
        let mut field = dollars();
        field.set_validator(Some(Box::new(|value: &MoneyValue| {
            if value.inner() > money("100").inner() {
                Some("too large".to_string())
            } else {
                None
            }
        })));

        field.on_edit("$ ", "$ 50", "50", 4);
        assert!(field.validation_state().is_ok());

        field.on_edit("$ 50", "$ 500", "0", 5);
        assert_eq!(field.validation_state().error_message(), Some("too large"));
    }

    #[test]
    fn test_set_value_renders_with_cursor_at_end() {
        let mut field = dollars();
        assert_eq!(field.set_value(money("1234.5")), "$ 1,234.5");
        assert_eq!(field.cursor(), 9);
    }

    #[test]
    fn test_setter_rerenders_from_current_value() {
        let mut field = dollars();
        field.set_value(money("1234.56"));

        assert_eq!(field.set_max_decimal_places(1), "$ 1,234.5");
        assert_eq!(field.set_currency_symbol("€"), "€ 1,234.5");
        let text = field.set_locale(&Locale::from_tag("ru-RU"));
        assert_eq!(text, "€ 1 234,5");
    }

    #[test]
    fn test_failed_setter_keeps_previous_config() {
        let mut field = dollars();
        field.set_value(money("1000"));

        assert!(field.set_decimal_separator(',').is_err());
        assert_eq!(field.config().decimal_separator, '.');
        assert_eq!(field.text(), "$ 1,000");
    }

    #[test]
    fn test_empty_means_zero_renders_empty() {
        let mut field = dollars();
        field.set_value(MoneyValue::ZERO);
        assert_eq!(field.text(), "$ 0");

        assert_eq!(field.set_empty_means_zero(true), "");
        assert!(field.value().is_zero());
    }

    #[test]
    fn test_negative_value_survives_config_change() {
        let mut field = CurrencyField::new(
            FormatConfig::default()
                .with_currency_symbol("$")
                .with_negative_allowed(true),
        );
        field.set_value(money("-12255"));
        assert_eq!(field.text(), "$ -12,255");
        assert_eq!(field.set_max_decimal_places(0), "$ -12,255");
        assert_eq!(field.value(), money("-12255"));
    }
}

//! Change notification and validation state.
//!
//! After each transformation the field layer decodes the canonical value,
//! runs the externally supplied validator, and delivers the result to every
//! registered listener synchronously, on the same call stack as the edit.

use crate::value::MoneyValue;
use std::fmt;

/// Outcome of applying the external validator to a canonical value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationState {
    /// The value passed validation (or no validator is installed).
    #[default]
    Ok,
    /// The validator rejected the value with a message for the UI to render.
    Error(String),
}

impl ValidationState {
    /// Returns `true` for [`ValidationState::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationState::Ok)
    }

    /// The error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ValidationState::Ok => None,
            ValidationState::Error(message) => Some(message),
        }
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationState::Ok => write!(f, "ok"),
            ValidationState::Error(message) => write!(f, "error: {message}"),
        }
    }
}

/// User-supplied validation function: `None` means the value is acceptable,
/// `Some(message)` is surfaced as [`ValidationState::Error`].
pub type Validator = Box<dyn Fn(&MoneyValue) -> Option<String>>;

/// Listener invoked with the canonical value and its validation state after
/// every change.
pub type ValueListener = Box<dyn FnMut(&MoneyValue, &ValidationState)>;

/// Synchronous dispatcher for value changes.
#[derive(Default)]
pub struct ChangeNotifier {
    validator: Option<Validator>,
    listeners: Vec<ValueListener>,
}

impl ChangeNotifier {
    /// Creates a notifier with no validator and no listeners.
    pub fn new() -> Self {
        ChangeNotifier::default()
    }

    /// Installs or clears the validator.
    pub fn set_validator(&mut self, validator: Option<Validator>) {
        self.validator = validator;
    }

    /// Registers a listener; listeners are invoked in registration order.
    pub fn subscribe(&mut self, listener: ValueListener) {
        self.listeners.push(listener);
    }

    /// Validates `value` and delivers it to every listener. Returns the
    /// computed state so the caller can retain it as field state.
    pub fn notify(&mut self, value: &MoneyValue) -> ValidationState {
        let state = match &self.validator {
            Some(validator) => match validator(value) {
                Some(message) => ValidationState::Error(message),
                None => ValidationState::Ok,
            },
            None => ValidationState::Ok,
        };
        for listener in &mut self.listeners {
            listener(value, &state);
        }
        state
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("has_validator", &self.validator.is_some())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

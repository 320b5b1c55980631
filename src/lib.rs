//! # Currency Input
//!
//! A formatting engine for currency text fields that reformats the full
//! field content on every keystroke: grouping separators, decimal place
//! limits, currency prefix, sign handling, and cursor relocation.
//!
//! ## Design Principles
//!
//! - **Values in, values out**: the engine never holds a reference to the
//!   UI widget; each edit is a pure function of the previous state
//! - **Immutable configuration**: option setters swap in a fresh
//!   [`FormatConfig`] snapshot and re-render, nothing is mutated in place
//! - **Lenient parsing**: every intermediate keystroke state decodes to a
//!   canonical `rust_decimal` value, malformed text coerces to zero
//! - **Synchronous notification**: validators and listeners run on the same
//!   call stack as the edit
//!
//! ## Example
//!
//! ```
//! use currency_input::{CurrencyField, FormatConfig};
//!
//! let config = FormatConfig::default().with_currency_symbol("$");
//! let mut field = CurrencyField::new(config);
//!
//! let out = field.on_edit("$ ", "$ 1000", "1000", 6);
//! assert_eq!(out.text, "$ 1,000");
//! assert_eq!(field.value().to_string(), "1000");
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod field;
pub mod locale;
pub mod notify;
pub mod replay;
pub mod script;
pub mod transform;
pub mod value;

pub use config::FormatConfig;
pub use error::{FormatterError, Result};
pub use field::CurrencyField;
pub use locale::Locale;
pub use notify::{ChangeNotifier, ValidationState, Validator, ValueListener};
pub use replay::{FieldSnapshot, ReplayEngine};
pub use script::{ScriptOp, ScriptRecord};
pub use transform::{EditEvent, EditOutcome, EditTransform};
pub use value::MoneyValue;

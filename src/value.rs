//! Canonical decimal value backing the formatted field content.
//!
//! Uses `rust_decimal` internally so monetary values survive the
//! display/parse round trip without floating-point errors.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The numeric value a display string represents, independent of formatting.
///
/// Unlike the display text, a `MoneyValue` carries no prefix, grouping
/// separators, or locale-specific decimal separator. Display precision is a
/// configuration option, so scaling happens on demand via
/// [`MoneyValue::floor_to_places`] rather than at construction.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use currency_input::MoneyValue;
///
/// let amount = MoneyValue::from_str("1320.509").unwrap();
/// assert_eq!(amount.floor_to_places(2).to_string(), "1320.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct MoneyValue(Decimal);

impl MoneyValue {
    /// Zero value.
    pub const ZERO: Self = MoneyValue(Decimal::ZERO);

    /// Wraps a raw `Decimal`.
    pub fn new(value: Decimal) -> Self {
        MoneyValue(value)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` for values strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Scales to `places` fractional digits, rounding toward negative
    /// infinity: `-1.129` at two places becomes `-1.13`, `1.129` becomes
    /// `1.12`.
    pub fn floor_to_places(&self, places: u32) -> Self {
        MoneyValue(
            self.0
                .round_dp_with_strategy(places, RoundingStrategy::ToNegativeInfinity),
        )
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        MoneyValue(self.0.abs())
    }

    /// The wrapped `Decimal`.
    pub fn inner(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for MoneyValue {
    fn from(value: Decimal) -> Self {
        MoneyValue(value)
    }
}

impl FromStr for MoneyValue {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)?;
        Ok(MoneyValue(decimal))
    }
}

impl fmt::Display for MoneyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for MoneyValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for MoneyValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        MoneyValue::from_str(&s).map_err(serde::de::Error::custom)
    }
}

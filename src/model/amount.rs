//! Amount type for handling monetary values in currency minor units.
//!
//! This module provides the `Amount` type which represents a non-negative amount of money as an
//! integer count of the smallest unit of its currency (e.g. pence for GBP). Starling sends all
//! money this way, which keeps us out of floating-point arithmetic entirely.

use format_num::format_num;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// The currency Starling defaults to when a payload omits one.
const DEFAULT_CURRENCY: &str = "GBP";

/// Represents an amount of money as `{ currency, minorUnits }`.
///
/// `minor_units` is a non-negative integer by construction. Formatting is display-only; the value
/// is never converted to a float for arithmetic or comparison.
///
/// # Examples
///
/// ```
/// # use starling_waterfall::model::Amount;
/// let amount = Amount::gbp(123456);
/// assert_eq!(amount.to_string(), "£1,234.56");
/// assert_eq!(amount.minor_units(), 123456);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    /// The ISO 4217 currency code, e.g. "GBP".
    #[serde(default = "default_currency")]
    currency: String,
    /// The count of the smallest currency unit, e.g. pence.
    minor_units: u64,
}

impl Amount {
    /// Creates a new `Amount` in the given currency.
    pub fn new(currency: impl Into<String>, minor_units: u64) -> Self {
        Self {
            currency: currency.into(),
            minor_units,
        }
    }

    /// Creates a new `Amount` in the default currency, GBP.
    pub fn gbp(minor_units: u64) -> Self {
        Self::new(DEFAULT_CURRENCY, minor_units)
    }

    /// Returns the ISO 4217 currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the count of minor units.
    pub fn minor_units(&self) -> u64 {
        self.minor_units
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.minor_units == 0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::gbp(0)
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Major units with thousands separators and two decimal places, for display only.
        let major = format_num!(",.2", self.minor_units as f64 / 100.0);
        if self.currency == DEFAULT_CURRENCY {
            write!(f, "£{major}")
        } else {
            write!(f, "{} {major}", self.currency)
        }
    }
}

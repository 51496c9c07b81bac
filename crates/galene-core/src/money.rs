//! # Money Module
//!
//! Currency selection and display formatting.
//!
//! ## Why Decimal?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    8673 × 0.10 = 867.3000000000001  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    8673 × 0.10 = 867.3              exact, base-10                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display Rules
//! ```text
//! USD:  amount                 → round 2dp       → "$9540.30"
//! UGX:  amount × exchange_rate → round to whole  → "UGX 35,299,110"
//! ```
//!
//! Both use round-half-away-from-zero (`0.005 → 0.01`, `0.5 → 1`).
//!
//! ## Usage
//! ```rust
//! use galene_core::money::{format_currency, Currency};
//! use rust_decimal::Decimal;
//!
//! let rate = Decimal::from(3700);
//! let ugx = format_currency(Decimal::from(100), Currency::Ugx, rate).unwrap();
//! assert_eq!(ugx, "UGX 370,000");
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::pricing::saturating_mul;

/// Rounding applied to every displayed amount.
pub const DISPLAY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

// =============================================================================
// Currency
// =============================================================================

/// Display currency for a document.
///
/// Amounts are always held in USD; UGX is a display conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar, the base unit of every amount.
    Usd,
    /// Ugandan shilling, converted at the session exchange rate.
    #[default]
    Ugx,
}

impl Currency {
    /// Returns the ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Ugx => "UGX",
        }
    }

    /// Returns the prefix placed before formatted amounts.
    pub const fn prefix(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Ugx => "UGX ",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a currency code is not USD or UGX.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported currency: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "UGX" => Ok(Currency::Ugx),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a USD amount for display in `currency`.
///
/// ## Rules
/// - USD: `"$"` + amount at exactly 2 decimal places. `exchange_rate` is
///   not inspected.
/// - UGX: amount × `exchange_rate` (saturating at `Decimal::MAX`), rounded
///   to a whole shilling, grouped with `,` separators.
///
/// ## Errors
/// [`CoreError::InvalidExchangeRate`] when converting to UGX with a rate
/// that is zero or negative.
///
/// ## Example
/// ```rust
/// use galene_core::money::{format_currency, Currency};
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::new(95403, 1); // 9540.3
/// let rate = Decimal::from(3700);
/// assert_eq!(format_currency(amount, Currency::Usd, rate).unwrap(), "$9540.30");
/// assert!(format_currency(amount, Currency::Ugx, Decimal::ZERO).is_err());
/// ```
pub fn format_currency(amount: Decimal, currency: Currency, exchange_rate: Decimal) -> CoreResult<String> {
    match currency {
        Currency::Usd => Ok(format_usd(amount)),
        Currency::Ugx => {
            if exchange_rate <= Decimal::ZERO {
                return Err(CoreError::InvalidExchangeRate(exchange_rate));
            }
            Ok(format_ugx(saturating_mul(amount, exchange_rate)))
        }
    }
}

/// Formats a unit price for the items table.
///
/// USD prices carry the `$` symbol. In UGX mode the price column shows the
/// base amount at 2 decimals without a symbol, while line totals are
/// converted.
pub fn format_unit_price(price: Decimal, currency: Currency) -> String {
    match currency {
        Currency::Usd => format_usd(price),
        Currency::Ugx => fixed_2dp(price),
    }
}

fn format_usd(amount: Decimal) -> String {
    let fixed = fixed_2dp(amount.abs());
    format!("{}${}", sign(amount, 2), fixed)
}

fn format_ugx(shillings: Decimal) -> String {
    let mut whole = shillings.abs().round_dp_with_strategy(0, DISPLAY_ROUNDING);
    whole.rescale(0);
    format!("{}UGX {}", sign(shillings, 0), group_thousands(&whole.to_string()))
}

/// Rounds to exactly two decimal places, keeping trailing zeros.
fn fixed_2dp(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, DISPLAY_ROUNDING);
    rounded.rescale(2);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}

/// Returns `"-"` when `amount` is still negative after display rounding.
fn sign(amount: Decimal, dp: u32) -> &'static str {
    let rounded = amount.round_dp_with_strategy(dp, DISPLAY_ROUNDING);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    }
}

/// Inserts `,` every three digits from the right of an unsigned digit string.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

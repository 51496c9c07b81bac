//! # Coercion Module
//!
//! Turns raw form text into numbers without ever failing.
//!
//! ## Coercion Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Form Field → Number                                │
//! │                                                                         │
//! │  "800"        ──► 800                                                   │
//! │  "  12.50 "   ──► 12.50        (surrounding whitespace ignored)         │
//! │  "18%"        ──► 18           (longest numeric prefix wins)            │
//! │  ".5"         ──► 0.5                                                   │
//! │  "abc", ""    ──► 0            (never an error, never blocks input)     │
//! │                                                                         │
//! │  Prices additionally clamp to >= 0.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use galene_core::coerce::{coerce_price, parse_number};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(parse_number("18%"), Decimal::from(18));
//! assert_eq!(coerce_price("-5"), Decimal::ZERO);
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

// =============================================================================
// Generic Parsing
// =============================================================================

/// Parses the longest leading numeric prefix of `raw`.
///
/// Accepts `[+-]?digits[.digits]` (either side of the point may be empty,
/// but not both). Anything that does not start with a number yields zero.
pub fn parse_number(raw: &str) -> Decimal {
    let text = raw.trim();
    let Some(normalized) = numeric_prefix(text) else {
        if !text.is_empty() {
            debug!(input = %text, "non-numeric input coerced to 0");
        }
        return Decimal::ZERO;
    };

    match Decimal::from_str(&normalized) {
        Ok(value) => value,
        Err(err) => {
            // Only reachable for values outside Decimal's 28-digit range
            debug!(input = %text, error = %err, "numeric input out of range, coerced to 0");
            Decimal::ZERO
        }
    }
}

/// Extracts the numeric prefix in a form `Decimal::from_str` always accepts:
/// no leading `+`, and a `0` in front of a bare fractional part.
fn numeric_prefix(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_part = &text[int_start..pos];

    let mut frac_part = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_part = &text[frac_start..frac_end];
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(int_part.len() + frac_part.len() + 3);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_part);
    }
    Some(normalized)
}

// =============================================================================
// Field Coercions
// =============================================================================

/// Coerces a unit price. Prices are never negative.
pub fn coerce_price(raw: &str) -> Decimal {
    parse_number(raw).max(Decimal::ZERO)
}

/// Coerces a quantity. Zero is kept as typed; pricing treats it as one unit.
pub fn coerce_quantity(raw: &str) -> Decimal {
    parse_number(raw)
}

/// Coerces a whole-number percentage (`"18"` means 18%).
pub fn coerce_percent(raw: &str) -> Decimal {
    parse_number(raw)
}

/// Coerces an exchange rate (UGX per USD).
///
/// A zero or negative result is kept so the form shows what was typed;
/// the session decides whether it is usable.
pub fn coerce_rate(raw: &str) -> Decimal {
    parse_number(raw)
}

// =============================================================================
// Unit Tests
// =============================================================================

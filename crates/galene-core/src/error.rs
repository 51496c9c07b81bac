//! # Error Types
//!
//! Domain-specific error types for galene-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  galene-core errors (this file)                                        │
//! │  └── CoreError        - Formatting failures                            │
//! │                                                                         │
//! │  galene-rates errors (separate crate)                                  │
//! │  └── RateError        - Exchange-rate fetch failures                   │
//! │                                                                         │
//! │  docgen errors (in app)                                                │
//! │  └── AppError         - Config, I/O, event decoding                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Numeric input never produces an error here: bad text coerces to zero
//! (see [`crate::coerce`]). The only failure the core reports is a rate that
//! cannot be used for conversion.

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The exchange rate cannot convert amounts.
    ///
    /// ## When This Occurs
    /// - User typed `0` or a negative number into the rate field
    /// - Rate field text was not numeric (coerced to `0`)
    ///
    /// The caller decides what to do: the session clamps to the last
    /// known good rate and shows an inline warning.
    #[error("Invalid exchange rate: {0} (must be greater than zero)")]
    InvalidExchangeRate(Decimal),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

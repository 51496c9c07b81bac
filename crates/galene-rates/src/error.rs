//! # Rate Error Types
//!
//! Everything that can go wrong while refreshing the exchange rate.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Rate Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Transport     │  │    Response     │  │       Payload           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Transport      │  │  HttpStatus     │  │  MissingRate            │ │
//! │  │  (DNS, TLS,     │  │  (non-2xx)      │  │  InvalidRate            │ │
//! │  │   body decode)  │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. The session keeps its current rate and shows the
//! error text as an inline warning.

use thiserror::Error;

/// Result type alias for rate operations.
pub type RateResult<T> = Result<T, RateError>;

/// Exchange-rate refresh failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateError {
    /// Request could not be sent or the body could not be read as JSON.
    #[error("rate source unreachable: {0}")]
    Transport(String),

    /// Source answered with a non-success status code.
    #[error("rate source returned HTTP {0}")]
    HttpStatus(u16),

    /// Response has no numeric `rates.UGX` entry.
    #[error("rate source response has no UGX rate")]
    MissingRate,

    /// `rates.UGX` is present but zero, negative or not finite.
    #[error("rate source returned an unusable UGX rate: {0}")]
    InvalidRate(String),
}

impl From<reqwest::Error> for RateError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => RateError::HttpStatus(status.as_u16()),
            None => RateError::Transport(err.to_string()),
        }
    }
}

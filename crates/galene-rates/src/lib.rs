//! # galene-rates: Exchange-Rate Refresh for Galene Docs
//!
//! Fetches the UGX-per-USD rate used to display documents in shillings.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rate Refresh Flow                                │
//! │                                                                         │
//! │  ┌──────────────┐    ┌──────────────────┐    ┌──────────────────────┐  │
//! │  │ RatesConfig  │───►│  HttpRateSource  │───►│  extract_ugx_rate    │  │
//! │  │ (env / dflt) │    │  (reqwest GET)   │    │  rates.UGX > 0 ?     │  │
//! │  └──────────────┘    └──────────────────┘    └──────────┬───────────┘  │
//! │                                                          │              │
//! │                                                          ▼              │
//! │                                     Result<RateQuote, RateError>        │
//! │                                     (applied by the session owner)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`config`] - Endpoint configuration
//! - [`source`] - `RateSource` trait, HTTP implementation, payload parsing
//! - [`refresh`] - One-shot and background refresh
//! - [`error`] - `RateError`

pub mod config;
pub mod error;
pub mod refresh;
pub mod source;

pub use config::{RatesConfig, DEFAULT_RATES_URL};
pub use error::{RateError, RateResult};
pub use refresh::{refresh_rate, spawn_refresh};
pub use source::{extract_ugx_rate, HttpRateSource, RateSource};

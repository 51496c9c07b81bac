//! # Rate Sources
//!
//! The [`RateSource`] trait is the seam between the refresh logic and the
//! network. [`HttpRateSource`] is the production implementation; tests use
//! in-memory sources.
//!
//! ## Expected Payload
//! ```json
//! { "base": "USD", "rates": { "UGX": 3712.45, "KES": 129.1, ... } }
//! ```
//! Only `rates.UGX` is read. Everything else is ignored.

use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use crate::config::RatesConfig;
use crate::error::{RateError, RateResult};

// =============================================================================
// RateSource Trait
// =============================================================================

/// Something that can answer "what are today's USD rates?".
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &str;

    /// Fetches the raw USD-relative rate table.
    async fn fetch_usd_rates(&self) -> RateResult<Value>;
}

// =============================================================================
// HTTP Source
// =============================================================================

/// Fetches rates with a plain GET. No retry, and no timeout beyond the
/// client defaults.
#[derive(Debug, Clone)]
pub struct HttpRateSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRateSource {
    pub fn new(config: &RatesConfig) -> Self {
        HttpRateSource {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    fn name(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_usd_rates(&self) -> RateResult<Value> {
        debug!(endpoint = %self.endpoint, "GET exchange rates");
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::HttpStatus(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}

// =============================================================================
// Payload Parsing
// =============================================================================

/// Extracts the UGX-per-USD rate from a rate table.
///
/// ## Rules
/// - `rates.UGX` missing, or not a number → [`RateError::MissingRate`]
/// - zero, negative or not finite → [`RateError::InvalidRate`]
pub fn extract_ugx_rate(body: &Value) -> RateResult<Decimal> {
    let number = body
        .get("rates")
        .and_then(|rates| rates.get("UGX"))
        .and_then(Value::as_number)
        .ok_or(RateError::MissingRate)?;

    let text = number.to_string();
    let finite = number.as_f64().is_some_and(f64::is_finite);
    let rate = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .filter(|_| finite)
        .ok_or_else(|| RateError::InvalidRate(text.clone()))?;

    if rate <= Decimal::ZERO {
        return Err(RateError::InvalidRate(text));
    }
    Ok(rate.normalize())
}

// =============================================================================
// Unit Tests
// =============================================================================

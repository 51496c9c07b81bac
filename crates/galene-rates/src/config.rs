//! # Rate Source Configuration
//!
//! The endpoint must answer a GET with `{ "rates": { "UGX": ... } }`
//! relative to USD. The docgen app fills this from `GALENE_RATES_URL`.

use serde::{Deserialize, Serialize};

/// Public endpoint used when `GALENE_RATES_URL` is not set.
pub const DEFAULT_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// Where to fetch USD-relative rates from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesConfig {
    pub endpoint: String,
}

impl Default for RatesConfig {
    fn default() -> Self {
        RatesConfig {
            endpoint: DEFAULT_RATES_URL.to_string(),
        }
    }
}

impl RatesConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        RatesConfig {
            endpoint: endpoint.into(),
        }
    }
}

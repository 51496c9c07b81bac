//! # Configuration
//!
//! Startup configuration, loaded once from environment variables with
//! fallback to defaults.
//!
//! ## Environment Variables
//! | Variable                        | Default                      |
//! |---------------------------------|------------------------------|
//! | `GALENE_CURRENCY`               | `UGX`                        |
//! | `GALENE_EXCHANGE_RATE`          | `3700`                       |
//! | `GALENE_TAX_PERCENT`            | `18`                         |
//! | `GALENE_COMPANY_SHARE_PERCENT`  | `10`                         |
//! | `GALENE_REFRESH_RATE`           | `false`                      |
//! | `GALENE_RATES_URL`              | exchangerate-api USD table   |
//!
//! Unlike form input, configuration is strict: a malformed value stops
//! startup with [`ConfigError::InvalidValue`].

use std::str::FromStr;

use galene_core::{
    Currency, Session, DEFAULT_COMPANY_SHARE_PERCENT, DEFAULT_EXCHANGE_RATE, DEFAULT_TAX_PERCENT,
};
use galene_rates::RatesConfig;
use rust_decimal::Decimal;

/// Docgen configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocgenConfig {
    /// Display currency at session start.
    pub currency: Currency,

    /// Starting UGX-per-USD rate. Always positive.
    pub exchange_rate: Decimal,

    /// Default tax percentage for new documents.
    pub tax_percent: Decimal,

    /// Default company share percentage for new documents.
    pub company_share_percent: Decimal,

    /// Fetch a live rate before rendering.
    pub refresh_rate: bool,

    /// Rate source endpoint.
    pub rates: RatesConfig,
}

impl Default for DocgenConfig {
    fn default() -> Self {
        DocgenConfig {
            currency: Currency::default(),
            exchange_rate: Decimal::from(DEFAULT_EXCHANGE_RATE),
            tax_percent: Decimal::from(DEFAULT_TAX_PERCENT),
            company_share_percent: Decimal::from(DEFAULT_COMPANY_SHARE_PERCENT),
            refresh_rate: false,
            rates: RatesConfig::default(),
        }
    }
}

impl DocgenConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = DocgenConfig::default();

        if let Some(code) = get("GALENE_CURRENCY") {
            config.currency = code
                .parse()
                .map_err(|_| ConfigError::InvalidValue("GALENE_CURRENCY".to_string()))?;
        }

        if let Some(rate) = get("GALENE_EXCHANGE_RATE") {
            config.exchange_rate = parse_decimal("GALENE_EXCHANGE_RATE", &rate)?;
            if config.exchange_rate <= Decimal::ZERO {
                return Err(ConfigError::InvalidValue("GALENE_EXCHANGE_RATE".to_string()));
            }
        }

        if let Some(tax) = get("GALENE_TAX_PERCENT") {
            config.tax_percent = parse_decimal("GALENE_TAX_PERCENT", &tax)?;
        }

        if let Some(share) = get("GALENE_COMPANY_SHARE_PERCENT") {
            config.company_share_percent = parse_decimal("GALENE_COMPANY_SHARE_PERCENT", &share)?;
        }

        if let Some(flag) = get("GALENE_REFRESH_RATE") {
            config.refresh_rate = parse_bool("GALENE_REFRESH_RATE", &flag)?;
        }

        if let Some(url) = get("GALENE_RATES_URL") {
            config.rates = RatesConfig::new(url);
        }

        Ok(config)
    }

    /// Starts a session on `date` with these defaults applied.
    pub fn session(&self, date: chrono::NaiveDate) -> Session {
        let mut session = Session::new(date)
            .with_currency(self.currency)
            .with_exchange_rate(self.exchange_rate);
        session.document.additional_costs.tax_percent = self.tax_percent;
        session.document.additional_costs.company_share_percent = self.company_share_percent;
        session
    }
}

fn parse_decimal(name: &str, value: &str) -> Result<Decimal, ConfigError> {
    Decimal::from_str(value).map_err(|_| ConfigError::InvalidValue(name.to_string()))
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue(name.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<DocgenConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DocgenConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, DocgenConfig::default());
        assert_eq!(config.currency, Currency::Ugx);
        assert_eq!(config.exchange_rate, dec!(3700));
        assert!(!config.refresh_rate);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("GALENE_CURRENCY", "usd"),
            ("GALENE_EXCHANGE_RATE", "3650.75"),
            ("GALENE_TAX_PERCENT", "16"),
            ("GALENE_COMPANY_SHARE_PERCENT", "12.5"),
            ("GALENE_REFRESH_RATE", "yes"),
            ("GALENE_RATES_URL", "http://rates.local/usd"),
        ])
        .unwrap();

        assert_eq!(config.currency, Currency::Usd);
        assert_eq!(config.exchange_rate, dec!(3650.75));
        assert_eq!(config.tax_percent, dec!(16));
        assert_eq!(config.company_share_percent, dec!(12.5));
        assert!(config.refresh_rate);
        assert_eq!(config.rates.endpoint, "http://rates.local/usd");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = load(&[("GALENE_CURRENCY", "  "), ("GALENE_RATES_URL", "")]).unwrap();
        assert_eq!(config, DocgenConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            load(&[("GALENE_CURRENCY", "EUR")]),
            Err(ConfigError::InvalidValue("GALENE_CURRENCY".to_string()))
        );
        assert!(load(&[("GALENE_EXCHANGE_RATE", "0")]).is_err());
        assert!(load(&[("GALENE_EXCHANGE_RATE", "lots")]).is_err());
        assert!(load(&[("GALENE_TAX_PERCENT", "18%")]).is_err());
        assert!(load(&[("GALENE_REFRESH_RATE", "maybe")]).is_err());
    }

    #[test]
    fn test_session_uses_config() {
        let config = load(&[("GALENE_TAX_PERCENT", "0"), ("GALENE_COMPANY_SHARE_PERCENT", "0")]).unwrap();
        let session = config.session(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
        assert_eq!(session.document.additional_costs.tax_percent, Decimal::ZERO);
        assert_eq!(session.exchange_rate(), dec!(3700));
    }
}

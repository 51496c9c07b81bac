//! # galene-docgen Library
//!
//! Renders a Galene Docs quotation, invoice, receipt or letter as a
//! print-ready HTML page.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()            RUST_LOG or "info,galene=debug" → stderr  │
//! │  2. DocgenConfig::from_env()  GALENE_* variables                        │
//! │  3. spawn_refresh()           only when GALENE_REFRESH_RATE is set      │
//! │  4. read stdin                JSON array of FormEvent (optional)        │
//! │  5. Session::apply_all()      replay edits on the sample document       │
//! │  6. apply_rate_result()       refresh outcome → rate or inline warning  │
//! │  7. render_document()         HTML → stdout                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`config`] - Environment configuration
//! - [`error`] - `AppError`
//! - [`render`] - HTML rendering

pub mod config;
pub mod error;
pub mod render;

use std::io::{self, IsTerminal, Read, Write};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use galene_core::{FormEvent, RateQuote};
use galene_rates::{spawn_refresh, HttpRateSource, RateResult, RateSource};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use config::{ConfigError, DocgenConfig};
pub use error::{AppError, AppResult};
pub use render::render_document;

/// Runs one docgen invocation against the process environment, stdin and
/// stdout.
pub async fn run() -> AppResult<()> {
    init_tracing();

    let config = DocgenConfig::from_env()?;
    info!(
        currency = %config.currency,
        exchange_rate = %config.exchange_rate,
        refresh = config.refresh_rate,
        "Starting Galene docgen"
    );

    let refresh = config.refresh_rate.then(|| {
        let source: Arc<dyn RateSource> = Arc::new(HttpRateSource::new(&config.rates));
        spawn_refresh(source)
    });

    let stdin = io::stdin();
    let mut input = String::new();
    if !stdin.is_terminal() {
        stdin.lock().read_to_string(&mut input)?;
    }
    let events = parse_events(&input)?;

    let html = generate(&config, Local::now().date_naive(), events, refresh).await;

    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Decodes a JSON array of form events. Blank input means no edits.
pub fn parse_events(input: &str) -> AppResult<Vec<FormEvent>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(input)?)
}

/// Builds the session, replays `events`, applies the refresh outcome (if a
/// refresh was started) and renders the page.
pub async fn generate(
    config: &DocgenConfig,
    date: NaiveDate,
    events: Vec<FormEvent>,
    refresh: Option<JoinHandle<RateResult<RateQuote>>>,
) -> String {
    let mut session = config.session(date);

    let total = events.len();
    let applied = session.apply_all(events);
    debug!(applied, ignored = total - applied, "form events replayed");

    if let Some(handle) = refresh {
        let result = match handle.await {
            Ok(result) => result.map_err(|err| err.to_string()),
            Err(err) => Err(format!("refresh task failed: {err}")),
        };
        session.apply_rate_result(result);
    }

    render_document(&session)
}

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - ERROR: Fatal startup failures
/// - WARN: Failed rate refreshes
/// - INFO: Startup, successful refreshes
/// - DEBUG: Form events, coercions, rendering
///
/// Output goes to stderr; stdout is reserved for the document.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,galene=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use galene_rates::RateError;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[test]
    fn test_parse_events() {
        assert!(parse_events("").unwrap().is_empty());
        assert!(parse_events("  \n").unwrap().is_empty());

        let events = parse_events(
            r#"[{"type":"set_currency","currency":"USD"},{"type":"add_line_item"}]"#,
        )
        .unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], FormEvent::AddLineItem);

        assert!(matches!(parse_events("{not json"), Err(AppError::Events(_))));
    }

    #[tokio::test]
    async fn test_generate_replays_events() {
        let events = parse_events(
            r#"[
                {"type":"set_currency","currency":"USD"},
                {"type":"update_line_item","index":0,"field":"description","value":"Gorilla permit"},
                {"type":"update_line_item","index":0,"field":"unit_price","value":"800"},
                {"type":"update_line_item","index":0,"field":"quantity","value":"7"},
                {"type":"remove_line_item","index":9}
            ]"#,
        )
        .unwrap();

        let html = generate(&DocgenConfig::default(), date(), events, None).await;
        assert!(html.contains("Gorilla permit"));
        assert!(html.contains("$5600.00"));
        assert!(html.contains("$1008.00"));
    }

    #[tokio::test]
    async fn test_generate_applies_refreshed_rate() {
        let refresh = tokio::spawn(async {
            Ok(RateQuote {
                rate: dec!(3800),
                fetched_at: Utc::now(),
            })
        });
        let events = vec![FormEvent::UpdateLineItem {
            index: 0,
            field: galene_core::session::LineItemField::UnitPrice,
            value: "100".to_string(),
        }];
        let config = DocgenConfig {
            tax_percent: dec!(0),
            company_share_percent: dec!(0),
            ..Default::default()
        };

        let html = generate(&config, date(), events, Some(refresh)).await;
        assert!(html.contains("UGX 380,000"));
        assert!(!html.contains("rate-warning"));
    }

    #[tokio::test]
    async fn test_generate_failed_refresh_keeps_rate() {
        let refresh = tokio::spawn(async { Err(RateError::MissingRate) });
        let events = vec![FormEvent::UpdateLineItem {
            index: 0,
            field: galene_core::session::LineItemField::UnitPrice,
            value: "100".to_string(),
        }];

        let html = generate(&DocgenConfig::default(), date(), events, Some(refresh)).await;
        assert!(html.contains("UGX 370,000"));
        assert!(html.contains(
            "Could not refresh exchange rate: rate source response has no UGX rate"
        ));
    }
}

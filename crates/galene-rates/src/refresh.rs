//! # Rate Refresh
//!
//! Turns one fetch into a request/response value the caller applies to its
//! session.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User clicks "Refresh rate" (or the app starts with refresh enabled)    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  spawn_refresh(source) ──► tokio task, caller keeps going               │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  Ok(RateQuote { rate, fetched_at })   or   Err(RateError)               │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  session.apply_rate_result(result)                                      │
//! │     • Ok:  rate + last-updated set, warning cleared                     │
//! │     • Err: rate untouched, inline warning shown                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Retrying is calling it again. Refreshes carry no sequencing token, so if
//! several are in flight the last one applied wins.

use std::sync::Arc;

use chrono::Utc;
use galene_core::RateQuote;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::RateResult;
use crate::source::{extract_ugx_rate, RateSource};

/// Fetches the current UGX rate once.
pub async fn refresh_rate<S: RateSource + ?Sized>(source: &S) -> RateResult<RateQuote> {
    debug!(source = source.name(), "refreshing exchange rate");

    let body = match source.fetch_usd_rates().await {
        Ok(body) => body,
        Err(err) => {
            warn!(source = source.name(), error = %err, "rate fetch failed");
            return Err(err);
        }
    };

    let rate = extract_ugx_rate(&body).inspect_err(|err| {
        warn!(source = source.name(), error = %err, "rate payload rejected");
    })?;

    info!(source = source.name(), %rate, "fetched UGX rate");
    Ok(RateQuote {
        rate,
        fetched_at: Utc::now(),
    })
}

/// Runs [`refresh_rate`] on a background task.
///
/// Dropping the handle does not cancel the fetch; it just discards the
/// result.
pub fn spawn_refresh(source: Arc<dyn RateSource>) -> JoinHandle<RateResult<RateQuote>> {
    tokio::spawn(async move { refresh_rate(source.as_ref()).await })
}

// =============================================================================
// Unit Tests
// =============================================================================

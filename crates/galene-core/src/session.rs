//! # Session State
//!
//! One editing session: the document model plus currency selection and the
//! exchange rate. Owned by the caller and passed to render/compute code; there
//! is no global state and no locking.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Form Input               FormEvent                 Model Change        │
//! │  ──────────               ─────────                 ────────────        │
//! │                                                                         │
//! │  Click "Add" ───────────► AddLineItem ────────────► items.push(blank)   │
//! │                                                                         │
//! │  Type price ────────────► UpdateLineItem ─────────► items[i].price = n  │
//! │                                                                         │
//! │  Click remove ──────────► RemoveLineItem ─────────► items.remove(i)     │
//! │                                                                         │
//! │  Rate fetch completes ──► apply_rate_result() ────► rate / warning      │
//! │                                                                         │
//! │  View document ─────────► totals(), format() ─────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exchange Rate Handling
//! The rate field stays editable. Whatever the user types is kept, but only
//! a positive rate is used for conversion: otherwise formatting falls back
//! to the last known good rate and [`Session::rate_warning`] explains why.
//! Refresh results are applied in arrival order (last writer wins).

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::coerce::{coerce_percent, coerce_price, coerce_quantity, coerce_rate};
use crate::money::{format_currency, format_unit_price, Currency};
use crate::pricing::{compute_totals, Totals};
use crate::types::{DocumentModel, DocumentType, LineItem};
use crate::DEFAULT_EXCHANGE_RATE;

// =============================================================================
// Exchange Rate Types
// =============================================================================

/// A successfully fetched UGX-per-USD rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
    pub rate: Decimal,
    pub fetched_at: DateTime<Utc>,
}

/// Outcome of the most recent refresh, for the status line next to the
/// rate field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateStatus {
    /// When a fetched rate was last applied.
    pub last_updated: Option<DateTime<Utc>>,
    /// Warning from the last failed refresh. Cleared by a successful one.
    pub refresh_warning: Option<String>,
}

// =============================================================================
// Form Events
// =============================================================================

/// Editable line item columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LineItemField {
    Description,
    UnitPrice,
    Quantity,
    Unit,
}

/// Editable company fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CompanyField {
    Name,
    Tagline,
    Phone,
    Email,
    Website,
    Address,
}

/// Editable client fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ClientField {
    Name,
    Phone,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PolicyField {
    Payment,
    Cancellation,
    Rate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentField {
    BankName,
    AccountName,
    AccountNumber,
    SwiftCode,
    MobileMoney,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LetterField {
    Subject,
    Body,
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SignatoryField {
    Name,
    Title,
}

/// A single user edit.
///
/// Values arrive as raw form text; numeric fields are coerced on apply.
///
/// ```json
/// { "type": "update_line_item", "index": 0, "field": "unit_price", "value": "800" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    SetDocumentType { document_type: DocumentType },
    SetCurrency { currency: Currency },
    SetExchangeRate { value: String },
    SetCompanyField { field: CompanyField, value: String },
    SetClientField { field: ClientField, value: String },
    SetDocumentNumber { value: String },
    /// `YYYY-MM-DD`, as produced by a date input.
    SetDocumentDate { value: String },
    AddLineItem,
    RemoveLineItem { index: usize },
    UpdateLineItem { index: usize, field: LineItemField, value: String },
    SetTaxPercent { value: String },
    SetCompanySharePercent { value: String },
    SetPolicy { field: PolicyField, value: String },
    /// A blank value clears the field.
    SetPaymentDetail { field: PaymentField, value: String },
    SetLetterField { field: LetterField, value: String },
    SetSignatoryField { field: SignatoryField, value: String },
}

// =============================================================================
// Session
// =============================================================================

/// The in-memory state of one document editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub document: DocumentModel,
    pub currency: Currency,
    /// Rate as last entered or fetched. May be unusable (<= 0).
    exchange_rate: Decimal,
    /// Last positive rate, used whenever `exchange_rate` is not.
    last_good_rate: Decimal,
    rate_status: RateStatus,
}

impl Session {
    /// Starts a session on `date` with the sample document, UGX display and
    /// the default rate.
    pub fn new(date: NaiveDate) -> Self {
        let rate = Decimal::from(DEFAULT_EXCHANGE_RATE);
        Session {
            document: DocumentModel::new(date),
            currency: Currency::default(),
            exchange_rate: rate,
            last_good_rate: rate,
            rate_status: RateStatus::default(),
        }
    }

    /// Sets the display currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the starting rate. A non-positive rate is kept as entered and
    /// the default stays the fallback.
    pub fn with_exchange_rate(mut self, rate: Decimal) -> Self {
        self.set_exchange_rate(rate);
        self
    }

    /// Rate as entered (or fetched).
    pub fn exchange_rate(&self) -> Decimal {
        self.exchange_rate
    }

    /// Rate used for conversion: the entered rate when positive, otherwise
    /// the last known good one.
    pub fn effective_rate(&self) -> Decimal {
        if self.exchange_rate > Decimal::ZERO {
            self.exchange_rate
        } else {
            self.last_good_rate
        }
    }

    pub fn rate_status(&self) -> &RateStatus {
        &self.rate_status
    }

    /// Inline warning for the rate field, if there is anything to warn about.
    pub fn rate_warning(&self) -> Option<String> {
        if self.exchange_rate <= Decimal::ZERO {
            return Some(format!(
                "Exchange rate must be greater than zero; using {} UGX per USD",
                self.last_good_rate
            ));
        }
        self.rate_status.refresh_warning.clone()
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    /// Totals for the current snapshot. Recomputed on every call.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.document.line_items, &self.document.additional_costs)
    }

    /// Formats a USD amount in the selected currency.
    pub fn format(&self, amount: Decimal) -> String {
        let rate = self.effective_rate();
        match format_currency(amount, self.currency, rate) {
            Ok(text) => text,
            Err(err) => {
                // effective_rate() is positive by construction
                warn!(error = %err, "falling back to USD display");
                format_currency(amount, Currency::Usd, rate).unwrap_or_default()
            }
        }
    }

    /// Formats a unit price for the items table.
    pub fn format_unit_price(&self, price: Decimal) -> String {
        format_unit_price(price, self.currency)
    }

    // -------------------------------------------------------------------------
    // Exchange Rate
    // -------------------------------------------------------------------------

    fn set_exchange_rate(&mut self, rate: Decimal) {
        self.exchange_rate = rate;
        if rate > Decimal::ZERO {
            self.last_good_rate = rate;
        } else {
            debug!(%rate, "unusable exchange rate entered, keeping {}", self.last_good_rate);
        }
    }

    /// Applies the result of an exchange-rate refresh.
    ///
    /// ## Behavior
    /// - Success: rate, fallback rate and `last_updated` are replaced and
    ///   any earlier refresh warning is cleared
    /// - Failure: the rate is left untouched and the reason becomes the
    ///   inline warning
    ///
    /// Results are not sequenced: a slow, stale refresh that completes after
    /// a newer one still overwrites it.
    pub fn apply_rate_result<E: fmt::Display>(&mut self, result: Result<RateQuote, E>) {
        match result {
            Ok(quote) if quote.rate > Decimal::ZERO => {
                info!(rate = %quote.rate, fetched_at = %quote.fetched_at, "exchange rate updated");
                self.set_exchange_rate(quote.rate);
                self.rate_status.last_updated = Some(quote.fetched_at);
                self.rate_status.refresh_warning = None;
            }
            Ok(quote) => {
                warn!(rate = %quote.rate, "ignoring non-positive fetched rate");
                self.rate_status.refresh_warning =
                    Some(format!("Rate source returned an unusable rate ({})", quote.rate));
            }
            Err(err) => {
                warn!(error = %err, "exchange rate refresh failed");
                self.rate_status.refresh_warning =
                    Some(format!("Could not refresh exchange rate: {err}"));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Form Events
    // -------------------------------------------------------------------------

    /// Applies one user edit.
    ///
    /// ## Returns
    /// `false` when the event was ignored (line index out of range or an
    /// unparseable date); the session is unchanged in that case.
    pub fn apply(&mut self, event: FormEvent) -> bool {
        debug!(?event, "applying form event");

        match event {
            FormEvent::SetCurrency { currency } => {
                self.currency = currency;
                true
            }
            FormEvent::SetExchangeRate { value } => {
                self.set_exchange_rate(coerce_rate(&value));
                true
            }
            other => apply_to_document(&mut self.document, other),
        }
    }

    /// Applies events in order, returning how many were applied.
    pub fn apply_all(&mut self, events: impl IntoIterator<Item = FormEvent>) -> usize {
        let mut applied = 0;
        for event in events {
            if self.apply(event) {
                applied += 1;
            }
        }
        applied
    }
}

/// Applies an edit that only touches the document model.
fn apply_to_document(doc: &mut DocumentModel, event: FormEvent) -> bool {
    match event {
        FormEvent::SetDocumentType { document_type } => doc.document_type = document_type,
        FormEvent::SetCompanyField { field, value } => {
            let company = &mut doc.company;
            let slot = match field {
                CompanyField::Name => &mut company.name,
                CompanyField::Tagline => &mut company.tagline,
                CompanyField::Phone => &mut company.phone,
                CompanyField::Email => &mut company.email,
                CompanyField::Website => &mut company.website,
                CompanyField::Address => &mut company.address,
            };
            *slot = value;
        }
        FormEvent::SetClientField { field, value } => {
            let client = &mut doc.client;
            let slot = match field {
                ClientField::Name => &mut client.name,
                ClientField::Phone => &mut client.phone,
                ClientField::Email => &mut client.email,
            };
            *slot = value;
        }
        FormEvent::SetDocumentNumber { value } => doc.details.number = value,
        FormEvent::SetDocumentDate { value } => {
            match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
                Ok(date) => doc.details.date = date,
                Err(err) => {
                    debug!(%value, error = %err, "ignoring unparseable document date");
                    return false;
                }
            }
        }
        FormEvent::AddLineItem => doc.line_items.push(LineItem::default()),
        FormEvent::RemoveLineItem { index } => {
            if index >= doc.line_items.len() {
                debug!(index, len = doc.line_items.len(), "remove: line index out of range");
                return false;
            }
            doc.line_items.remove(index);
        }
        FormEvent::UpdateLineItem { index, field, value } => {
            let Some(item) = doc.line_items.get_mut(index) else {
                debug!(index, "update: line index out of range");
                return false;
            };
            match field {
                LineItemField::Description => item.description = value,
                LineItemField::UnitPrice => item.unit_price = coerce_price(&value),
                LineItemField::Quantity => item.quantity = coerce_quantity(&value),
                LineItemField::Unit => item.unit = value,
            }
        }
        FormEvent::SetTaxPercent { value } => {
            doc.additional_costs.tax_percent = coerce_percent(&value);
        }
        FormEvent::SetCompanySharePercent { value } => {
            doc.additional_costs.company_share_percent = coerce_percent(&value);
        }
        FormEvent::SetPolicy { field, value } => {
            let policies = &mut doc.policies;
            let slot = match field {
                PolicyField::Payment => &mut policies.payment,
                PolicyField::Cancellation => &mut policies.cancellation,
                PolicyField::Rate => &mut policies.rate,
            };
            *slot = value;
        }
        FormEvent::SetPaymentDetail { field, value } => {
            let payment = &mut doc.payment_details;
            let slot = match field {
                PaymentField::BankName => &mut payment.bank_name,
                PaymentField::AccountName => &mut payment.account_name,
                PaymentField::AccountNumber => &mut payment.account_number,
                PaymentField::SwiftCode => &mut payment.swift_code,
                PaymentField::MobileMoney => &mut payment.mobile_money,
            };
            *slot = if value.trim().is_empty() { None } else { Some(value) };
        }
        FormEvent::SetLetterField { field, value } => {
            let letter = &mut doc.letter;
            let slot = match field {
                LetterField::Subject => &mut letter.subject,
                LetterField::Body => &mut letter.body,
                LetterField::Closing => &mut letter.closing,
            };
            *slot = value;
        }
        FormEvent::SetSignatoryField { field, value } => match field {
            SignatoryField::Name => doc.signatory.name = value,
            SignatoryField::Title => doc.signatory.title = value,
        },
        // Session-level events are handled by Session::apply
        FormEvent::SetCurrency { .. } | FormEvent::SetExchangeRate { .. } => return false,
    }

    true
}

// =============================================================================
// Unit Tests
// =============================================================================

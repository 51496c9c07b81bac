//! # Domain Types
//!
//! The editable document model.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         DocumentModel                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CompanyInfo    │   │   ClientInfo    │   │ DocumentDetails │       │
//! │  │  name, tagline  │   │  name, phone    │   │  number, date   │       │
//! │  │  phone, email   │   │  email          │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ Vec<LineItem>   │   │ AdditionalCosts │   │    Policies     │       │
//! │  │  (ordered)      │   │  tax %, share % │   │  payment, ...   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ PaymentDetails  │   │  LetterContent  │   │  DocumentType   │       │
//! │  │  (optional)     │   │  subject, body  │   │  quotation ...  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Nothing here has an ID. A line item is addressed by its position, and
//! positions are stable until an item before it is removed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::pricing::saturating_mul;
use crate::{DEFAULT_COMPANY_SHARE_PERCENT, DEFAULT_TAX_PERCENT, DEFAULT_UNIT};

// =============================================================================
// Document Type
// =============================================================================

/// Which document the session renders.
///
/// Pure display mode: pricing math is the same for every type, and
/// [`DocumentType::Letter`] simply hides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    #[default]
    Quotation,
    Invoice,
    Receipt,
    Letter,
}

impl DocumentType {
    /// Every document type, in selector order.
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Quotation,
        DocumentType::Invoice,
        DocumentType::Receipt,
        DocumentType::Letter,
    ];

    /// Lowercase name, as shown on the title bar before uppercasing.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Quotation => "quotation",
            DocumentType::Invoice => "invoice",
            DocumentType::Receipt => "receipt",
            DocumentType::Letter => "letter",
        }
    }

    /// Whether line items, totals and policies are rendered.
    pub const fn shows_pricing(&self) -> bool {
        !matches!(self, DocumentType::Letter)
    }
}

// =============================================================================
// Parties
// =============================================================================

/// The issuing company, shown in the letterhead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub address: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        CompanyInfo {
            name: "GALENE HOLIDAYS AFRICA".to_string(),
            tagline: "CRAFTING UNIQUE SAFARIS".to_string(),
            phone: "+256 701 608674".to_string(),
            email: "basuleedrine@gmail.com".to_string(),
            website: "www.galeneholidaysafrica.com".to_string(),
            address: "Kampala, Uganda".to_string(),
        }
    }
}

/// The recipient ("Bill To" on priced documents).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Person signing the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Signatory {
    pub name: String,
    pub title: String,
}

impl Default for Signatory {
    fn default() -> Self {
        Signatory {
            name: "PAUL EDRINE BASULE".to_string(),
            title: "Director".to_string(),
        }
    }
}

/// Document number and issue date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetails {
    pub number: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
}

impl DocumentDetails {
    /// Details for a new session started on `date`.
    pub fn starting_on(date: NaiveDate) -> Self {
        DocumentDetails {
            number: "001".to_string(),
            date,
        }
    }
}

// =============================================================================
// Line Items
// =============================================================================

/// One priced entry on a document.
///
/// ## Invariants
/// - `unit_price >= 0` (enforced by [`LineItem::new`],
///   [`crate::coerce::coerce_price`] and deserialization; totals clamp too)
/// - A zero `quantity` counts as one unit in every total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,

    /// Price per unit, in USD.
    #[ts(type = "string")]
    #[serde(deserialize_with = "deserialize_price")]
    pub unit_price: Decimal,

    /// Quantity as entered. May be zero.
    #[ts(type = "string")]
    pub quantity: Decimal,

    /// Unit label (e.g. "pax", "night").
    pub unit: String,
}

impl LineItem {
    /// Creates a line item. Negative prices clamp to zero.
    pub fn new(
        description: impl Into<String>,
        unit_price: Decimal,
        quantity: Decimal,
        unit: impl Into<String>,
    ) -> Self {
        LineItem {
            description: description.into(),
            unit_price: unit_price.max(Decimal::ZERO),
            quantity,
            unit: unit.into(),
        }
    }

    /// Quantity used for pricing: zero means one unit.
    pub fn effective_quantity(&self) -> Decimal {
        if self.quantity.is_zero() {
            Decimal::ONE
        } else {
            self.quantity
        }
    }

    /// Extended price (unit price × effective quantity). Saturates instead
    /// of overflowing.
    pub fn line_total(&self) -> Decimal {
        saturating_mul(self.unit_price.max(Decimal::ZERO), self.effective_quantity())
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(<Decimal as Deserialize>::deserialize(deserializer)?.max(Decimal::ZERO))
}

impl Default for LineItem {
    /// A blank row: no description, price 0, quantity 1, unit "pax".
    fn default() -> Self {
        LineItem {
            description: String::new(),
            unit_price: Decimal::ZERO,
            quantity: Decimal::ONE,
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

/// Additional-cost percentages applied on top of the subtotal.
///
/// Whole-number percentages: `18` means 18%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalCosts {
    #[ts(type = "string")]
    pub tax_percent: Decimal,
    #[ts(type = "string")]
    pub company_share_percent: Decimal,
}

impl Default for AdditionalCosts {
    fn default() -> Self {
        AdditionalCosts {
            tax_percent: Decimal::from(DEFAULT_TAX_PERCENT),
            company_share_percent: Decimal::from(DEFAULT_COMPANY_SHARE_PERCENT),
        }
    }
}

// =============================================================================
// Text Blocks
// =============================================================================

/// Policy paragraphs printed under the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Policies {
    pub payment: String,
    pub cancellation: String,
    pub rate: String,
}

impl Policies {
    /// Policy blocks in print order, with their headings.
    pub fn sections(&self) -> [(&'static str, &str); 3] {
        [
            ("Payment Policy", self.payment.as_str()),
            ("Cancellation Policy", self.cancellation.as_str()),
            ("Rate Policy", self.rate.as_str()),
        ]
    }
}

impl Default for Policies {
    fn default() -> Self {
        Policies {
            payment: "A payment of 100% on given permits is required on confirmation of your \
                      booking. A 50% deposit on reservation of the car rental and guide is also \
                      required on confirmation."
                .to_string(),
            cancellation: "Cancelled bookings forfeit 30% deposit if cancelled 60 days of arrival. \
                           50% of the total booking will be charged for cancellation between 59 \
                           and 30 days before the arrival date."
                .to_string(),
            rate: "All rates are in US DOLLARS and a separate table of the government taxes and \
                   services charge but are subject to change without notice."
                .to_string(),
        }
    }
}

/// Where the client should send money. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub bank_name: Option<String>,
    pub account_name: Option<String>,
    pub account_number: Option<String>,
    pub swift_code: Option<String>,
    pub mobile_money: Option<String>,
}

impl PaymentDetails {
    /// Labelled rows that have a non-blank value, in print order.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        [
            ("Bank", &self.bank_name),
            ("Account Name", &self.account_name),
            ("Account Number", &self.account_number),
            ("SWIFT Code", &self.swift_code),
            ("Mobile Money", &self.mobile_money),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }

    /// True when there is nothing to print.
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// Body of a letter-mode document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LetterContent {
    pub subject: String,
    pub body: String,
    pub closing: String,
}

impl Default for LetterContent {
    fn default() -> Self {
        LetterContent {
            subject: String::new(),
            body: String::new(),
            closing: "Sincerely,\n\nPaul Edrine Basule\nDirector".to_string(),
        }
    }
}

// =============================================================================
// Document Model
// =============================================================================

/// Everything the user can edit for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentModel {
    pub document_type: DocumentType,
    pub company: CompanyInfo,
    pub client: ClientInfo,
    pub details: DocumentDetails,
    pub line_items: Vec<LineItem>,
    pub additional_costs: AdditionalCosts,
    pub policies: Policies,
    pub payment_details: PaymentDetails,
    pub letter: LetterContent,
    pub signatory: Signatory,
}

impl DocumentModel {
    /// Sample document for a session started on `date`: one blank line
    /// item and the default company, policies and percentages.
    pub fn new(date: NaiveDate) -> Self {
        DocumentModel {
            document_type: DocumentType::default(),
            company: CompanyInfo::default(),
            client: ClientInfo::default(),
            details: DocumentDetails::starting_on(date),
            line_items: vec![LineItem::default()],
            additional_costs: AdditionalCosts::default(),
            policies: Policies::default(),
            payment_details: PaymentDetails::default(),
            letter: LetterContent::default(),
            signatory: Signatory::default(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[test]
    fn test_line_item_default() {
        let item = LineItem::default();
        assert_eq!(item.unit_price, Decimal::ZERO);
        assert_eq!(item.quantity, Decimal::ONE);
        assert_eq!(item.unit, "pax");
    }

    #[test]
    fn test_line_item_zero_quantity_counts_as_one() {
        let item = LineItem::new("Gorilla permit", dec!(800), dec!(0), "pax");
        assert_eq!(item.effective_quantity(), Decimal::ONE);
        assert_eq!(item.line_total(), dec!(800));
    }

    #[test]
    fn test_line_item_new_clamps_negative_price() {
        let item = LineItem::new("Refund", dec!(-50), dec!(1), "pax");
        assert_eq!(item.unit_price, Decimal::ZERO);
    }

    #[test]
    fn test_document_type_pricing_visibility() {
        assert!(DocumentType::Quotation.shows_pricing());
        assert!(DocumentType::Invoice.shows_pricing());
        assert!(DocumentType::Receipt.shows_pricing());
        assert!(!DocumentType::Letter.shows_pricing());
        assert_eq!(DocumentType::default(), DocumentType::Quotation);
    }

    #[test]
    fn test_payment_details_rows_skip_blank() {
        let details = PaymentDetails {
            bank_name: Some("Stanbic Bank".to_string()),
            account_number: Some("   ".to_string()),
            mobile_money: Some("+256 701 608674".to_string()),
            ..Default::default()
        };
        assert_eq!(
            details.rows(),
            vec![("Bank", "Stanbic Bank"), ("Mobile Money", "+256 701 608674")]
        );
        assert!(!details.is_empty());
        assert!(PaymentDetails::default().is_empty());
    }

    #[test]
    fn test_document_model_defaults() {
        let doc = DocumentModel::new(sample_date());
        assert_eq!(doc.line_items.len(), 1);
        assert_eq!(doc.additional_costs.tax_percent, dec!(18));
        assert_eq!(doc.additional_costs.company_share_percent, dec!(10));
        assert_eq!(doc.details.number, "001");
        assert_eq!(doc.details.date, sample_date());
    }

    #[test]
    fn test_document_model_json_round_trips_decimals() {
        let mut doc = DocumentModel::new(sample_date());
        doc.line_items = vec![LineItem::new("Park fees", dec!(12.50), dec!(3), "pax")];
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"unitPrice\":\"12.50\""));
        let back: DocumentModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_deserialized_negative_price_clamps_to_zero() {
        let item: LineItem = serde_json::from_str(
            r#"{"description":"Refund","unitPrice":"-50","quantity":"2","unit":"pax"}"#,
        )
        .unwrap();
        assert_eq!(item.unit_price, Decimal::ZERO);
        assert_eq!(item.quantity, dec!(2));
    }

    #[test]
    fn test_line_total_ignores_negative_price_set_directly() {
        let mut item = LineItem::new("Lodge", dec!(100), dec!(2), "night");
        item.unit_price = dec!(-100);
        assert_eq!(item.line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_line_total_saturates() {
        let item = LineItem::new("Charter", Decimal::MAX, dec!(2), "trip");
        assert_eq!(item.line_total(), Decimal::MAX);
    }
}

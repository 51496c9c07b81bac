//! # galene-core: Pure Business Logic for Galene Docs
//!
//! This crate is the **heart** of Galene Docs. It holds the document model,
//! the pricing engine and the session state as pure functions and plain data
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Galene Docs Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Form Layer (browser)                         │   │
//! │  │    Company ──► Client ──► Line Items ──► Costs ──► Print        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ FormEvent                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ galene-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │   money   │  │  session  │  │   │
//! │  │   │ Document  │  │  Totals   │  │ Currency  │  │  Session  │  │   │
//! │  │   │ LineItem  │  │ compute_  │  │ format_   │  │ FormEvent │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          galene-rates (UGX per USD)   ·   docgen (HTML)         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Document model (LineItem, CompanyInfo, Policies, etc.)
//! - [`pricing`] - Subtotal, tax, company share and total
//! - [`money`] - Currency selection and display formatting
//! - [`coerce`] - Form text to numbers, never failing
//! - [`session`] - Owned session state and form events
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output; totals are never cached
//! 2. **No I/O**: network and file system access are FORBIDDEN here
//! 3. **Decimal Money**: every amount is a `rust_decimal::Decimal`
//! 4. **Degrade, Don't Fail**: bad numeric input becomes zero
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use galene_core::session::{FormEvent, LineItemField, Session};
//!
//! let mut session = Session::new(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
//! session.apply(FormEvent::UpdateLineItem {
//!     index: 0,
//!     field: LineItemField::UnitPrice,
//!     value: "100".to_string(),
//! });
//! session.apply(FormEvent::SetTaxPercent { value: "0".to_string() });
//! session.apply(FormEvent::SetCompanySharePercent { value: "0".to_string() });
//!
//! assert_eq!(session.format(session.totals().total), "UGX 370,000");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coerce;
pub mod error;
pub mod money;
pub mod pricing;
pub mod session;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use money::{format_currency, Currency};
pub use pricing::{compute_totals, Totals};
pub use session::{FormEvent, RateQuote, RateStatus, Session};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// UGX per USD used until the user edits the rate or a refresh succeeds.
pub const DEFAULT_EXCHANGE_RATE: u32 = 3700;

/// Default value added tax, in percent.
pub const DEFAULT_TAX_PERCENT: u32 = 18;

/// Default company share, in percent.
pub const DEFAULT_COMPANY_SHARE_PERCENT: u32 = 10;

/// Unit label for new line items.
pub const DEFAULT_UNIT: &str = "pax";

//! # Pricing Engine
//!
//! Derives document totals from line items and additional-cost percentages.
//!
//! ## Calculation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal      = Σ unit_price × (quantity || 1)       insertion order   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tax           = subtotal × tax% / 100                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  company share = (subtotal + tax) × share% / 100      tax-inclusive!    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total         = subtotal + tax + company share                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Company share compounds on the tax-inclusive amount. It is NOT
//! `subtotal × share%`.
//!
//! Totals are never stored. They are recomputed from the current model on
//! every read, and nothing here can fail: arithmetic that would overflow
//! `Decimal` saturates at `Decimal::MAX` / `Decimal::MIN`.
//!
//! ## Example
//! ```rust
//! use galene_core::pricing::compute_totals;
//! use galene_core::types::{AdditionalCosts, LineItem};
//! use rust_decimal::Decimal;
//!
//! let items = vec![
//!     LineItem::new("Gorilla permit", Decimal::from(800), Decimal::from(7), "pax"),
//!     LineItem::new("Land cruiser", Decimal::from(250), Decimal::from(7), "day"),
//! ];
//! let totals = compute_totals(&items, &AdditionalCosts::default());
//! assert_eq!(totals.subtotal, Decimal::from(7350));
//! assert_eq!(totals.total, Decimal::new(95403, 1)); // 9540.3
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{AdditionalCosts, LineItem};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Derived amounts for a document, all in USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    #[ts(type = "string")]
    pub subtotal: Decimal,
    #[ts(type = "string")]
    pub tax_amount: Decimal,
    #[ts(type = "string")]
    pub company_share_amount: Decimal,
    #[ts(type = "string")]
    pub total: Decimal,
}

/// Computes subtotal, tax, company share and grand total.
pub fn compute_totals(line_items: &[LineItem], costs: &AdditionalCosts) -> Totals {
    let subtotal = line_items
        .iter()
        .fold(Decimal::ZERO, |sum, item| saturating_add(sum, item.line_total()));

    let tax_amount = saturating_mul(subtotal, costs.tax_percent / HUNDRED);
    let company_share_amount = saturating_mul(
        saturating_add(subtotal, tax_amount),
        costs.company_share_percent / HUNDRED,
    );
    let total = saturating_add(saturating_add(subtotal, tax_amount), company_share_amount);

    Totals {
        subtotal,
        tax_amount,
        company_share_amount,
        total,
    }
}

// =============================================================================
// Saturating Arithmetic
// =============================================================================

/// `a × b`, clamped to the representable range instead of panicking.
pub(crate) fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(if a.is_sign_negative() == b.is_sign_negative() {
        Decimal::MAX
    } else {
        Decimal::MIN
    })
}

/// `a + b`, clamped to the representable range instead of panicking.
pub(crate) fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    // Overflow only happens when both operands share a sign.
    a.checked_add(b)
        .unwrap_or(if a.is_sign_negative() { Decimal::MIN } else { Decimal::MAX })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn item(price: Decimal, qty: Decimal) -> LineItem {
        LineItem::new("Item", price, qty, "pax")
    }

    fn costs(tax: Decimal, share: Decimal) -> AdditionalCosts {
        AdditionalCosts {
            tax_percent: tax,
            company_share_percent: share,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let items = vec![item(dec!(800), dec!(7)), item(dec!(250), dec!(7))];
        let totals = compute_totals(&items, &costs(dec!(18), dec!(10)));

        assert_eq!(totals.subtotal, dec!(7350));
        assert_eq!(totals.tax_amount, dec!(1323));
        assert_eq!(totals.company_share_amount, dec!(867.3));
        assert_eq!(totals.total, dec!(9540.3));
    }

    #[test]
    fn test_empty_items_are_all_zero() {
        let totals = compute_totals(&[], &costs(dec!(18), dec!(10)));
        assert_eq!(totals, Totals::default());
        assert!(totals.total.is_zero());
    }

    #[test]
    fn test_zero_quantity_counts_as_one_unit() {
        let totals = compute_totals(&[item(dec!(120), dec!(0))], &costs(dec!(0), dec!(0)));
        assert_eq!(totals.subtotal, dec!(120));
    }

    /// Critical test: company share is charged on the tax-inclusive amount.
    /// Guards against "simplifying" it to subtotal × share%.
    #[test]
    fn test_company_share_compounds_on_tax() {
        let totals = compute_totals(&[item(dec!(1000), dec!(1))], &costs(dec!(18), dec!(10)));

        let on_tax_inclusive = (totals.subtotal + totals.tax_amount) * dec!(0.10);
        let on_subtotal_only = totals.subtotal * dec!(0.10);

        assert_eq!(totals.company_share_amount, on_tax_inclusive);
        assert_eq!(totals.company_share_amount, dec!(118));
        assert!(totals.company_share_amount > on_subtotal_only);
    }

    #[test]
    fn test_company_share_equals_subtotal_share_without_tax() {
        let totals = compute_totals(&[item(dec!(1000), dec!(1))], &costs(dec!(0), dec!(10)));
        assert_eq!(totals.company_share_amount, dec!(100));
    }

    #[test]
    fn test_adding_item_is_additive() {
        let c = costs(dec!(18), dec!(10));
        let mut items = vec![item(dec!(800), dec!(7))];
        let before = compute_totals(&items, &c);

        items.push(item(dec!(45.5), dec!(3)));
        let after = compute_totals(&items, &c);
        assert_eq!(after.subtotal - before.subtotal, dec!(136.5));

        items.push(item(dec!(60), dec!(0)));
        let last = compute_totals(&items, &c);
        assert_eq!(last.subtotal - after.subtotal, dec!(60));

        // Percentages scale with the subtotal
        assert_eq!(last.tax_amount, last.subtotal * dec!(0.18));
        assert_eq!(
            last.company_share_amount,
            (last.subtotal + last.tax_amount) * dec!(0.10)
        );
    }

    #[test]
    fn test_fractional_percentages() {
        let totals = compute_totals(&[item(dec!(200), dec!(1))], &costs(dec!(8.25), dec!(2.5)));
        assert_eq!(totals.tax_amount, dec!(16.5));
        assert_eq!(totals.company_share_amount, dec!(5.4125));
        assert_eq!(totals.total, dec!(221.9125));
    }

    #[test]
    fn test_compute_is_pure() {
        let items = vec![item(dec!(33.33), dec!(3)), item(dec!(0.01), dec!(0))];
        let c = costs(dec!(18), dec!(10));
        assert_eq!(compute_totals(&items, &c), compute_totals(&items, &c));
    }

    #[test]
    fn test_oversized_inputs_saturate_instead_of_panicking() {
        let huge = Decimal::from_str(&"9".repeat(28)).unwrap();

        let totals = compute_totals(&[item(huge, huge)], &costs(dec!(18), dec!(10)));
        assert_eq!(totals.subtotal, Decimal::MAX);
        assert_eq!(totals.total, Decimal::MAX);

        let totals = compute_totals(&[item(dec!(1000), dec!(1))], &costs(huge, huge));
        assert_eq!(totals.tax_amount, Decimal::MAX);
        assert_eq!(totals.total, Decimal::MAX);
    }

    #[test]
    fn test_saturation_keeps_sign() {
        assert_eq!(saturating_mul(Decimal::MAX, dec!(-2)), Decimal::MIN);
        assert_eq!(saturating_mul(Decimal::MIN, dec!(-2)), Decimal::MAX);
        assert_eq!(saturating_add(Decimal::MIN, dec!(-1)), Decimal::MIN);
        assert_eq!(saturating_add(Decimal::MAX, dec!(1)), Decimal::MAX);
        assert_eq!(saturating_add(dec!(2), dec!(3)), dec!(5));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn line_item() -> impl Strategy<Value = LineItem> {
        (0i64..10_000_000, 0i64..1_000).prop_map(|(cents, qty)| {
            LineItem::new("Item", Decimal::new(cents, 2), Decimal::from(qty), "pax")
        })
    }

    fn percent() -> impl Strategy<Value = Decimal> {
        (0i64..10_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
    }

    proptest! {
        #[test]
        fn adding_an_item_adds_its_extended_price(
            items in prop::collection::vec(line_item(), 0..20),
            extra in line_item(),
            tax in percent(),
            share in percent()
        ) {
            let costs = AdditionalCosts { tax_percent: tax, company_share_percent: share };
            let before = compute_totals(&items, &costs);

            let mut more = items.clone();
            more.push(extra.clone());
            let after = compute_totals(&more, &costs);

            prop_assert_eq!(
                after.subtotal - before.subtotal,
                extra.unit_price * extra.effective_quantity()
            );
        }

        #[test]
        fn company_share_compounds_on_tax_inclusive_amount(
            items in prop::collection::vec(line_item(), 0..20),
            tax in percent(),
            share in percent()
        ) {
            let costs = AdditionalCosts { tax_percent: tax, company_share_percent: share };
            let totals = compute_totals(&items, &costs);
            let share_rate = share / HUNDRED;

            prop_assert_eq!(totals.tax_amount, totals.subtotal * (tax / HUNDRED));
            prop_assert_eq!(
                totals.company_share_amount,
                (totals.subtotal + totals.tax_amount) * share_rate
            );
            if totals.tax_amount > Decimal::ZERO && share > Decimal::ZERO {
                prop_assert!(totals.company_share_amount > totals.subtotal * share_rate);
            }
            prop_assert_eq!(
                totals.total,
                totals.subtotal + totals.tax_amount + totals.company_share_amount
            );
        }

        #[test]
        fn totals_are_pure(
            items in prop::collection::vec(line_item(), 0..20),
            tax in percent(),
            share in percent()
        ) {
            let costs = AdditionalCosts { tax_percent: tax, company_share_percent: share };
            prop_assert_eq!(compute_totals(&items, &costs), compute_totals(&items, &costs));
        }
    }
}

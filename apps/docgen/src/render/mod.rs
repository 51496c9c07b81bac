//! # Rendering
//!
//! Turns a [`Session`] snapshot into a standalone, print-ready HTML page.
//! A single renderer covers every [`DocumentType`]: priced documents get the
//! items table, totals and policies; letters get none of that.
//!
//! Totals are recomputed from the session on every render.

pub mod sections;
pub mod style;

use galene_core::{DocumentType, Session};
use tracing::debug;

/// Renders the full HTML document for the session's current state.
pub fn render_document(session: &Session) -> String {
    let doc = &session.document;
    debug!(document_type = doc.document_type.as_str(), items = doc.line_items.len(), "rendering document");

    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{} {}</title>\n",
        capitalize(doc.document_type.as_str()),
        escape_html(&doc.details.number)
    ));
    html.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", style::PRINT_CSS));

    if let Some(warning) = session.rate_warning() {
        html.push_str(&format!("<div class=\"no-print rate-warning\">{}</div>\n", escape_html(&warning)));
    }

    match doc.document_type {
        DocumentType::Letter => {
            html.push_str("<main class=\"document letter\">\n");
            html.push_str(&sections::letterhead(&doc.company, None));
            html.push_str(&sections::letter_body(&doc.client, doc.details.date, &doc.letter));
        }
        DocumentType::Quotation | DocumentType::Invoice | DocumentType::Receipt => {
            let totals = session.totals();
            html.push_str("<main class=\"document\">\n");
            html.push_str(&sections::letterhead(&doc.company, Some(&doc.client)));
            html.push_str(&sections::title_bar(doc.document_type, &doc.details));
            html.push_str("<div class=\"body\">\n");
            html.push_str(&sections::items_table(&doc.line_items, session));
            html.push_str(&sections::totals(&totals, session));
            html.push_str(&sections::payment_details(&doc.payment_details));
            html.push_str(&sections::policies(&doc.policies));
            html.push_str(&sections::signature(&doc.signatory));
            html.push_str("</div>\n");
        }
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use galene_core::session::LetterField;
    use galene_core::{Currency, FormEvent};
    use rust_decimal_macros::dec;

    fn session() -> Session {
        Session::new(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_quotation_has_every_section() {
        let html = render_document(&session());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Quotation 001</title>"));
        assert!(html.contains("@page { size: A4; margin: 1cm; }"));
        assert!(html.contains("<h2>QUOTATION</h2>"));
        assert!(html.contains("Bill To"));
        assert!(html.contains("Subtotal"));
        assert!(html.contains("Total Amount"));
        assert!(html.contains("Payment Policy"));
        assert!(html.contains("Rate Policy"));
        assert!(html.contains("PAUL EDRINE BASULE"));
        assert!(!html.contains("Payment Details"));
        assert!(!html.contains("rate-warning"));
    }

    #[test]
    fn test_letter_has_no_pricing() {
        let mut session = session();
        session.apply_all([
            FormEvent::SetDocumentType { document_type: DocumentType::Letter },
            FormEvent::SetLetterField { field: LetterField::Subject, value: "Safari booking".to_string() },
        ]);
        let html = render_document(&session);

        assert!(html.contains("<span>Re:</span> Safari booking"));
        assert!(html.contains("October 14, 2026"));
        assert!(html.contains("Sincerely,"));
        assert!(!html.contains("Subtotal"));
        assert!(!html.contains("Total Amount"));
        assert!(!html.contains("Policy"));
        assert!(!html.contains("Bill To"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut session = session();
        session.document.client.name = "<script>alert(1)</script>".to_string();
        let html = render_document(&session);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_priced_document_in_ugx() {
        let mut session = session();
        session.document.line_items[0].unit_price = dec!(100);
        session.document.additional_costs.tax_percent = dec!(0);
        session.document.additional_costs.company_share_percent = dec!(0);
        let html = render_document(&session);
        assert_eq!(html.matches("UGX 370,000").count(), 3);

        let usd = render_document(&session.clone().with_currency(Currency::Usd));
        assert!(usd.contains("$100.00"));
        assert!(!usd.contains("UGX"));
    }

    #[test]
    fn test_rate_warning_banner_is_not_printed() {
        let mut session = session();
        session.apply(FormEvent::SetExchangeRate { value: "-5".to_string() });
        let html = render_document(&session);
        assert!(html.contains("<div class=\"no-print rate-warning\">Exchange rate must be greater than zero"));
        assert!(html.contains("UGX 0"));
    }

    #[test]
    fn test_oversized_amounts_still_render() {
        let nines = "9".repeat(28);
        let mut session = session();
        session.apply_all([
            FormEvent::UpdateLineItem {
                index: 0,
                field: galene_core::session::LineItemField::UnitPrice,
                value: nines.clone(),
            },
            FormEvent::UpdateLineItem {
                index: 0,
                field: galene_core::session::LineItemField::Quantity,
                value: nines,
            },
        ]);
        let html = render_document(&session);
        assert!(html.contains("UGX 79,228,162,514,264,337,593,543,950,335"));
    }

    #[test]
    fn test_payment_details_rendered_when_set() {
        let mut session = session();
        session.document.payment_details.account_number = Some("0123456789".to_string());
        let html = render_document(&session);
        assert!(html.contains("Payment Details"));
        assert!(html.contains("0123456789"));
    }
}

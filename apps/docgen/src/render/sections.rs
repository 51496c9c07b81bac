//! # Document Sections
//!
//! Each function renders one block of the printed page. Blocks that must
//! not split across pages carry the `page-break-avoid` class.
//!
//! ```text
//! ┌───────────────────────────────────────┐   ┌──────────────────────────┐
//! │ letterhead              │  bill_to    │   │ letterhead               │
//! ├───────────────────────────────────────┤   │ letter_date              │
//! │ title_bar  QUOTATION        No. 001   │   │ recipient                │
//! ├───────────────────────────────────────┤   │ Re: subject              │
//! │ items_table                           │   │ body                     │
//! │ totals                                │   │ closing                  │
//! │ payment_details (optional)            │   └──────────────────────────┘
//! │ policies (x3)                         │            Letter
//! │ signature                             │
//! └───────────────────────────────────────┘
//!        Quotation / Invoice / Receipt
//! ```

use chrono::NaiveDate;
use galene_core::{
    ClientInfo, CompanyInfo, DocumentDetails, DocumentType, LetterContent, LineItem,
    PaymentDetails, Policies, Session, Signatory, Totals,
};

use super::escape_html as esc;

/// Long-form date, e.g. "October 14, 2026".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

// =============================================================================
// Header
// =============================================================================

/// Company name, tagline and contact lines. `bill_to` is placed on the
/// right-hand side when given.
pub fn letterhead(company: &CompanyInfo, bill_to: Option<&ClientInfo>) -> String {
    let mut html = String::from("<header class=\"letterhead page-break-avoid\">\n<div>\n");
    html.push_str(&format!("<h1>{}</h1>\n", esc(&company.name)));
    html.push_str(&format!("<p class=\"tagline\">{}</p>\n", esc(&company.tagline)));
    for line in [&company.phone, &company.email, &company.website, &company.address] {
        if !line.trim().is_empty() {
            html.push_str(&format!("<p>{}</p>\n", esc(line)));
        }
    }
    html.push_str("</div>\n");

    if let Some(client) = bill_to {
        html.push_str("<div class=\"bill-to\">\n<p class=\"label\">Bill To</p>\n");
        html.push_str(&format!("<p class=\"name\">{}</p>\n", esc(&client.name)));
        html.push_str(&format!("<p>{}</p>\n<p>{}</p>\n", esc(&client.phone), esc(&client.email)));
        html.push_str("</div>\n");
    }

    html.push_str("</header>\n");
    html
}

/// Document type, number and date.
pub fn title_bar(document_type: DocumentType, details: &DocumentDetails) -> String {
    format!(
        "<section class=\"title-bar page-break-avoid\">\n\
         <h2>{}</h2>\n\
         <div class=\"right\">\n\
         <p class=\"label\">Document Number</p>\n\
         <p class=\"number\">{}</p>\n\
         <p class=\"label\">{}</p>\n\
         </div>\n\
         </section>\n",
        document_type.as_str().to_uppercase(),
        esc(&details.number),
        long_date(details.date),
    )
}

// =============================================================================
// Pricing
// =============================================================================

/// Description, unit price, quantity with unit, and extended price.
pub fn items_table(items: &[LineItem], session: &Session) -> String {
    let mut html = String::from(
        "<table class=\"items page-break-avoid\">\n<thead>\n<tr>\
         <th class=\"left\">Description</th>\
         <th class=\"right\">Price</th>\
         <th class=\"center\">Qty</th>\
         <th class=\"right\">Total</th>\
         </tr>\n</thead>\n<tbody>\n",
    );

    for item in items {
        html.push_str(&format!(
            "<tr><td class=\"left\">{}</td>\
             <td class=\"right\">{}</td>\
             <td class=\"center\">{} <span class=\"unit\">{}</span></td>\
             <td class=\"right\"><strong>{}</strong></td></tr>\n",
            esc(&item.description),
            session.format_unit_price(item.unit_price),
            item.quantity.normalize(),
            esc(&item.unit),
            session.format(item.line_total()),
        ));
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

/// Subtotal, VAT, company share and grand total.
pub fn totals(totals: &Totals, session: &Session) -> String {
    let costs = &session.document.additional_costs;
    let row = |class: &str, label: String, amount: String| {
        format!(
            "<div class=\"row {class}\"><span>{label}</span><span class=\"amount\">{amount}</span></div>\n"
        )
    };

    let mut html = String::from("<section class=\"totals page-break-avoid\">\n");
    html.push_str(&row("subtotal", "Subtotal".to_string(), session.format(totals.subtotal)));
    html.push_str(&row(
        "tax",
        format!("VAT ({}%)", costs.tax_percent.normalize()),
        session.format(totals.tax_amount),
    ));
    html.push_str(&row(
        "share",
        format!("Company Share ({}%)", costs.company_share_percent.normalize()),
        session.format(totals.company_share_amount),
    ));
    html.push_str(&row("grand", "Total Amount".to_string(), session.format(totals.total)));
    html.push_str("</section>\n");
    html
}

/// Bank and mobile-money rows. Empty when no field is set.
pub fn payment_details(details: &PaymentDetails) -> String {
    let rows = details.rows();
    if rows.is_empty() {
        return String::new();
    }

    let mut html = String::from(
        "<section class=\"panel payment-details page-break-avoid\">\n<h3>Payment Details</h3>\n<dl>\n",
    );
    for (label, value) in rows {
        html.push_str(&format!("<dt>{label}</dt><dd>{}</dd>\n", esc(value)));
    }
    html.push_str("</dl>\n</section>\n");
    html
}

/// One panel per policy.
pub fn policies(policies: &Policies) -> String {
    policies
        .sections()
        .iter()
        .map(|(title, text)| {
            format!(
                "<section class=\"panel policy page-break-avoid\">\n<h3>{title}</h3>\n<p>{}</p>\n</section>\n",
                esc(text)
            )
        })
        .collect()
}

pub fn signature(signatory: &Signatory) -> String {
    format!(
        "<section class=\"signature page-break-avoid\">\n\
         <p class=\"name\">{}</p>\n\
         <p class=\"title\">{}</p>\n\
         </section>\n",
        esc(&signatory.name),
        esc(&signatory.title),
    )
}

// =============================================================================
// Letter
// =============================================================================

/// Date, recipient, subject, body and closing of a letter.
pub fn letter_body(client: &ClientInfo, date: NaiveDate, letter: &LetterContent) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<div class=\"date page-break-avoid\">{}</div>\n",
        long_date(date)
    ));
    html.push_str(&format!(
        "<section class=\"recipient page-break-avoid\">\n<p class=\"name\">{}</p>\n<p>{}</p>\n<p>{}</p>\n</section>\n",
        esc(&client.name),
        esc(&client.email),
        esc(&client.phone),
    ));
    html.push_str(&format!(
        "<div class=\"subject page-break-avoid\"><span>Re:</span> {}</div>\n",
        esc(&letter.subject)
    ));
    html.push_str(&format!(
        "<div class=\"content pre-wrap page-break-avoid\">{}</div>\n",
        esc(&letter.body)
    ));
    html.push_str(&format!(
        "<div class=\"closing pre-wrap page-break-avoid\">{}</div>\n",
        esc(&letter.closing)
    ));
    html
}

// =============================================================================
// Unit Tests
// =============================================================================

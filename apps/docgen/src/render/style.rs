//! Print stylesheet embedded in every rendered document.

/// A4 page with a 1cm margin, exact color reproduction, and no page breaks
/// inside `.page-break-avoid` blocks. `.no-print` content stays on screen.
pub const PRINT_CSS: &str = r#"
@page { size: A4; margin: 1cm; }
* { box-sizing: border-box; -webkit-print-color-adjust: exact !important; print-color-adjust: exact !important; }
body { margin: 0; font-family: "Helvetica Neue", Arial, sans-serif; color: #292524; background: #fff; }
.document { max-width: 210mm; margin: 0 auto; }
.page-break-avoid { page-break-inside: avoid; break-inside: avoid; }
.no-print { background: #fef3c7; color: #92400e; border: 1px solid #f59e0b; padding: 8px 12px; margin: 8px 0; font-size: 13px; }
.letterhead { background: linear-gradient(90deg, #065f46, #047857, #0f766e); color: #fff; padding: 24px; display: flex; justify-content: space-between; gap: 24px; }
.letterhead h1 { margin: 0 0 4px; font-size: 26px; letter-spacing: -0.5px; }
.letterhead .tagline { margin: 0 0 12px; font-size: 11px; text-transform: uppercase; letter-spacing: 3px; color: #d1fae5; font-weight: 600; }
.letterhead p { margin: 2px 0; font-size: 12px; }
.bill-to { background: rgba(0, 0, 0, 0.2); border: 1px solid rgba(255, 255, 255, 0.2); border-radius: 6px; padding: 12px 18px; text-align: right; }
.bill-to .label { font-size: 11px; text-transform: uppercase; letter-spacing: 1px; color: #d1fae5; }
.bill-to .name { font-weight: 700; font-size: 16px; }
.title-bar { background: #1c1917; color: #fff; padding: 12px 24px; display: flex; justify-content: space-between; align-items: center; }
.title-bar h2 { margin: 0; font-size: 18px; text-transform: uppercase; letter-spacing: 2px; }
.title-bar .label { font-size: 11px; color: #a8a29e; text-transform: uppercase; margin: 0; }
.title-bar .number { font-weight: 700; color: #fbbf24; margin: 0; }
.body { padding: 24px; }
table.items { width: 100%; border-collapse: collapse; border: 2px solid #e7e5e4; margin-bottom: 16px; font-size: 12px; }
table.items th { background: #f5f5f4; border-bottom: 2px solid #d6d3d1; text-transform: uppercase; letter-spacing: 1px; padding: 8px 12px; }
table.items td { border-bottom: 1px solid #e7e5e4; padding: 8px 12px; }
.left { text-align: left; } .right { text-align: right; } .center { text-align: center; }
.unit { font-size: 11px; color: #78716c; text-transform: uppercase; }
.totals .row { display: flex; justify-content: space-between; border: 2px solid #e7e5e4; border-radius: 6px; padding: 8px 16px; margin-bottom: 8px; font-size: 12px; }
.totals .subtotal { background: #f5f5f4; border-color: #d6d3d1; font-weight: 700; text-transform: uppercase; }
.totals .grand { background: linear-gradient(90deg, #065f46, #0f766e); color: #fff; font-weight: 700; text-transform: uppercase; }
.totals .grand .amount { color: #fcd34d; font-size: 20px; }
.panel { border: 2px solid #d6d3d1; border-radius: 6px; padding: 12px; background: #fafaf9; margin-bottom: 12px; }
.panel h3 { margin: 0 0 8px; padding-bottom: 8px; border-bottom: 2px solid #f59e0b; font-size: 12px; text-transform: uppercase; letter-spacing: 1px; }
.panel p { margin: 0; font-size: 12px; line-height: 1.6; }
.panel dl { display: grid; grid-template-columns: max-content 1fr; gap: 4px 16px; margin: 0; font-size: 12px; }
.panel dt { font-weight: 600; }
.panel dd { margin: 0; }
.signature { border-top: 2px solid #d6d3d1; padding-top: 16px; text-align: right; }
.signature .name { font-weight: 700; font-size: 16px; margin: 0; }
.signature .title { font-size: 12px; color: #57534e; text-transform: uppercase; letter-spacing: 1px; margin: 0; }
.letter { padding: 32px; }
.letter .letterhead { margin: -32px -32px 24px; }
.letter .date { font-size: 12px; color: #57534e; font-weight: 500; margin-bottom: 24px; }
.letter .recipient { margin-bottom: 24px; }
.letter .recipient .name { font-weight: 700; font-size: 16px; margin: 0 0 6px; }
.letter .recipient p { margin: 2px 0; font-size: 12px; color: #57534e; }
.letter .subject { font-weight: 700; font-size: 14px; padding-bottom: 8px; border-bottom: 1px solid #e7e5e4; margin-bottom: 24px; }
.letter .subject span { color: #57534e; }
.pre-wrap { white-space: pre-wrap; line-height: 1.6; font-size: 14px; }
.letter .content { margin-bottom: 48px; }
@media print { .no-print { display: none !important; } html, body { height: auto; overflow: visible; } }
"#;

//! # galene-docgen Entry Point
//!
//! ```text
//! $ echo '[{"type":"set_document_type","document_type":"invoice"}]' \
//!     | GALENE_CURRENCY=USD galene-docgen > invoice.html
//! ```
//!
//! The actual setup is in lib.rs for testability.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match galene_docgen::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "docgen failed");
            eprintln!("galene-docgen: {err}");
            ExitCode::FAILURE
        }
    }
}

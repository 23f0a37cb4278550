//! # Storefront Entry Point
//!
//! Headless run of the storefront: loads configuration, fetches the catalog
//! and logs the first page. The setup lives in `lib.rs` so it can be tested.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match storefront::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Storefront run failed");
            ExitCode::FAILURE
        }
    }
}

//! IBANGen Worker Service Entry Point
//!
//! This is the main entry point for the IBANGen worker service.
//! It initializes configuration, services, and starts the HTTP server.

use ibangen_worker::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}

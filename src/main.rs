//! syrve-history - print a customer's delivery history and its organization
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `SYRVE_USER_ID`: API user identifier
//! - `SYRVE_USER_SECRET`: API user secret
//! - `SYRVE_ORGANIZATION_ID`: organization to query the history in
//! - `SYRVE_PHONE`: customer phone number
//!
//! # Usage
//!
//! ```bash
//! SYRVE_USER_ID=xxx SYRVE_USER_SECRET=yyy SYRVE_PHONE=+79990000000 ./syrve-history
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use syrve_history::{config, loyalty_client, pipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the report
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("syrve_history=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::debug!("Starting syrve-history v{}", env!("CARGO_PKG_VERSION"));

    let config = config::Config::from_env().context("Failed to load configuration")?;

    tracing::debug!(base_url = %config.base_url, "Configuration loaded");

    let client =
        loyalty_client::LoyaltyClient::new(&config).context("Failed to create loyalty client")?;

    let mut stdout = std::io::stdout().lock();
    let outcome = pipeline::run(&client, &config, &mut stdout)
        .await
        .context("Failed to write report")?;
    stdout.flush().context("Failed to flush stdout")?;

    tracing::debug!(?outcome, "Run finished");

    Ok(())
}

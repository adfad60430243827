//! # syrve-history
//!
//! Looks up a customer's delivery history in the Syrve loyalty API and
//! resolves the organization those deliveries belong to.
//!
//! ## Flow
//!
//! 1. Exchange the API user id and secret for an access token
//! 2. Fetch the delivery history for a phone number
//! 3. Read the organization id of the first delivery
//! 4. Fetch the organization list, print the matching entry and then the
//!    whole list
//!
//! Every API failure is logged and ends the run with a message; nothing is
//! retried.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error type separating HTTP, decode and transport failures
//! - [`loyalty_client`] - HTTP client for the loyalty API
//! - [`models`] - Passthrough JSON models with typed accessors
//! - [`directory`] - Organization lookup and listing
//! - [`pipeline`] - The end-to-end lookup flow
//!
//! ## Configuration
//!
//! Required:
//! - `SYRVE_USER_ID`: API user identifier
//! - `SYRVE_USER_SECRET`: API user secret
//!
//! Optional:
//! - `SYRVE_ORGANIZATION_ID`, `SYRVE_PHONE`: lookup target
//! - `SYRVE_BASE_URL`: API base URL (default `https://loyalty.syrve.live/api/0`)
//! - `SYRVE_REQUEST_TIMEOUT`: timeout hint for the organization list (default 30)
//! - `RUST_LOG`: Log level (e.g., `syrve_history=debug`)
//!
//! ## Example
//!
//! ```ignore
//! use syrve_history::config::Config;
//! use syrve_history::loyalty_client::LoyaltyClient;
//! use syrve_history::pipeline;
//!
//! async fn example() -> Result<(), syrve_history::error::LoyaltyError> {
//!     let config = Config::from_env()?;
//!     let client = LoyaltyClient::new(&config)?;
//!
//!     let mut stdout = std::io::stdout().lock();
//!     let outcome = pipeline::run(&client, &config, &mut stdout).await?;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod directory;
pub mod error;
pub mod loyalty_client;
pub mod models;
pub mod pipeline;

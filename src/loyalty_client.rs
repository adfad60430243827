//! HTTP client for the Syrve loyalty API.
//!
//! This module provides the `LoyaltyClient` struct for the three GET
//! endpoints the history lookup needs. Every call is made once; failures are
//! returned as `LoyaltyError` so callers can tell an HTTP status error from
//! an undecodable body or a transport failure.
//!
//! # Security
//!
//! Credentials and the access token are query parameters. They are never
//! logged, and transport errors are stripped of their URL.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::{Config, Credentials};
use crate::error::LoyaltyError;
use crate::models::{AccessToken, DeliveryHistory, Organization};

/// Transport-level timeout in seconds.
///
/// The `request_timeout` query parameter is only a hint to the server; this
/// one keeps a hung connection from blocking the run forever.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

const USER_AGENT: &str = concat!("syrve-history/", env!("CARGO_PKG_VERSION"));

/// Authentication endpoint path.
pub const ACCESS_TOKEN_PATH: &str = "/auth/access_token";

/// Delivery history endpoint path.
pub const DELIVERY_HISTORY_PATH: &str = "/orders/deliveryHistoryByPhone";

/// Organization list endpoint path.
pub const ORGANIZATION_LIST_PATH: &str = "/organization/list";

/// HTTP client for the Syrve loyalty API.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = LoyaltyClient::new(&config)?;
///
/// let token = client.access_token(&config.credentials).await?;
/// let orgs = client.organizations(&token, 30).await?;
/// ```
#[derive(Clone)]
pub struct LoyaltyClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL, e.g. `https://loyalty.syrve.live/api/0`.
    base_url: String,
}

impl LoyaltyClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `LoyaltyError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, LoyaltyError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(LoyaltyError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchanges credentials for an access token.
    ///
    /// The body is a JSON string literal; its surrounding quotes are
    /// removed and the rest is returned untouched.
    pub async fn access_token(&self, credentials: &Credentials) -> Result<AccessToken, LoyaltyError> {
        let body = self
            .get_text(
                ACCESS_TOKEN_PATH,
                &[
                    ("user_id", credentials.user_id.as_str()),
                    ("user_secret", credentials.user_secret.as_str()),
                ],
            )
            .await
            .map_err(|e| match e {
                LoyaltyError::HttpStatus { status, body } => LoyaltyError::HttpStatus {
                    status,
                    body: LoyaltyError::sanitize_message(&body, &credentials.user_secret),
                },
                other => other,
            })?;

        Ok(AccessToken::from_response_body(&body))
    }

    /// Fetches the delivery history for a phone number.
    pub async fn delivery_history(
        &self,
        token: &AccessToken,
        organization_id: &str,
        phone: &str,
    ) -> Result<DeliveryHistory, LoyaltyError> {
        self.get_json(
            DELIVERY_HISTORY_PATH,
            &[
                ("access_token", token.as_str()),
                ("organization", organization_id),
                ("phone", phone),
            ],
        )
        .await
    }

    /// Fetches every organization visible to the API user, in server order.
    pub async fn organizations(
        &self,
        token: &AccessToken,
        request_timeout: u32,
    ) -> Result<Vec<Organization>, LoyaltyError> {
        let request_timeout = request_timeout.to_string();
        self.get_json(
            ORGANIZATION_LIST_PATH,
            &[
                ("access_token", token.as_str()),
                ("request_timeout", request_timeout.as_str()),
            ],
        )
        .await
    }

    /// Makes a GET request and decodes the body as JSON.
    async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, LoyaltyError>
    where
        T: DeserializeOwned,
    {
        let body = self.get_text(path, query).await?;
        serde_json::from_str(&body).map_err(|e| LoyaltyError::decode(body, e))
    }

    /// Makes a GET request and returns the raw body of a 2xx response.
    async fn get_text(&self, path: &str, query: &[(&str, &str)]) -> Result<String, LoyaltyError> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(path = %path, "Making loyalty API request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(LoyaltyError::transport)?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::handle_http_error(status, response).await);
        }

        let body = response.text().await.map_err(LoyaltyError::transport)?;

        tracing::trace!(path = %path, body = %body, "Loyalty API response");

        Ok(body)
    }

    /// Converts a non-success response into `LoyaltyError::HttpStatus`.
    async fn handle_http_error(status: StatusCode, response: reqwest::Response) -> LoyaltyError {
        let body = response.text().await.unwrap_or_default();
        LoyaltyError::HttpStatus { status, body }
    }
}

//! Configuration for a single history lookup run.
//!
//! Settings are read from environment variables (a `.env` file is honoured
//! by the binary). Only the credentials are required; everything else has a
//! default.

use std::env;
use std::fmt;

use url::Url;

use crate::error::LoyaltyError;

/// Base URL of the public Syrve loyalty API.
pub const DEFAULT_BASE_URL: &str = "https://loyalty.syrve.live/api/0";

/// Default `request_timeout` hint sent with the organization list call.
pub const DEFAULT_REQUEST_TIMEOUT: u32 = 30;

/// API user credentials.
///
/// The secret is never printed: `Debug` redacts it.
#[derive(Clone)]
pub struct Credentials {
    /// API user identifier.
    pub user_id: String,

    /// API user secret.
    pub user_secret: String,
}

impl Credentials {
    /// Creates credentials from an id and secret.
    pub fn new(user_id: impl Into<String>, user_secret: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_secret: user_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("user_secret", &"[REDACTED]")
            .finish()
    }
}

/// Everything the pipeline needs to run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the loyalty API, without a trailing slash.
    pub base_url: String,

    /// Credentials exchanged for an access token.
    pub credentials: Credentials,

    /// Organization the delivery history is requested for.
    /// Passed through as-is, even when empty.
    pub organization_id: String,

    /// Customer phone number.
    pub phone: String,

    /// Advisory timeout (seconds) forwarded to the organization list endpoint.
    pub request_timeout: u32,
}

impl Config {
    /// Creates a configuration with default endpoint settings.
    pub fn new(
        credentials: Credentials,
        organization_id: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
            organization_id: organization_id.into(),
            phone: phone.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Overrides the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `SYRVE_USER_ID`: API user identifier
    /// - `SYRVE_USER_SECRET`: API user secret
    ///
    /// # Optional Environment Variables
    ///
    /// - `SYRVE_ORGANIZATION_ID`: organization for the history lookup (default: empty)
    /// - `SYRVE_PHONE`: customer phone number (default: empty)
    /// - `SYRVE_BASE_URL`: API base URL (default: [`DEFAULT_BASE_URL`])
    /// - `SYRVE_REQUEST_TIMEOUT`: timeout hint in seconds (default: 30)
    ///
    /// # Errors
    ///
    /// Returns `LoyaltyError::Config` if a required variable is missing
    /// or a value fails validation.
    pub fn from_env() -> Result<Self, LoyaltyError> {
        let user_id = Self::get_required_env("SYRVE_USER_ID")?;
        let user_secret = Self::get_required_env("SYRVE_USER_SECRET")?;
        Self::validate_user_secret(&user_secret)?;

        let base_url = match env::var("SYRVE_BASE_URL") {
            Ok(value) if !value.trim().is_empty() => Self::validate_base_url(&value)?,
            _ => DEFAULT_BASE_URL.to_string(),
        };

        let request_timeout = match env::var("SYRVE_REQUEST_TIMEOUT") {
            Ok(value) if !value.trim().is_empty() => Self::parse_request_timeout(&value)?,
            _ => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Config {
            base_url,
            credentials: Credentials::new(user_id, user_secret),
            organization_id: env::var("SYRVE_ORGANIZATION_ID").unwrap_or_default(),
            phone: env::var("SYRVE_PHONE").unwrap_or_default(),
            request_timeout,
        })
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, LoyaltyError> {
        env::var(name)
            .map_err(|_| LoyaltyError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(LoyaltyError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Validates and normalizes the base URL.
    fn validate_base_url(raw: &str) -> Result<String, LoyaltyError> {
        let trimmed = raw.trim().trim_end_matches('/');

        let parsed = Url::parse(trimmed).map_err(|e| {
            LoyaltyError::invalid_config(format!("SYRVE_BASE_URL is not a valid URL: {}", e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(LoyaltyError::invalid_config(
                "SYRVE_BASE_URL must start with http:// or https://",
            ));
        }

        Ok(trimmed.to_string())
    }

    fn parse_request_timeout(raw: &str) -> Result<u32, LoyaltyError> {
        raw.trim().parse::<u32>().map_err(|_| {
            LoyaltyError::invalid_config(format!(
                "SYRVE_REQUEST_TIMEOUT must be a whole number of seconds, got: {:?}",
                raw
            ))
        })
    }

    /// Validates the user secret is not a placeholder value.
    fn validate_user_secret(secret: &str) -> Result<(), LoyaltyError> {
        let secret_lower = secret.to_lowercase();
        let placeholder_patterns = ["your_secret", "your_user_secret", "placeholder", "changeme"];

        for pattern in placeholder_patterns {
            if secret_lower.contains(pattern) {
                return Err(LoyaltyError::invalid_config(
                    "SYRVE_USER_SECRET appears to be a placeholder value",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment-mutating tests are avoided; validators are tested directly.

    #[test]
    fn test_validate_base_url_removes_trailing_slash() {
        let result = Config::validate_base_url("https://example.com/api/0/").unwrap();
        assert_eq!(result, "https://example.com/api/0");
    }

    #[test]
    fn test_validate_base_url_requires_scheme() {
        assert!(Config::validate_base_url("example.com").is_err());
        assert!(Config::validate_base_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_user_secret_rejects_placeholder() {
        assert!(Config::validate_user_secret("your_secret_here").is_err());
        assert!(Config::validate_user_secret("CHANGEME").is_err());
    }

    #[test]
    fn test_validate_user_secret_accepts_real_secret() {
        assert!(Config::validate_user_secret("8f1c2a9e").is_ok());
    }

    #[test]
    fn test_parse_request_timeout() {
        assert_eq!(Config::parse_request_timeout(" 45 ").unwrap(), 45);
        assert!(Config::parse_request_timeout("soon").is_err());
        assert!(Config::parse_request_timeout("-1").is_err());
    }

    #[test]
    fn test_new_uses_defaults() {
        let config = Config::new(Credentials::new("user", "secret"), "", "+100");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.organization_id, "");
        assert_eq!(config.phone, "+100");
    }

    #[test]
    fn test_with_base_url_trims_slash() {
        let config = Config::new(Credentials::new("user", "secret"), "org", "+1")
            .with_base_url("http://127.0.0.1:8080/api/0/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/api/0");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Config::new(Credentials::new("user", "hunter2"), "org", "+1");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }
}

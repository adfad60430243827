//! Error types for the loyalty API client.
//!
//! `LoyaltyError` separates the failure kinds a single API call can hit
//! (HTTP status, undecodable body, transport) so callers can report each one
//! distinctly before falling back to an absent result.
//!
//! # Security
//!
//! The user secret travels in a query string. Transport errors are stored
//! without their URL, and server-echoed bodies should go through
//! `sanitize_message()` before they are logged.

use thiserror::Error;

/// Unified error type for all loyalty API operations.
#[derive(Error, Debug)]
pub enum LoyaltyError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP response returned a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The response body, potentially containing error details.
        body: String,
    },

    /// The response body was not the JSON we expected.
    #[error("could not decode response body: {source}")]
    Decode {
        /// The raw response body as received.
        body: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Connection, DNS, timeout or body-read failure.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// JSON serialization failed while rendering a report.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing the report to the console failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoyaltyError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        LoyaltyError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        LoyaltyError::Config(message.into())
    }

    /// Creates a decode error, keeping the raw body for diagnostics.
    pub fn decode(body: impl Into<String>, source: serde_json::Error) -> Self {
        LoyaltyError::Decode {
            body: body.into(),
            source,
        }
    }

    /// Wraps a transport error, dropping the request URL.
    ///
    /// Every endpoint of this API takes credentials or the access token as
    /// query parameters, so the URL must not end up in logs.
    pub fn transport(err: reqwest::Error) -> Self {
        LoyaltyError::Transport(err.without_url())
    }

    /// Returns true if the server answered with 401 or 403.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            LoyaltyError::HttpStatus { status, .. }
                if *status == reqwest::StatusCode::UNAUTHORIZED
                    || *status == reqwest::StatusCode::FORBIDDEN
        )
    }

    /// Sanitizes a message to remove any occurrence of a secret.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `secret` - The value to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the secret replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, secret: &str) -> String {
        if secret.is_empty() {
            return message.to_string();
        }
        message.replace(secret, "[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = LoyaltyError::missing_env("SYRVE_USER_SECRET");
        assert!(err.to_string().contains("SYRVE_USER_SECRET"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_http_status_error_display() {
        let err = LoyaltyError::HttpStatus {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "Wrong credentials".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 401 Unauthorized: Wrong credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_server_error_is_not_unauthorized() {
        let err = LoyaltyError::HttpStatus {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        };
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_decode_error_keeps_body() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = LoyaltyError::decode("<html>", source);
        match err {
            LoyaltyError::Decode { ref body, .. } => assert_eq!(body, "<html>"),
            _ => panic!("expected Decode"),
        }
        assert!(err.to_string().starts_with("could not decode response body"));
    }

    #[test]
    fn test_sanitize_message_removes_secret() {
        let secret = "super_secret_12345";
        let message = format!("user_secret={} is not valid", secret);
        let sanitized = LoyaltyError::sanitize_message(&message, secret);
        assert!(!sanitized.contains(secret));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_secret() {
        let message = "Some error message";
        let sanitized = LoyaltyError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_sanitize_message_no_match() {
        let message = "Some error message";
        let sanitized = LoyaltyError::sanitize_message(message, "not_present");
        assert_eq!(sanitized, message);
    }
}

//! Access token returned by the authentication endpoint.

use std::fmt;

/// Opaque bearer token, valid for as long as the server decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Builds a token from the raw `/auth/access_token` body.
    ///
    /// The endpoint answers with a JSON string literal, so exactly one
    /// leading and one trailing `"` are removed. Anything else is kept.
    pub fn from_response_body(body: &str) -> Self {
        let unquoted = body.strip_prefix('"').unwrap_or(body);
        let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
        Self(unquoted.to_string())
    }

    /// Returns the token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the server handed back an empty token.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_surrounding_quotes() {
        let token = AccessToken::from_response_body("\"abc123\"");
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn test_strips_only_one_quote_per_side() {
        let token = AccessToken::from_response_body("\"\"abc123\"\"");
        assert_eq!(token.as_str(), "\"abc123\"");
    }

    #[test]
    fn test_unquoted_body_is_kept() {
        let token = AccessToken::from_response_body("abc123");
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn test_one_sided_quote() {
        assert_eq!(AccessToken::from_response_body("\"abc").as_str(), "abc");
        assert_eq!(AccessToken::from_response_body("abc\"").as_str(), "abc");
    }

    #[test]
    fn test_empty_token() {
        assert!(AccessToken::from_response_body("\"\"").is_empty());
        assert!(!AccessToken::from_response_body("\"x\"").is_empty());
    }

    #[test]
    fn test_display() {
        let token = AccessToken::from_response_body("\"tok\"");
        assert_eq!(token.to_string(), "tok");
    }
}
